// dso6022-rs/dso6022/src/control/samplerate.rs

//! Sample-rate limits and the fixed sample-rate table.
//!
//! Native raw rates of the firmware: 20k, 50k, 64k, 100k, 200k, 500k, 1M,
//! 2M, 3M, 4M, 5M, 6M, 8M, 10M, 12M, 15M, 16M, 24M, 30M, 48M. 48M overruns
//! USB in single channel mode, 24M and above overrun in dual channel mode.
//! Effective rates below 10 MS/s are produced by oversampling to improve
//! the SNR.

use crate::constants::UNLIMITED_RECORD_LENGTH;
use crate::types::FixedSampleRate;
use crate::{Error, Result};

use super::{ControlSpecification, SampleRateLimits};

/// 100x downsampling from 100, 200 and 500 kS/s. Timebase up to 1 s/div
/// at the cost of up to 20 s screen refresh.
pub const VERY_SLOW_RATES: [FixedSampleRate; 3] = [
    FixedSampleRate::new(1e3, 110, 100),
    FixedSampleRate::new(2e3, 120, 100),
    FixedSampleRate::new(5e3, 150, 100),
];

/// Oversampled rates from 10 kS/s, then the native rates up to 48 MS/s
pub const STANDARD_RATES: [FixedSampleRate; 15] = [
    // 100x downsampling from 1, 2, 5, 10 MS/s
    FixedSampleRate::new(10e3, 1, 100),
    FixedSampleRate::new(20e3, 2, 100),
    FixedSampleRate::new(50e3, 5, 100),
    FixedSampleRate::new(100e3, 10, 100),
    // 50x .. 2x downsampling from 10 MS/s
    FixedSampleRate::new(200e3, 10, 50),
    FixedSampleRate::new(500e3, 10, 20),
    FixedSampleRate::new(1e6, 10, 10),
    FixedSampleRate::new(2e6, 10, 5),
    FixedSampleRate::new(5e6, 10, 2),
    // native
    FixedSampleRate::new(10e6, 10, 1),
    FixedSampleRate::new(12e6, 12, 1),
    FixedSampleRate::new(15e6, 15, 1),
    FixedSampleRate::new(24e6, 24, 1),
    FixedSampleRate::new(30e6, 30, 1),
    FixedSampleRate::new(48e6, 48, 1),
];

/// Lowest effective rate that is acquired natively
pub const NATIVE_THRESHOLD_HZ: f64 = 10e6;

/// Fill rate limits and the fixed rate table according to the
/// capabilities already set on `spec`.
pub fn init(spec: &mut ControlSpecification) {
    spec.samplerate.single = SampleRateLimits {
        base: 1e6,
        max: 30e6,
        record_lengths: vec![UNLIMITED_RECORD_LENGTH],
    };
    spec.samplerate.multi = SampleRateLimits {
        base: 1e6,
        max: 15e6,
        record_lengths: vec![UNLIMITED_RECORD_LENGTH],
    };

    spec.fixed_sample_rates.clear();
    if spec.capabilities.very_slow_samples {
        spec.fixed_sample_rates.extend_from_slice(&VERY_SLOW_RATES);
    }
    spec.fixed_sample_rates.extend_from_slice(&STANDARD_RATES);
}

/// Pick the table entry for a requested effective rate.
///
/// Policy: exact match or the next higher entry, ignoring entries above
/// `max_hz`. Requests below the lowest entry get the lowest entry;
/// requests above `max_hz` are rejected.
pub fn select(
    table: &[FixedSampleRate],
    requested_hz: f64,
    max_hz: f64,
) -> Result<FixedSampleRate> {
    if !(requested_hz <= max_hz) {
        return Err(Error::UnsupportedSampleRate {
            requested: requested_hz,
            max: max_hz,
        });
    }

    table
        .iter()
        .filter(|e| e.rate_hz <= max_hz)
        .find(|e| e.rate_hz >= requested_hz)
        .copied()
        .ok_or(Error::UnsupportedSampleRate {
            requested: requested_hz,
            max: max_hz,
        })
}

impl ControlSpecification {
    /// Select the fixed rate for `requested_hz` under the limits of the
    /// acquisition mode implied by `active_channels`.
    pub fn select_sample_rate(
        &self,
        requested_hz: f64,
        active_channels: u8,
    ) -> Result<FixedSampleRate> {
        let limits = self.samplerate.for_channels(active_channels);
        select(&self.fixed_sample_rates, requested_hz, limits.max)
    }

    /// Lowest selectable rate
    pub fn min_sample_rate(&self) -> Option<f64> {
        self.fixed_sample_rates.first().map(|e| e.rate_hz)
    }
}
