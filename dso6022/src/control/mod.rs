// dso6022-rs/dso6022/src/control/mod.rs

//! Capability and calibration record consumed by the protocol and
//! acquisition layers.
//!
//! A `ControlSpecification` is built once from compiled-in constants
//! (`voltage::init`, `samplerate::init`), overlaid once with calibration
//! corrections, and read-only afterwards.

/// Sample-rate limits and fixed rate table
pub mod samplerate;
/// Voltage scaling tables
pub mod voltage;

use crate::constants::{ADC_MIDPOINT, BUFFER_DIVIDERS, RANGE_COUNT};
use crate::types::{Coupling, FixedSampleRate, GainStep, TriggerMode, VoltageRange};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Optional hardware capabilities. Cargo features choose the defaults
/// returned by [`Capabilities::from_build`]; both sets can be constructed
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Capabilities {
    /// Fixed rates of 1, 2 and 5 kS/s (timebase up to 1 s/div, very slow
    /// screen refresh)
    pub very_slow_samples: bool,
    /// AC/DC coupling relay hardware mod is fitted
    pub ac_coupling: bool,
}

impl Capabilities {
    /// Capabilities enabled by cargo features
    pub fn from_build() -> Self {
        Self {
            very_slow_samples: cfg!(feature = "very-slow-samples"),
            ac_coupling: cfg!(feature = "ac-coupling"),
        }
    }
}

/// Rate limits of one acquisition mode
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SampleRateLimits {
    /// Base sample rate in S/s
    pub base: f64,
    /// Highest sample rate in S/s
    pub max: f64,
    /// Supported record lengths; `u32::MAX` is unbounded
    pub record_lengths: Vec<u32>,
}

/// Rate limits for single-channel and multi-channel acquisition
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SampleRates {
    /// One active channel
    pub single: SampleRateLimits,
    /// Both channels active
    pub multi: SampleRateLimits,
}

impl SampleRates {
    /// Limits of the mode used with `active_channels`
    pub fn for_channels(&self, active_channels: u8) -> &SampleRateLimits {
        if active_channels <= 1 {
            &self.single
        } else {
            &self.multi
        }
    }
}

/// Capabilities and calibrated tables of one model
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ControlSpecification {
    /// Number of analog inputs
    pub channels: usize,
    /// Optional hardware this specification was built for
    pub capabilities: Capabilities,
    /// Dividers used to drop the unreliable start of a capture
    pub buffer_dividers: [u32; 3],
    /// ADC codes spanning full screen height, per channel and range
    pub voltage_scale: Vec<[f64; RANGE_COUNT]>,
    /// Zero-point correction in ADC codes, per channel and range
    pub voltage_offset: Vec<[i32; RANGE_COUNT]>,
    /// Uncalibrated `voltage_scale`; gain corrections are applied to these
    pub(crate) theoretical_scale: Vec<[f64; RANGE_COUNT]>,
    /// Hardware gain and V/screen per range
    pub gain: [GainStep; RANGE_COUNT],
    /// Rate limits per acquisition mode
    pub samplerate: SampleRates,
    /// Selectable rates, strictly increasing
    pub fixed_sample_rates: Vec<FixedSampleRate>,
    /// Supported input couplings
    pub couplings: Vec<Coupling>,
    /// Supported trigger modes
    pub trigger_modes: Vec<TriggerMode>,
    /// Bulk transfer length; 0 means variable
    pub fixed_usb_in_length: usize,
    /// Selectable calibration output frequencies in Hz
    pub calibration_frequency_steps: Vec<f64>,
    /// Device EEPROM may hold calibration values
    pub has_calibration_eeprom: bool,
}

impl ControlSpecification {
    /// Empty specification for `channels` inputs. All tables are zeroed
    /// until the `voltage` and `samplerate` initializers run.
    pub fn new(channels: usize, capabilities: Capabilities) -> Self {
        Self {
            channels,
            capabilities,
            buffer_dividers: BUFFER_DIVIDERS,
            voltage_scale: vec![[0.0; RANGE_COUNT]; channels],
            voltage_offset: vec![[0; RANGE_COUNT]; channels],
            theoretical_scale: vec![[0.0; RANGE_COUNT]; channels],
            gain: [GainStep::new(0, 0.0); RANGE_COUNT],
            samplerate: SampleRates::default(),
            fixed_sample_rates: Vec::new(),
            couplings: Vec::new(),
            trigger_modes: Vec::new(),
            fixed_usb_in_length: 0,
            calibration_frequency_steps: Vec::new(),
            has_calibration_eeprom: false,
        }
    }

    /// Uncalibrated full-screen ADC code count
    pub fn theoretical_scale(&self, channel: usize, range: VoltageRange) -> Result<f64> {
        self.check_channel(channel)?;
        Ok(self.theoretical_scale[channel][range.index()])
    }

    /// Calibrated full-screen ADC code count
    pub fn voltage_scale(&self, channel: usize, range: VoltageRange) -> Result<f64> {
        self.check_channel(channel)?;
        Ok(self.voltage_scale[channel][range.index()])
    }

    /// Zero-point correction in ADC codes
    pub fn voltage_offset(&self, channel: usize, range: VoltageRange) -> Result<i32> {
        self.check_channel(channel)?;
        Ok(self.voltage_offset[channel][range.index()])
    }

    /// Hardware gain setting of `range`
    pub fn gain_step(&self, range: VoltageRange) -> GainStep {
        self.gain[range.index()]
    }

    /// `true` if `coupling` can be selected
    pub fn supports_coupling(&self, coupling: Coupling) -> bool {
        self.couplings.contains(&coupling)
    }

    /// `true` if `hz` is one of the calibration output steps
    pub fn supports_calibration_frequency(&self, hz: f64) -> bool {
        self.calibration_frequency_steps.iter().any(|&f| f == hz)
    }

    /// Convert one raw ADC byte into the input voltage it represents.
    pub fn raw_to_volts(&self, channel: usize, range: VoltageRange, raw: u8) -> Result<f64> {
        self.check_channel(channel)?;
        let r = range.index();
        let code = raw as i32 - ADC_MIDPOINT + self.voltage_offset[channel][r];
        Ok(code as f64 * self.gain[r].volts_per_screen / self.voltage_scale[channel][r])
    }

    pub(crate) fn set_theoretical_scale(&mut self, table: [f64; RANGE_COUNT]) {
        for ch in 0..self.channels {
            self.theoretical_scale[ch] = table;
            self.voltage_scale[ch] = table;
        }
    }

    fn check_channel(&self, channel: usize) -> Result<()> {
        if channel < self.channels {
            Ok(())
        } else {
            Err(Error::InvalidChannel(channel))
        }
    }
}
