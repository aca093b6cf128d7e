// dso6022-rs/dso6022/src/calibration/mod.rs

//! Calibration overlay.
//!
//! Persisted corrections are looked up by `(group, channel, range)`:
//!
//! ```text
//! [gain]                  [offset]
//! ch0\20mV=1.02           ch0\20mV=130
//! ch1\5000mV=0.98         ...
//! ```
//!
//! A gain `g != 0` replaces the theoretical scale `s` with `s / g`. An
//! offset `v != 255` sets the zero-point correction to `0x80 - v`.
//! Missing, zero/sentinel and unparsable entries all mean "no correction".

/// INI file store
pub mod ini;
/// In-memory store
pub mod memory;

pub use ini::IniStore;
pub use memory::MemoryStore;

use crate::constants::{
    ADC_MIDPOINT, CHANNEL_NAMES, GAIN_DEFAULT, OFFSET_ABSENT, OFFSET_DEFAULT,
};
use crate::control::ControlSpecification;
use crate::types::VoltageRange;

/// Top-level group of the calibration store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Gain correction, a decimal factor
    Gain,
    /// Raw ADC code of a 0 V input
    Offset,
}

impl Group {
    /// Section name in the calibration file
    pub fn name(self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Offset => "offset",
        }
    }

    /// Inverse of [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gain" => Some(Self::Gain),
            "offset" => Some(Self::Offset),
            _ => None,
        }
    }
}

/// Read-only source of persisted calibration values.
pub trait CalibrationStore {
    /// Raw textual value stored for `channel` ("ch0", "ch1") and `range`
    /// ("20mV" .. "5000mV"), if any.
    fn value(&self, group: Group, channel: &str, range: &str) -> Option<String>;
}

impl<S: CalibrationStore + ?Sized> CalibrationStore for &S {
    fn value(&self, group: Group, channel: &str, range: &str) -> Option<String> {
        (**self).value(group, channel, range)
    }
}

impl<S: CalibrationStore + ?Sized> CalibrationStore for Box<S> {
    fn value(&self, group: Group, channel: &str, range: &str) -> Option<String> {
        (**self).value(group, channel, range)
    }
}

/// Number of corrections that replaced a theoretical value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlaySummary {
    /// Gain entries applied
    pub gains: usize,
    /// Offset entries applied
    pub offsets: usize,
}

impl OverlaySummary {
    /// `true` when the store changed nothing
    pub fn is_empty(&self) -> bool {
        self.gains == 0 && self.offsets == 0
    }
}

/// Parse a stored gain. Unparsable and non-finite values read as 0.0,
/// which means "absent".
pub fn parse_gain(raw: Option<&str>) -> f64 {
    let raw = raw.unwrap_or(GAIN_DEFAULT).trim();
    match raw.parse::<f64>() {
        Ok(g) if g.is_finite() => g,
        _ => 0.0,
    }
}

/// Parse a stored offset. Unparsable values read as the 255 sentinel.
pub fn parse_offset(raw: Option<&str>) -> i32 {
    let raw = raw.unwrap_or(OFFSET_DEFAULT).trim();
    raw.parse::<i32>().unwrap_or(OFFSET_ABSENT)
}

/// Overlay the corrections found in `store` on `spec`.
///
/// Results are computed from the theoretical tables, so applying the same
/// store again leaves `spec` unchanged.
pub fn overlay<S>(spec: &mut ControlSpecification, store: &S) -> OverlaySummary
where
    S: CalibrationStore + ?Sized,
{
    let mut summary = OverlaySummary::default();
    let channels = spec.channels.min(CHANNEL_NAMES.len());

    for (ch, ch_name) in CHANNEL_NAMES.iter().enumerate().take(channels) {
        for range in VoltageRange::ALL {
            let r = range.index();
            let theoretical = spec.theoretical_scale[ch][r];

            let gain = parse_gain(store.value(Group::Gain, ch_name, range.name()).as_deref());
            if gain != 0.0 {
                spec.voltage_scale[ch][r] = theoretical / gain;
                summary.gains += 1;
                log::debug!(
                    "{} {}: gain {} -> scale {}",
                    ch_name,
                    range.name(),
                    gain,
                    spec.voltage_scale[ch][r]
                );
            } else {
                spec.voltage_scale[ch][r] = theoretical;
            }

            let offset =
                parse_offset(store.value(Group::Offset, ch_name, range.name()).as_deref());
            if offset != OFFSET_ABSENT {
                spec.voltage_offset[ch][r] = ADC_MIDPOINT - offset;
                summary.offsets += 1;
                log::debug!(
                    "{} {}: offset {} -> correction {}",
                    ch_name,
                    range.name(),
                    offset,
                    spec.voltage_offset[ch][r]
                );
            } else {
                spec.voltage_offset[ch][r] = 0;
            }
        }
    }

    summary
}

impl ControlSpecification {
    /// See [`overlay`].
    pub fn apply_calibration<S>(&mut self, store: &S) -> OverlaySummary
    where
        S: CalibrationStore + ?Sized,
    {
        overlay(self, store)
    }
}
