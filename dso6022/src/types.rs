// dso6022-rs/dso6022/src/types.rs

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

/// USB vendor/product id pair
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04x}:{:04x}", vendor_id, product_id)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UsbId {
    /// Vendor id
    pub vendor_id: u16,
    /// Product id
    pub product_id: u16,
}

impl UsbId {
    /// Identity from raw ids
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

/// Firmware revision tag (BCD-ish, e.g. 0x0206)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#06x}", _0)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FirmwareVersion(u16);

impl FirmwareVersion {
    /// Wrap a raw revision
    pub const fn new(version: u16) -> Self {
        Self(version)
    }

    /// Raw revision
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// Selectable voltage range, in volts per division.
///
/// The ordering matches the index of every per-range table in a
/// `ControlSpecification`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum VoltageRange {
    /// 20 mV/div
    MV20,
    /// 50 mV/div
    MV50,
    /// 100 mV/div
    MV100,
    /// 200 mV/div
    MV200,
    /// 500 mV/div
    MV500,
    /// 1 V/div
    V1,
    /// 2 V/div
    V2,
    /// 5 V/div
    V5,
}

impl VoltageRange {
    /// All ranges by increasing sensitivity step
    pub const ALL: [VoltageRange; crate::constants::RANGE_COUNT] = [
        Self::MV20,
        Self::MV50,
        Self::MV100,
        Self::MV200,
        Self::MV500,
        Self::V1,
        Self::V2,
        Self::V5,
    ];

    /// Position in per-range tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Range at table position `index`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Key used for this range in the calibration store
    pub fn name(self) -> &'static str {
        match self {
            Self::MV20 => "20mV",
            Self::MV50 => "50mV",
            Self::MV100 => "100mV",
            Self::MV200 => "200mV",
            Self::MV500 => "500mV",
            Self::V1 => "1000mV",
            Self::V2 => "2000mV",
            Self::V5 => "5000mV",
        }
    }

    /// Inverse of [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Nominal sensitivity
    pub fn millivolts_per_div(self) -> u32 {
        match self {
            Self::MV20 => 20,
            Self::MV50 => 50,
            Self::MV100 => 100,
            Self::MV200 => 200,
            Self::MV500 => 500,
            Self::V1 => 1000,
            Self::V2 => 2000,
            Self::V5 => 5000,
        }
    }
}

/// Input coupling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Coupling {
    /// DC coupling
    #[default]
    DC,
    /// AC coupling (relay mod)
    AC,
}

/// Trigger mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TriggerMode {
    /// Free-run when no trigger occurs
    Auto,
    /// Capture on trigger only
    Normal,
    /// Capture once
    Single,
}

/// Hardware gain setting of one range together with the input voltage
/// spanning the full screen height (8 divisions).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GainStep {
    /// Amplifier gain sent to the device
    pub hardware_gain: u8,
    /// Input voltage spanning full screen height
    pub volts_per_screen: f64,
}

impl GainStep {
    /// Gain step from raw values
    pub const fn new(hardware_gain: u8, volts_per_screen: f64) -> Self {
        Self {
            hardware_gain,
            volts_per_screen,
        }
    }
}

/// One entry of the fixed sample-rate table.
///
/// The hardware acquires at the native rate selected by `sample_id` and
/// the host averages `downsampling` raw samples into one reported sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FixedSampleRate {
    /// Effective rate reported to the user
    pub rate_hz: f64,
    /// Raw rate id sent to the device
    pub sample_id: u8,
    /// Raw samples averaged per reported sample
    pub downsampling: u32,
}

impl FixedSampleRate {
    /// Table entry from raw values
    pub const fn new(rate_hz: f64, sample_id: u8, downsampling: u32) -> Self {
        Self {
            rate_hz,
            sample_id,
            downsampling,
        }
    }

    /// Native acquisition rate selected by `sample_id`: ids up to 100 are
    /// MS/s, ids above 100 count in steps of 10 kS/s.
    pub fn raw_rate_hz(&self) -> f64 {
        raw_rate_for_id(self.sample_id)
    }

    /// `true` when raw samples are averaged
    pub fn is_oversampled(&self) -> bool {
        self.downsampling > 1
    }
}

pub(crate) fn raw_rate_for_id(sample_id: u8) -> f64 {
    if sample_id > 100 {
        (sample_id as f64 - 100.0) * 10e3
    } else {
        sample_id as f64 * 1e6
    }
}

/// Whether a device enumerated with its loaded-firmware identity or is
/// still running the bare EZ-USB loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareState {
    /// Firmware loaded
    Active,
    /// Bare EZ-USB loader
    AwaitingFirmware,
}
