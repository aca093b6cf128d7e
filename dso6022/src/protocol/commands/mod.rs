// dso6022-rs/dso6022/src/protocol/commands/mod.rs

/// Calibration frequency payload
pub mod calfreq;
/// Coupling payload
pub mod coupling;
/// Time base payload
pub mod timediv;
/// Voltage range payload
pub mod voltdiv;

pub use calfreq::{calfreq_code, encode_cal_freq};
pub use coupling::encode_coupling;
pub use timediv::encode_time_div;
pub use voltdiv::encode_volt_div;

use super::CommandKind;
use crate::types::{Coupling, FixedSampleRate, GainStep};

/// Payload of AcquireHardData (0xE3): start acquisition
pub const ACQUIRE_START: u8 = 0x01;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Channel 0 is CH1 (0xE0), channel 1 is CH2 (0xE1)
    SetVoltDiv {
        /// 0 or 1
        channel: usize,
        /// Gain step of the selected range
        step: GainStep,
    },
    /// Select the raw rate of a fixed table entry
    SetTimeDiv {
        /// Selected table entry
        rate: FixedSampleRate,
    },
    /// Start acquisition
    AcquireHardData,
    /// Select the active channel count
    SetNumChannels {
        /// 1 or 2
        count: u8,
    },
    /// Select the coupling of both channels
    SetCoupling {
        /// CH1 coupling
        ch1: Coupling,
        /// CH2 coupling
        ch2: Coupling,
    },
    /// Select the calibration output; see [`calfreq_code`]
    SetCalFreq {
        /// Firmware frequency code
        code: u8,
    },
}

impl Command {
    /// Descriptor kind of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::SetVoltDiv { channel: 0, .. } => CommandKind::SetVoltDivCh1,
            Self::SetVoltDiv { .. } => CommandKind::SetVoltDivCh2,
            Self::SetTimeDiv { .. } => CommandKind::SetTimeDiv,
            Self::AcquireHardData => CommandKind::AcquireHardData,
            Self::SetNumChannels { .. } => CommandKind::SetNumChannels,
            Self::SetCoupling { .. } => CommandKind::SetCoupling,
            Self::SetCalFreq { .. } => CommandKind::SetCalFreq,
        }
    }

    /// Vendor control request code
    pub fn request(&self) -> u8 {
        self.kind().opcode()
    }

    /// Encode the command payload (control transfer data stage).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SetVoltDiv { step, .. } => encode_volt_div(*step),
            Self::SetTimeDiv { rate } => encode_time_div(*rate),
            Self::AcquireHardData => vec![ACQUIRE_START],
            Self::SetNumChannels { count } => vec![*count],
            Self::SetCoupling { ch1, ch2 } => encode_coupling(*ch1, *ch2),
            Self::SetCalFreq { code } => encode_cal_freq(*code),
        }
    }
}
