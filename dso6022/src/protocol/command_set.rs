// dso6022-rs/dso6022/src/protocol/command_set.rs

use crate::constants::{
    REQ_ACQUIRE_HARD_DATA, REQ_SET_CAL_FREQ, REQ_SET_COUPLING, REQ_SET_NUM_CHANNELS,
    REQ_SET_TIMEDIV, REQ_SET_VOLTDIV_CH1, REQ_SET_VOLTDIV_CH2,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Hardware commands understood by the 6022 firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CommandKind {
    /// CH1 amplifier gain (0xE0)
    SetVoltDivCh1,
    /// CH2 amplifier gain (0xE1)
    SetVoltDivCh2,
    /// Raw sample rate (0xE2)
    SetTimeDiv,
    /// Start acquisition (0xE3)
    AcquireHardData,
    /// Active channel count (0xE4)
    SetNumChannels,
    /// AC/DC coupling (0xE5)
    SetCoupling,
    /// Calibration output frequency (0xE6)
    SetCalFreq,
}

impl CommandKind {
    /// Vendor control request code (bRequest)
    pub fn opcode(self) -> u8 {
        match self {
            Self::SetVoltDivCh1 => REQ_SET_VOLTDIV_CH1,
            Self::SetVoltDivCh2 => REQ_SET_VOLTDIV_CH2,
            Self::SetTimeDiv => REQ_SET_TIMEDIV,
            Self::AcquireHardData => REQ_ACQUIRE_HARD_DATA,
            Self::SetNumChannels => REQ_SET_NUM_CHANNELS,
            Self::SetCoupling => REQ_SET_COUPLING,
            Self::SetCalFreq => REQ_SET_CAL_FREQ,
        }
    }

    /// Payload length in bytes; every 6022 command carries one byte.
    pub fn payload_len(self) -> usize {
        1
    }
}

/// One command bound to a model: opcode plus payload contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CommandDescriptor {
    /// Command
    pub kind: CommandKind,
    /// Vendor request code
    pub opcode: u8,
    /// Payload length in bytes
    pub payload_len: usize,
}

impl From<CommandKind> for CommandDescriptor {
    fn from(kind: CommandKind) -> Self {
        Self {
            kind,
            opcode: kind.opcode(),
            payload_len: kind.payload_len(),
        }
    }
}

/// Ordered list of commands issued during device setup. Registration
/// order is kept as-is; nothing is reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CommandSet {
    commands: Vec<CommandDescriptor>,
}

impl CommandSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `kind`; returns `self` for chaining
    pub fn add(&mut self, kind: CommandKind) -> &mut Self {
        self.commands.push(kind.into());
        self
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, CommandDescriptor> {
        self.commands.iter()
    }

    /// Request codes in registration order
    pub fn opcodes(&self) -> Vec<u8> {
        self.commands.iter().map(|c| c.opcode).collect()
    }

    /// First descriptor of `kind`
    pub fn get(&self, kind: CommandKind) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.kind == kind)
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true` when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a CommandSet {
    type Item = &'a CommandDescriptor;
    type IntoIter = std::slice::Iter<'a, CommandDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
