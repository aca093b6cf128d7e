// dso6022-rs/dso6022/src/prelude.rs

pub use crate::calibration::{CalibrationStore, IniStore, MemoryStore};
pub use crate::control::{Capabilities, ControlSpecification};
pub use crate::device::{DeviceModel, ModelKind, Registry, RegistryBuilder, ScopeSettings};
pub use crate::protocol::{Command, CommandKind, CommandSet};
pub use crate::transport::Transport;
pub use crate::{
    Coupling, Error, FirmwareState, FirmwareVersion, FixedSampleRate, GainStep, Result,
    TriggerMode, UsbId, VoltageRange,
};
