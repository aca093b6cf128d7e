// dso6022-rs/dso6022/src/device/models/dso6022/mod.rs

//! Shared acquisition-chip setup for every DSO-6022 family variant.

pub mod config;

use crate::control::{Capabilities, ControlSpecification, samplerate, voltage};
use crate::protocol::{CommandKind, CommandSet};
use crate::types::{Coupling, TriggerMode};

/// Build the theoretical (uncalibrated) specification for the family.
pub fn init_specification(capabilities: Capabilities) -> ControlSpecification {
    let mut spec = ControlSpecification::new(config::CHANNELS, capabilities);

    voltage::init(&mut spec);
    samplerate::init(&mut spec);

    spec.couplings = if capabilities.ac_coupling {
        vec![Coupling::DC, Coupling::AC]
    } else {
        vec![Coupling::DC]
    };
    spec.trigger_modes = vec![TriggerMode::Auto, TriggerMode::Normal, TriggerMode::Single];
    spec.fixed_usb_in_length = 0;
    spec.calibration_frequency_steps = config::CALIBRATION_FREQUENCIES.to_vec();
    spec.has_calibration_eeprom = true;
    spec
}

/// Register the commands used to program a 6022-family device, in the
/// order they are issued during setup.
pub fn apply_requirements(commands: &mut CommandSet) {
    commands
        .add(CommandKind::SetVoltDivCh1) // 0xE0
        .add(CommandKind::SetVoltDivCh2) // 0xE1
        .add(CommandKind::SetTimeDiv) // 0xE2
        .add(CommandKind::AcquireHardData) // 0xE3
        .add(CommandKind::SetNumChannels) // 0xE4
        .add(CommandKind::SetCoupling) // 0xE5 (no effect w/o AC/DC HW mod)
        .add(CommandKind::SetCalFreq); // 0xE6
}
