// fixtures.rs: commonly used calibration data, settings and models
#![allow(dead_code)]

use dso6022::calibration::{Group, MemoryStore};
use dso6022::control::Capabilities;
use dso6022::device::{DeviceModel, ModelKind, ScopeSettings, create_model_for};
use dso6022::types::{Coupling, UsbId, VoltageRange};

/// Theoretical full-screen ADC codes, 20 mV .. 5 V
pub const THEORETICAL: [f64; 8] = [40.0, 100.0, 200.0, 202.0, 198.0, 198.0, 396.0, 990.0];

pub const BE_ACTIVE: UsbId = UsbId::new(0x04b5, 0x6022);
pub const BL_ACTIVE: UsbId = UsbId::new(0x04b5, 0x602a);

/// Store with ch0 20 mV gain 1.0 and offset 130
pub fn ch0_20mv_store() -> MemoryStore {
    MemoryStore::new()
        .with_gain("ch0", "20mV", "1.0")
        .with_offset("ch0", "20mV", "130")
}

/// A realistic file from the calibration tool
pub fn calibration_entries() -> Vec<(Group, &'static str, &'static str, &'static str)> {
    vec![
        (Group::Gain, "ch0", "20mV", "1.0"),
        (Group::Gain, "ch0", "200mV", "1.01"),
        (Group::Gain, "ch1", "5000mV", "0.0"),
        (Group::Offset, "ch0", "20mV", "130"),
        (Group::Offset, "ch1", "1000mV", "125"),
        (Group::Offset, "ch1", "2000mV", "255"),
    ]
}

/// Uncalibrated model with the given capabilities
pub fn model(kind: ModelKind, capabilities: Capabilities) -> DeviceModel {
    create_model_for(kind, capabilities, &MemoryStore::new())
}

pub fn single_channel_settings(rate: f64) -> ScopeSettings {
    ScopeSettings {
        ranges: [VoltageRange::MV100, VoltageRange::V5],
        couplings: [Coupling::DC, Coupling::DC],
        sample_rate_hz: rate,
        active_channels: 1,
        calibration_frequency_hz: 100.0,
    }
}
