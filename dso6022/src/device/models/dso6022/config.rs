// dso6022-rs/dso6022/src/device/models/dso6022/config.rs

//! DSO-6022 family identities
//!
//! ```text
//!                 active      no firmware   fw      config      display
//! DSO-6022BE      04b5:6022   04b4:6022     0206    dso6022be   DSO-6022BE
//! DSO-6022BL      04b5:602a   04b4:602a     0206    dso6022bl   DSO-6022BL
//! DSO-2020        04b5:6022   04b4:2020     0206    dso6022be   DSO-2020
//! LCsoft EzUSB    04b5:6022   04b4:8613     0206    dso6022be   LCsoft-EzUSB
//! LCsoft Saleae   04b5:6022   0925:3881     0206    dso6022be   LCsoft-Saleae
//! ```
//!
//! The DSO-2020 and the LCsoft boards load the 6022BE firmware image and
//! re-enumerate as a 6022BE.

use crate::constants::{FIRMWARE_VERSION, VID_ACTIVE, VID_CYPRESS, VID_SALEAE};
use crate::device::models::{ModelIdentity, ModelKind};
use crate::types::{FirmwareVersion, UsbId};

/// Config name of the base firmware image
pub const CONFIG_6022BE: &str = "dso6022be";
/// Config name of the 6022BL firmware image
pub const CONFIG_6022BL: &str = "dso6022bl";

/// Number of analog channels
pub const CHANNELS: usize = 2;

/// Selectable calibration output frequencies in Hz
pub const CALIBRATION_FREQUENCIES: [f64; 12] = [
    50.0, 60.0, 100.0, 200.0, 500.0, 1e3, 2e3, 5e3, 10e3, 20e3, 50e3, 100e3,
];

/// Base model
pub const DSO6022BE: ModelIdentity = ModelIdentity {
    kind: ModelKind::Dso6022Be,
    active: UsbId::new(VID_ACTIVE, 0x6022),
    loader: UsbId::new(VID_CYPRESS, 0x6022),
    firmware_version: FirmwareVersion::new(FIRMWARE_VERSION),
    config_name: CONFIG_6022BE,
    display_name: "DSO-6022BE",
};

/// Scope or logic analyzer
pub const DSO6022BL: ModelIdentity = ModelIdentity {
    kind: ModelKind::Dso6022Bl,
    active: UsbId::new(VID_ACTIVE, 0x602a),
    loader: UsbId::new(VID_CYPRESS, 0x602a),
    firmware_version: FirmwareVersion::new(FIRMWARE_VERSION),
    config_name: CONFIG_6022BL,
    display_name: "DSO-6022BL",
};

/// Voltcraft DSO-2020, hardware identical to the 6022BE
pub const DSO2020: ModelIdentity = ModelIdentity {
    kind: ModelKind::Dso2020,
    active: UsbId::new(VID_ACTIVE, 0x6022),
    loader: UsbId::new(VID_CYPRESS, 0x2020),
    firmware_version: FirmwareVersion::new(FIRMWARE_VERSION),
    config_name: CONFIG_6022BE,
    display_name: "DSO-2020",
};

/// LCsoft EZ-USB board without EEPROM. Ports B and D are open, so the
/// samples are meaningless.
pub const LCSOFT_EZUSB: ModelIdentity = ModelIdentity {
    kind: ModelKind::LcsoftEzUsb,
    active: UsbId::new(VID_ACTIVE, 0x6022),
    loader: UsbId::new(VID_CYPRESS, 0x8613),
    firmware_version: FirmwareVersion::new(FIRMWARE_VERSION),
    config_name: CONFIG_6022BE,
    display_name: "LCsoft-EzUSB",
};

/// LCsoft board with the Saleae VID/PID in its EEPROM
pub const LCSOFT_SALEAE: ModelIdentity = ModelIdentity {
    kind: ModelKind::LcsoftSaleae,
    active: UsbId::new(VID_ACTIVE, 0x6022),
    loader: UsbId::new(VID_SALEAE, 0x3881),
    firmware_version: FirmwareVersion::new(FIRMWARE_VERSION),
    config_name: CONFIG_6022BE,
    display_name: "LCsoft-Saleae",
};
