// dso6022-rs/dso6022/src/device/models/mod.rs

use crate::calibration::{self, CalibrationStore};
use crate::control::{Capabilities, ControlSpecification};
use crate::protocol::CommandSet;
use crate::types::{FirmwareState, FirmwareVersion, UsbId};

/// DSO-6022 family
pub mod dso6022;

/// Supported hardware/firmware variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Hantek DSO-6022BE
    Dso6022Be,
    /// Hantek DSO-6022BL
    Dso6022Bl,
    /// Hantek DSO-2020 (6022BE firmware)
    Dso2020,
    /// LCsoft board with a blank EEPROM
    LcsoftEzUsb,
    /// LCsoft board shipped with a Saleae EEPROM
    LcsoftSaleae,
}

impl ModelKind {
    /// Every variant, base model first
    pub const ALL: [ModelKind; 5] = [
        Self::Dso6022Be,
        Self::Dso6022Bl,
        Self::Dso2020,
        Self::LcsoftEzUsb,
        Self::LcsoftSaleae,
    ];

    /// Static identity of the variant
    pub fn identity(self) -> &'static ModelIdentity {
        match self {
            Self::Dso6022Be => &dso6022::config::DSO6022BE,
            Self::Dso6022Bl => &dso6022::config::DSO6022BL,
            Self::Dso2020 => &dso6022::config::DSO2020,
            Self::LcsoftEzUsb => &dso6022::config::LCSOFT_EZUSB,
            Self::LcsoftSaleae => &dso6022::config::LCSOFT_SALEAE,
        }
    }

    /// Bare EZ-USB boards used for firmware testing only
    pub fn is_test_board(self) -> bool {
        matches!(self, Self::LcsoftEzUsb | Self::LcsoftSaleae)
    }
}

/// USB identity and naming of one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelIdentity {
    /// Variant
    pub kind: ModelKind,
    /// Identity after the firmware has been loaded
    pub active: UsbId,
    /// Identity of the bare EZ-USB loader, before firmware upload
    pub loader: UsbId,
    /// Firmware revision loaded by the host
    pub firmware_version: FirmwareVersion,
    /// Firmware image name; variants sharing it accept the same image
    pub config_name: &'static str,
    /// Name shown to users
    pub display_name: &'static str,
}

impl ModelIdentity {
    /// Firmware state implied by `usb_id`, `None` if it is not this variant
    pub fn state_of(&self, usb_id: UsbId) -> Option<FirmwareState> {
        if usb_id == self.active {
            Some(FirmwareState::Active)
        } else if usb_id == self.loader {
            Some(FirmwareState::AwaitingFirmware)
        } else {
            None
        }
    }
}

/// One supported variant: identity, calibrated specification and the
/// commands used to program it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceModel {
    /// USB identity and names
    pub identity: ModelIdentity,
    /// Calibrated capabilities and tables
    pub specification: ControlSpecification,
    /// Commands issued during setup, in order
    pub commands: CommandSet,
}

impl DeviceModel {
    /// Variant
    pub fn kind(&self) -> ModelKind {
        self.identity.kind
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        self.identity.display_name
    }
}

/// Factory to create a model for a variant: build the theoretical
/// specification, overlay `store`, bind the command set.
pub fn create_model_for<S>(kind: ModelKind, capabilities: Capabilities, store: &S) -> DeviceModel
where
    S: CalibrationStore + ?Sized,
{
    let identity = *kind.identity();

    let mut specification = dso6022::init_specification(capabilities);
    let summary = calibration::overlay(&mut specification, store);
    if !summary.is_empty() {
        log::debug!(
            "{}: {} gain and {} offset corrections applied",
            identity.display_name,
            summary.gains,
            summary.offsets
        );
    }

    let mut commands = CommandSet::new();
    dso6022::apply_requirements(&mut commands);

    DeviceModel {
        identity,
        specification,
        commands,
    }
}
