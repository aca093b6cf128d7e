#![cfg(feature = "usb")]

//! Helpers for tests against a connected scope. Without a device (CI)
//! they return `Ok(None)`.

use dso6022::device::Registry;
use dso6022::transport::usb::UsbTransport;
use dso6022::{Error, Result};

/// Open the first connected scope that already runs its firmware.
pub fn open_device(registry: &Registry) -> Result<Option<UsbTransport>> {
    match UsbTransport::open(registry) {
        Ok(transport) => Ok(Some(transport)),
        Err(Error::DeviceNotFound) => Ok(None),
        Err(Error::FirmwareNotLoaded { model, usb_id }) => {
            eprintln!("{} at {} has no firmware, skipping", model, usb_id);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
