// dso6022-rs/dso6022/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::time::Duration;

use crate::device::Registry;
use crate::transport::traits::Transport;
use crate::types::{FirmwareState, UsbId};
use crate::{Error, Result};

use rusb::{Context, DeviceHandle, UsbContext};

/// Interface used for vendor requests and the bulk sample endpoint
const INTERFACE: u8 = 0;

/// A 6022-family device found on the bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerated {
    /// Identity on the bus
    pub usb_id: UsbId,
    /// Display name of the matched variant
    pub model: &'static str,
    /// Firmware state implied by the identity
    pub state: FirmwareState,
    /// Bus number
    pub bus: u8,
    /// Device address
    pub address: u8,
}

/// List every device on the bus that matches a registry entry, either
/// with its loaded-firmware identity or its pre-firmware identity.
pub fn enumerate(registry: &Registry) -> Result<Vec<Enumerated>> {
    let ctx = Context::new()?;
    let mut found = Vec::new();
    for device in ctx.devices()?.iter() {
        let dd = device.device_descriptor()?;
        let usb_id = UsbId::new(dd.vendor_id(), dd.product_id());
        if let Some((model, state)) = registry.identify(usb_id) {
            found.push(Enumerated {
                usb_id,
                model: model.identity.display_name,
                state,
                bus: device.bus_number(),
                address: device.address(),
            });
        }
    }
    log::debug!("enumerated {} matching device(s)", found.len());
    Ok(found)
}

/// Minimal rusb-backed transport: vendor control writes to the first
/// device running the 6022 firmware.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    usb_id: UsbId,
    timeout_ms: u64,
}

impl UsbTransport {
    /// Open the first device whose active identity is in `registry`.
    ///
    /// A matching device that still reports its pre-firmware identity is
    /// reported as `FirmwareNotLoaded`; nothing matching at all is
    /// `DeviceNotFound`.
    pub fn open(registry: &Registry) -> Result<Self> {
        let ctx = Context::new()?;
        let mut waiting: Option<(&'static str, UsbId)> = None;

        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            let usb_id = UsbId::new(dd.vendor_id(), dd.product_id());
            match registry.identify(usb_id) {
                Some((_, FirmwareState::Active)) => {
                    let handle = device.open()?;

                    // Best-effort detach; claim_interface reports a hard
                    // failure if the kernel driver is still bound.
                    if let Ok(true) = handle.kernel_driver_active(INTERFACE) {
                        let _ = handle.detach_kernel_driver(INTERFACE);
                    }
                    handle.claim_interface(INTERFACE)?;

                    log::info!("opened {} on bus {}", usb_id, device.bus_number());
                    return Ok(UsbTransport {
                        handle,
                        usb_id,
                        timeout_ms: 1000,
                    });
                }
                Some((model, FirmwareState::AwaitingFirmware)) => {
                    waiting.get_or_insert((model.identity.display_name, usb_id));
                }
                None => {}
            }
        }

        match waiting {
            Some((model, usb_id)) => Err(Error::FirmwareNotLoaded { model, usb_id }),
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Timeout of every control transfer
    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }
}

/// A control write that moved fewer bytes than the payload is an error.
fn check_written(request: u8, written: usize, expected: usize) -> Result<()> {
    if written != expected {
        return Err(Error::ShortWrite {
            request,
            written,
            expected,
        });
    }
    Ok(())
}

impl Transport for UsbTransport {
    fn vendor_control_write(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<()> {
        let timeout = Duration::from_millis(self.timeout_ms);
        let req_type = rusb::request_type(
            rusb::Direction::Out,
            rusb::RequestType::Vendor,
            rusb::Recipient::Device,
        );
        let written = self
            .handle
            .write_control(req_type, request, value, index, data, timeout)?;
        check_written(request, written, data.len())
    }

    fn usb_id(&self) -> Result<UsbId> {
        Ok(self.usb_id)
    }

    fn reset(&mut self) -> Result<()> {
        self.handle.reset()?;
        Ok(())
    }
}
