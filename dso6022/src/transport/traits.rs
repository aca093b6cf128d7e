// dso6022-rs/dso6022/src/transport/traits.rs

use crate::Result;
use crate::types::UsbId;

/// Transport trait abstracts USB I/O away from the command logic.
pub trait Transport {
    /// Perform a vendor-specific control write with explicit USB
    /// `request`/`value`/`index` fields.
    fn vendor_control_write(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<()>;

    /// USB identity of the opened device
    fn usb_id(&self) -> Result<UsbId>;

    /// Perform a transport-level reset. Default is a no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}
