// dso6022-rs/dso6022/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::types::UsbId;
use crate::{Error, Result};

/// Mock transport for unit tests. It records vendor control writes.
#[derive(Debug)]
pub struct MockTransport {
    /// Identity reported by [`Transport::usb_id`]
    pub usb_id: UsbId,
    /// Record vendor control write calls: (request, value, index, data)
    pub vendor_calls: Vec<(u8, u16, u16, Vec<u8>)>,
    /// Testing hook: writes after this many successful ones fail with Timeout
    pub fail_after: Option<usize>,
    /// Number of reset calls
    pub resets: usize,
}

impl MockTransport {
    /// Mock reporting `usb_id`
    pub fn new(usb_id: UsbId) -> Self {
        Self {
            usb_id,
            vendor_calls: Vec::new(),
            fail_after: None,
            resets: 0,
        }
    }

    /// Let `n` writes succeed, then fail every following write.
    pub fn set_fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    /// Request codes of the recorded writes, in order
    pub fn requests(&self) -> Vec<u8> {
        self.vendor_calls.iter().map(|c| c.0).collect()
    }
}

impl Transport for MockTransport {
    fn vendor_control_write(
        &mut self,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.vendor_calls.len() >= limit {
                return Err(Error::Timeout);
            }
        }
        self.vendor_calls
            .push((request, value, index, data.to_vec()));
        Ok(())
    }

    fn usb_id(&self) -> Result<UsbId> {
        Ok(self.usb_id)
    }

    fn reset(&mut self) -> Result<()> {
        // Keep the call log so tests can inspect everything sent before
        // and after a reset.
        self.resets += 1;
        Ok(())
    }
}
