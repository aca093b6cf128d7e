#[path = "../common/mod.rs"]
mod common;

use dso6022::transport::{MockTransport, Transport};
use dso6022::{Error, Result};

#[test]
fn boxed_transport_records_writes() -> Result<()> {
    let mut boxed: Box<dyn Transport> = Box::new(MockTransport::new(common::fixtures::BL_ACTIVE));
    boxed.vendor_control_write(0xE4, 0, 0, &[1])?;
    boxed.reset()?;
    assert_eq!(boxed.usb_id()?, common::fixtures::BL_ACTIVE);
    Ok(())
}

#[test]
fn reset_keeps_call_log() {
    let mut m = MockTransport::new(common::fixtures::BE_ACTIVE);
    m.vendor_control_write(0xE3, 0, 0, &[1]).unwrap();
    m.reset().unwrap();
    m.vendor_control_write(0xE3, 0, 0, &[1]).unwrap();
    assert_eq!(m.resets, 1);
    assert_eq!(m.requests(), vec![0xE3, 0xE3]);
}

#[test]
fn fail_after_zero_rejects_first_write() {
    let mut m = MockTransport::new(common::fixtures::BE_ACTIVE);
    m.set_fail_after(0);
    assert!(matches!(
        m.vendor_control_write(0xE0, 0, 0, &[10]),
        Err(Error::Timeout)
    ));
    assert!(m.vendor_calls.is_empty());
}
