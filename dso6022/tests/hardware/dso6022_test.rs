#![cfg(feature = "usb")]

#[path = "common.rs"]
mod common;

use dso6022::device::{RegistryBuilder, ScopeSettings, program};
use dso6022::transport::Transport;
use dso6022::transport::usb::enumerate;
use dso6022::Result;

// These tests need a DSO-6022 (or compatible) plugged in. They are marked
// `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p dso6022 --test hardware --features usb -- --ignored

#[test]
#[ignore]
fn enumerate_connected_scopes() -> Result<()> {
    let registry = RegistryBuilder::new().test_boards(true).build();
    for found in enumerate(&registry)? {
        eprintln!("{:?}", found);
    }
    Ok(())
}

#[test]
#[ignore]
fn program_default_settings() -> Result<()> {
    let registry = RegistryBuilder::new().default_calibration().build();
    let Some(mut transport) = common::open_device(&registry)? else {
        return Ok(());
    };
    let usb_id = transport.usb_id()?;
    let Some((model, _)) = registry.identify(usb_id) else {
        return Ok(());
    };
    let sent = program(&mut transport, model, &ScopeSettings::default())?;
    assert_eq!(sent.len(), model.commands.len());
    Ok(())
}
