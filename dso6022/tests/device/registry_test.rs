#[path = "../common/mod.rs"]
mod common;

use dso6022::control::Capabilities;
use dso6022::device::{ModelKind, Registry};
use dso6022::test_support::uncalibrated_registry;
use dso6022::types::{FirmwareState, UsbId};

#[test]
fn full_registry_lists_every_variant_in_order() {
    let reg = uncalibrated_registry();
    let kinds: Vec<_> = reg.iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, ModelKind::ALL.to_vec());
    reg.validate().unwrap();
}

#[test]
fn test_boards_are_opt_in() {
    let reg = Registry::builder()
        .capabilities(Capabilities::default())
        .test_boards(false)
        .build();
    assert_eq!(reg.len(), 3);
    assert!(reg.iter().all(|m| !m.kind().is_test_board()));
    assert!(reg.get(ModelKind::LcsoftSaleae).is_none());
}

#[test]
fn identify_active_and_loader() {
    let reg = uncalibrated_registry();

    let (m, state) = reg.identify(common::fixtures::BL_ACTIVE).unwrap();
    assert_eq!(m.kind(), ModelKind::Dso6022Bl);
    assert_eq!(state, FirmwareState::Active);

    // shared active identity resolves to the first registered variant
    let (m, state) = reg.identify(common::fixtures::BE_ACTIVE).unwrap();
    assert_eq!(m.kind(), ModelKind::Dso6022Be);
    assert_eq!(state, FirmwareState::Active);

    let (m, state) = reg.identify(UsbId::new(0x04b4, 0x2020)).unwrap();
    assert_eq!(m.kind(), ModelKind::Dso2020);
    assert_eq!(state, FirmwareState::AwaitingFirmware);

    let (m, _) = reg.identify(UsbId::new(0x0925, 0x3881)).unwrap();
    assert_eq!(m.name(), m.identity.display_name);
    assert_eq!(m.kind(), ModelKind::LcsoftSaleae);

    assert!(reg.identify(UsbId::new(0x1234, 0x5678)).is_none());
}

#[test]
fn config_name_groups_firmware_images() {
    let reg = uncalibrated_registry();
    let be: Vec<_> = reg.by_config_name("dso6022be").map(|m| m.kind()).collect();
    assert_eq!(
        be,
        vec![
            ModelKind::Dso6022Be,
            ModelKind::Dso2020,
            ModelKind::LcsoftEzUsb,
            ModelKind::LcsoftSaleae
        ]
    );
    assert_eq!(reg.by_config_name("dso6022bl").count(), 1);
    assert_eq!(reg.by_config_name("dso6021").count(), 0);
}

#[test]
fn every_model_shares_the_family_tables() {
    let reg = uncalibrated_registry();
    let first = &reg.iter().next().unwrap().specification;
    for model in &reg {
        assert_eq!(&model.specification, first, "{}", model.name());
        assert_eq!(model.commands.len(), 7);
        assert_eq!(model.identity.firmware_version.as_u16(), 0x0206);
    }
}
