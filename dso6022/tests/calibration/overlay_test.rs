#[path = "../common/mod.rs"]
mod common;

use dso6022::calibration::{MemoryStore, overlay};
use dso6022::device::ModelKind;
use dso6022::test_support::{calibrated_registry, uncalibrated_registry, uniform_store};
use dso6022::types::VoltageRange;

#[test]
fn ch0_20mv_gain_and_offset_end_to_end() {
    common::init_logging();
    let reg = calibrated_registry(common::fixtures::ch0_20mv_store());
    let spec = &reg.get(ModelKind::Dso6022Be).unwrap().specification;

    assert_eq!(spec.voltage_scale(0, VoltageRange::MV20).unwrap(), 40.0);
    // 0x80 - 130
    assert_eq!(spec.voltage_offset(0, VoltageRange::MV20).unwrap(), -2);
    assert_eq!(spec.voltage_offset(1, VoltageRange::MV20).unwrap(), 0);
}

#[test]
fn empty_store_leaves_compiled_defaults() {
    let reg = uncalibrated_registry();
    for model in &reg {
        let spec = &model.specification;
        assert_eq!(spec.voltage_scale, vec![common::fixtures::THEORETICAL; 2]);
        assert_eq!(spec.voltage_offset, vec![[0; 8]; 2]);
    }
}

#[test]
fn gain_divides_theoretical_value() {
    let reg = calibrated_registry(uniform_store("2.0", "255"));
    let spec = &reg.get(ModelKind::Dso6022Bl).unwrap().specification;
    for ch in 0..2 {
        for r in VoltageRange::ALL {
            assert_eq!(
                spec.voltage_scale(ch, r).unwrap(),
                common::fixtures::THEORETICAL[r.index()] / 2.0
            );
            assert_eq!(spec.voltage_offset(ch, r).unwrap(), 0);
        }
    }
}

#[test]
fn zero_gain_equals_absence() {
    assert_eq!(
        calibrated_registry(uniform_store("0.0", "255")),
        uncalibrated_registry()
    );
}

#[test]
fn malformed_values_equal_absence() {
    assert_eq!(
        calibrated_registry(uniform_store("one point two", "0x7f")),
        uncalibrated_registry()
    );
}

#[test]
fn offset_extremes() {
    let store = MemoryStore::new()
        .with_offset("ch0", "50mV", "0")
        .with_offset("ch1", "50mV", "254");
    let reg = calibrated_registry(store);
    let spec = &reg.get(ModelKind::Dso2020).unwrap().specification;
    assert_eq!(spec.voltage_offset(0, VoltageRange::MV50).unwrap(), 0x80);
    assert_eq!(spec.voltage_offset(1, VoltageRange::MV50).unwrap(), -126);
}

#[test]
fn reapplying_store_is_idempotent() {
    let store = uniform_store("1.05", "131");
    let reg = calibrated_registry(store.clone());
    let mut spec = reg.get(ModelKind::Dso6022Be).unwrap().specification.clone();
    let before = spec.clone();
    overlay(&mut spec, &store);
    assert_eq!(spec, before);
}

#[test]
fn calibrated_conversion_reads_zero_at_stored_offset() -> anyhow::Result<()> {
    let reg = calibrated_registry(common::fixtures::ch0_20mv_store());
    let spec = &reg.get(ModelKind::Dso6022Be).unwrap().specification;
    // the stored offset is the raw code of a 0 V input
    assert_eq!(spec.raw_to_volts(0, VoltageRange::MV20, 130)?, 0.0);
    Ok(())
}
