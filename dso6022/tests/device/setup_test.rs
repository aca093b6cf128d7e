#[path = "../common/mod.rs"]
mod common;

use dso6022::control::Capabilities;
use dso6022::device::{ModelKind, ScopeSettings, plan, program};
use dso6022::protocol::Command;
use dso6022::transport::MockTransport;
use dso6022::types::{Coupling, VoltageRange};
use dso6022::Error;

#[test]
fn default_settings_program_every_bound_command() -> anyhow::Result<()> {
    common::init_logging();
    let model = common::fixtures::model(ModelKind::Dso6022Be, Capabilities::default());
    let mut transport = MockTransport::new(common::fixtures::BE_ACTIVE);

    let sent = program(&mut transport, &model, &ScopeSettings::default())?;

    assert_eq!(sent.len(), 7);
    assert_eq!(transport.requests(), model.commands.opcodes());
    let payloads: Vec<_> = transport.vendor_calls.iter().map(|c| c.3.clone()).collect();
    assert_eq!(
        payloads,
        vec![
            vec![1],  // 1 V/div: gain 1
            vec![1],
            vec![10], // 1 MS/s from sample id 10
            vec![0x01],
            vec![2],
            vec![0x11], // both DC
            vec![1],    // 1 kHz
        ]
    );
    assert!(transport.vendor_calls.iter().all(|c| c.1 == 0 && c.2 == 0));
    Ok(())
}

#[test]
fn single_channel_allows_the_fastest_rate() -> anyhow::Result<()> {
    let model = common::fixtures::model(ModelKind::Dso6022Bl, Capabilities::default());
    let cmds = plan(&model, &common::fixtures::single_channel_settings(25e6))?;

    assert!(cmds.contains(&Command::SetNumChannels { count: 1 }));
    let rate = cmds
        .iter()
        .find_map(|c| match c {
            Command::SetTimeDiv { rate } => Some(*rate),
            _ => None,
        })
        .unwrap();
    assert_eq!(rate.rate_hz, 30e6);
    assert_eq!(rate.sample_id, 30);
    // 100 Hz calibration output
    assert!(cmds.contains(&Command::SetCalFreq { code: 0 }));
    Ok(())
}

#[test]
fn two_channels_cap_the_rate() {
    let model = common::fixtures::model(ModelKind::Dso6022Be, Capabilities::default());
    let settings = ScopeSettings {
        sample_rate_hz: 20e6,
        ..ScopeSettings::default()
    };
    assert!(matches!(
        plan(&model, &settings),
        Err(Error::UnsupportedSampleRate { max, .. }) if max == 15e6
    ));
}

#[test]
fn invalid_settings_are_rejected_before_any_write() {
    let model = common::fixtures::model(ModelKind::Dso6022Be, Capabilities::default());
    let mut transport = MockTransport::new(common::fixtures::BE_ACTIVE);

    let no_channels = ScopeSettings {
        active_channels: 0,
        ..ScopeSettings::default()
    };
    assert!(matches!(
        program(&mut transport, &model, &no_channels),
        Err(Error::InvalidChannelCount(0))
    ));

    let ac = ScopeSettings {
        couplings: [Coupling::AC, Coupling::DC],
        ..ScopeSettings::default()
    };
    assert!(matches!(
        program(&mut transport, &model, &ac),
        Err(Error::UnsupportedCoupling(Coupling::AC))
    ));

    let calfreq = ScopeSettings {
        calibration_frequency_hz: 300.0,
        ..ScopeSettings::default()
    };
    assert!(matches!(
        program(&mut transport, &model, &calfreq),
        Err(Error::UnsupportedCalibrationFrequency(_))
    ));

    assert!(transport.vendor_calls.is_empty());
}

#[test]
fn ac_coupling_capability_enables_ac_payload() -> anyhow::Result<()> {
    let caps = Capabilities {
        ac_coupling: true,
        ..Capabilities::default()
    };
    let model = common::fixtures::model(ModelKind::Dso2020, caps);
    let settings = ScopeSettings {
        ranges: [VoltageRange::MV20, VoltageRange::V5],
        couplings: [Coupling::AC, Coupling::DC],
        ..ScopeSettings::default()
    };
    let cmds = plan(&model, &settings)?;
    let coupling = cmds.iter().find(|c| matches!(c, Command::SetCoupling { .. })).unwrap();
    // CH2 DC only
    assert_eq!(coupling.encode(), vec![0x10]);
    assert_eq!(cmds[0].encode(), vec![10]);
    assert_eq!(cmds[1].encode(), vec![1]);
    Ok(())
}

#[test]
fn very_slow_rates_need_the_capability() {
    let slow = ScopeSettings {
        sample_rate_hz: 1e3,
        ..ScopeSettings::default()
    };

    let model = common::fixtures::model(ModelKind::Dso6022Be, Capabilities::default());
    let cmds = plan(&model, &slow).unwrap();
    assert!(cmds.contains(&Command::SetTimeDiv {
        rate: model.specification.fixed_sample_rates[0]
    }));
    assert_eq!(model.specification.fixed_sample_rates[0].rate_hz, 10e3);

    let caps = Capabilities {
        very_slow_samples: true,
        ..Capabilities::default()
    };
    let model = common::fixtures::model(ModelKind::Dso6022Be, caps);
    let cmds = plan(&model, &slow).unwrap();
    // 1 kS/s is 100x downsampled from sample id 110 (100 kS/s)
    assert_eq!(cmds[2].encode(), vec![110]);
}

#[test]
fn transport_failure_stops_programming() {
    let model = common::fixtures::model(ModelKind::Dso6022Be, Capabilities::default());
    let mut transport = MockTransport::new(common::fixtures::BE_ACTIVE);
    transport.set_fail_after(3);

    let res = program(&mut transport, &model, &ScopeSettings::default());
    assert!(matches!(res, Err(Error::Timeout)));
    assert_eq!(transport.requests(), vec![0xE0, 0xE1, 0xE2]);
}
