#[path = "../common/mod.rs"]
mod common;

use dso6022::control::voltage::GAIN_STEPS;
use dso6022::protocol::{Command, calfreq_code};
use dso6022::types::{Coupling, FixedSampleRate, VoltageRange};

#[test]
fn volt_div_sends_hardware_gain_per_range() {
    let expected = [10u8, 10, 10, 5, 2, 1, 1, 1];
    for range in VoltageRange::ALL {
        let cmd = Command::SetVoltDiv {
            channel: 1,
            step: GAIN_STEPS[range.index()],
        };
        assert_eq!(cmd.request(), 0xE1);
        assert_eq!(cmd.encode(), vec![expected[range.index()]], "{}", range.name());
    }
}

#[test]
fn time_div_sends_sample_id() {
    let cases = [
        (FixedSampleRate::new(2e3, 120, 100), 120u8),
        (FixedSampleRate::new(500e3, 10, 20), 10),
        (FixedSampleRate::new(48e6, 48, 1), 48),
    ];
    for (rate, id) in cases {
        let cmd = Command::SetTimeDiv { rate };
        assert_eq!(cmd.request(), 0xE2);
        assert_eq!(cmd.encode(), vec![id]);
    }
}

#[test]
fn coupling_payload_bits() {
    let cmd = Command::SetCoupling {
        ch1: Coupling::DC,
        ch2: Coupling::AC,
    };
    assert_eq!(cmd.request(), 0xE5);
    assert_eq!(cmd.encode(), vec![0x01]);
}

#[test]
fn calibration_frequencies_have_codes() {
    for (hz, code) in [(50.0, 105u8), (100.0, 0), (500.0, 150), (1e3, 1), (100e3, 100)] {
        assert_eq!(calfreq_code(hz), Some(code), "{} Hz", hz);
    }
    assert_eq!(calfreq_code(0.0), None);
    assert_eq!(calfreq_code(150e3), None);
    assert_eq!(calfreq_code(f64::NAN), None);
    assert_eq!(Command::SetCalFreq { code: 105 }.encode(), vec![105]);
}
