// dso6022-rs/dso6022/src/protocol/commands/voltdiv.rs

use crate::types::GainStep;

/// Encode SetVoltDiv (0xE0 CH1 / 0xE1 CH2) payload: the amplifier gain of
/// the selected range (1, 2, 5 or 10).
pub fn encode_volt_div(step: GainStep) -> Vec<u8> {
    vec![step.hardware_gain]
}
