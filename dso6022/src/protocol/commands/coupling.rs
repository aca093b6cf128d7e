// dso6022-rs/dso6022/src/protocol/commands/coupling.rs

use crate::types::Coupling;

const CH1_DC: u8 = 0x01;
const CH2_DC: u8 = 0x10;

/// Encode SetCoupling (0xE5) payload: bit 0 set for CH1 DC, bit 4 set
/// for CH2 DC. Without the AC/DC relay mod the firmware ignores it.
pub fn encode_coupling(ch1: Coupling, ch2: Coupling) -> Vec<u8> {
    let mut value = 0u8;
    if ch1 == Coupling::DC {
        value |= CH1_DC;
    }
    if ch2 == Coupling::DC {
        value |= CH2_DC;
    }
    vec![value]
}
