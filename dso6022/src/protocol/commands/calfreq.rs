// dso6022-rs/dso6022/src/protocol/commands/calfreq.rs

//! Calibration output frequency (requires firmware > 0x0206).
//!
//! Code mapping: 1..=100 select 1..100 kHz, 101..=200 select
//! (code - 100) * 10 Hz, 0 selects 100 Hz.

/// Map a frequency in Hz to the firmware code, `None` if the frequency
/// has no representation.
pub fn calfreq_code(hz: f64) -> Option<u8> {
    if !hz.is_finite() || hz <= 0.0 || hz.fract() != 0.0 {
        return None;
    }
    let hz = hz as u32;
    if hz == 100 {
        Some(0)
    } else if hz >= 1000 && hz % 1000 == 0 && hz <= 100_000 {
        Some((hz / 1000) as u8)
    } else if hz >= 10 && hz % 10 == 0 && hz <= 1000 {
        Some((100 + hz / 10) as u8)
    } else {
        None
    }
}

/// Encode SetCalFreq (0xE6) payload
pub fn encode_cal_freq(code: u8) -> Vec<u8> {
    vec![code]
}
