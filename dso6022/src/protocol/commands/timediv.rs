// dso6022-rs/dso6022/src/protocol/commands/timediv.rs

use crate::types::FixedSampleRate;

/// Encode SetTimeDiv (0xE2) payload: the raw sample id. Downsampling is
/// done on the host and never reaches the device.
pub fn encode_time_div(rate: FixedSampleRate) -> Vec<u8> {
    vec![rate.sample_id]
}
