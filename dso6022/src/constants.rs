// dso6022-rs/dso6022/src/constants.rs
//! Hardware constants shared by every DSO-6022 family variant

/// Number of analog input channels on every current variant
pub const CHANNEL_COUNT: usize = 2;

/// Number of selectable voltage ranges (20 mV/div .. 5 V/div)
pub const RANGE_COUNT: usize = 8;

/// Calibration store channel names, index-aligned with channel numbers
pub const CHANNEL_NAMES: [&str; CHANNEL_COUNT] = ["ch0", "ch1"];

/// ADC code of a 0 V input on an uncalibrated front end
pub const ADC_MIDPOINT: i32 = 0x80;

/// Stored offset value meaning "no calibration entry"
pub const OFFSET_ABSENT: i32 = 255;

/// Gain read for a missing or unparsable entry; collapses to "absent"
pub const GAIN_DEFAULT: &str = "0.0";
/// Offset read for a missing or unparsable entry; the absent sentinel
pub const OFFSET_DEFAULT: &str = "255";

/// Firmware revision loaded into every variant
pub const FIRMWARE_VERSION: u16 = 0x0206;

/// Vendor id after the firmware has been loaded
pub const VID_ACTIVE: u16 = 0x04b5;

/// Cypress EZ-USB vendor id reported before the firmware is loaded
pub const VID_CYPRESS: u16 = 0x04b4;

/// Saleae vendor id found in the EEPROM of some LCsoft boards
pub const VID_SALEAE: u16 = 0x0925;

/// Select the CH1 amplifier gain; requests 0xE0..0xE6 are vendor control writes
pub const REQ_SET_VOLTDIV_CH1: u8 = 0xE0;
/// Select the CH2 amplifier gain
pub const REQ_SET_VOLTDIV_CH2: u8 = 0xE1;
/// Select the raw sample rate
pub const REQ_SET_TIMEDIV: u8 = 0xE2;
/// Start an acquisition
pub const REQ_ACQUIRE_HARD_DATA: u8 = 0xE3;
/// Select one or two active channels
pub const REQ_SET_NUM_CHANNELS: u8 = 0xE4;
/// Select AC/DC coupling (hardware mod only)
pub const REQ_SET_COUPLING: u8 = 0xE5;
/// Select the calibration output frequency
pub const REQ_SET_CAL_FREQ: u8 = 0xE6;

/// Divider table applied to the start of the sample stream. The first
/// 2K + 480 samples after a trigger are unreliable and are dropped.
pub const BUFFER_DIVIDERS: [u32; 3] = [1000, 1, 1];

/// Record length meaning "unbounded / streaming"
pub const UNLIMITED_RECORD_LENGTH: u32 = u32::MAX;

/// Calibration file, relative to the user configuration directory
pub const CALIBRATION_DIR: &str = "OpenHantek";
/// Calibration file name
pub const CALIBRATION_FILE: &str = "modelDSO6022.conf";
