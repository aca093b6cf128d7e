// dso6022-rs/dso6022/src/error.rs

use thiserror::Error;

use crate::types::{Coupling, UsbId};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No supported device on the bus
    #[error("device not found")]
    DeviceNotFound,

    /// A supported device still runs the bare loader
    #[error("{model} is waiting for firmware (pre-firmware identity {usb_id})")]
    FirmwareNotLoaded {
        /// Display name of the matched variant
        model: &'static str,
        /// Pre-firmware identity seen on the bus
        usb_id: UsbId,
    },

    // USB 実装を後から有効化できるように optional dependency にしている
    /// libusb failure
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// Calibration file could not be read
    #[error("calibration file error: {0}")]
    Io(#[from] std::io::Error),

    /// Transfer timed out
    #[error("operation timed out")]
    Timeout,

    /// Control write moved fewer bytes than requested
    #[error("short control write for request {request:#04x}: {written} of {expected} bytes")]
    ShortWrite {
        /// Vendor request code
        request: u8,
        /// Bytes the device accepted
        written: usize,
        /// Payload length
        expected: usize,
    },

    /// Requested rate exceeds the acquisition mode maximum
    #[error("unsupported sample rate: requested {requested} S/s, mode maximum is {max} S/s")]
    UnsupportedSampleRate {
        /// Requested rate in S/s
        requested: f64,
        /// Mode maximum in S/s
        max: f64,
    },

    /// Coupling not available on this build
    #[error("unsupported coupling: {0:?}")]
    UnsupportedCoupling(Coupling),

    /// No calibration output step for this frequency
    #[error("unsupported calibration frequency: {0} Hz")]
    UnsupportedCalibrationFrequency(f64),

    /// Channel index out of range
    #[error("invalid channel index {0}")]
    InvalidChannel(usize),

    /// Active channel count is not 1 or 2
    #[error("invalid active channel count {0}")]
    InvalidChannelCount(u8),

    /// Two variants claim the same usb identity
    #[error("usb identity {usb_id} is claimed by both {first} and {second}")]
    DuplicateIdentity {
        /// Clashing identity
        usb_id: UsbId,
        /// Variant registered first
        first: &'static str,
        /// Variant registered later
        second: &'static str,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
