// dso6022-rs/dso6022/src/transport/mod.rs

/// Recording transport for tests
pub mod mock;
/// Transport trait
pub mod traits;
/// rusb transport
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::MockTransport;
pub use traits::Transport;
#[cfg(feature = "usb")]
pub use usb::UsbTransport;
