// dso6022-rs/dso6022/src/lib.rs

//! dso6022
//!
//! Hardware control tables for the Hantek DSO-6022 family of USB
//! oscilloscopes: per-model USB identities, the voltage-scale and
//! sample-rate tables of the shared acquisition front end, and the
//! calibration overlay that replaces theoretical gain/offset values with
//! measured corrections.
#![warn(missing_docs)]

/// Calibration stores and overlay
pub mod calibration;
/// Hardware constants
pub mod constants;
/// Control specification tables
pub mod control;
/// Variants, registry and setup
pub mod device;
/// Error type
pub mod error;
/// Common imports
pub mod prelude;
/// Vendor commands
pub mod protocol;
/// Helpers shared by tests and benches
pub mod test_support;
/// USB I/O
pub mod transport;
/// Domain types
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
