// dso6022-rs/dso6022/src/device/mod.rs

/// Registry construction
pub mod builder;
/// Supported variants
pub mod models;
/// Immutable variant registry
pub mod registry;
/// Device programming
pub mod setup;

pub use builder::RegistryBuilder;
pub use models::{DeviceModel, ModelIdentity, ModelKind, create_model_for};
pub use registry::Registry;
pub use setup::{ScopeSettings, plan, program};
