// dso6022-rs/dso6022/src/protocol/mod.rs

/// Command descriptors bound to a model
pub mod command_set;
/// Command values and payload encoders
pub mod commands;

pub use command_set::{CommandDescriptor, CommandKind, CommandSet};
pub use commands::*;
