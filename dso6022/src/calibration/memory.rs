// dso6022-rs/dso6022/src/calibration/memory.rs

use std::collections::HashMap;

use super::{CalibrationStore, Group};

/// In-memory calibration store.
///
/// Used by tests, and by callers that read correction values from the
/// device EEPROM instead of a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: HashMap<(Group, String, String), String>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `(group, channel, range)`, replacing any previous one.
    pub fn insert(
        &mut self,
        group: Group,
        channel: impl Into<String>,
        range: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.values
            .insert((group, channel.into(), range.into()), value.into());
    }

    /// Builder form of [`insert`](Self::insert) for the gain group
    pub fn with_gain(mut self, channel: &str, range: &str, value: &str) -> Self {
        self.insert(Group::Gain, channel, range, value);
        self
    }

    /// Builder form of [`insert`](Self::insert) for the offset group
    pub fn with_offset(mut self, channel: &str, range: &str, value: &str) -> Self {
        self.insert(Group::Offset, channel, range, value);
        self
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CalibrationStore for MemoryStore {
    fn value(&self, group: Group, channel: &str, range: &str) -> Option<String> {
        self.values
            .get(&(group, channel.to_string(), range.to_string()))
            .cloned()
    }
}
