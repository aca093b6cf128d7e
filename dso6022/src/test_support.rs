// dso6022-rs/dso6022/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common calibration-store and registry setup
//! so tests across the crate and tests/ directory can reuse the same
//! logic.
#![allow(dead_code)]

use crate::calibration::{Group, MemoryStore};
use crate::constants::CHANNEL_NAMES;
use crate::control::Capabilities;
use crate::device::{Registry, RegistryBuilder};
use crate::types::VoltageRange;

/// Registry with every variant, default capabilities and no calibration
#[doc(hidden)]
pub fn uncalibrated_registry() -> Registry {
    RegistryBuilder::new()
        .capabilities(Capabilities::default())
        .test_boards(true)
        .build()
}

/// Registry with every variant calibrated from `store`
#[doc(hidden)]
pub fn calibrated_registry(store: MemoryStore) -> Registry {
    RegistryBuilder::new()
        .capabilities(Capabilities::default())
        .test_boards(true)
        .calibration(store)
        .build()
}

/// Store with the same gain and offset for every channel and range.
#[doc(hidden)]
pub fn uniform_store(gain: &str, offset: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    for ch in CHANNEL_NAMES {
        for range in VoltageRange::ALL {
            store.insert(Group::Gain, ch, range.name(), gain);
            store.insert(Group::Offset, ch, range.name(), offset);
        }
    }
    store
}

/// Render `(group, channel, range, value)` entries the way the
/// calibration tool writes its INI file.
#[doc(hidden)]
pub fn to_ini(entries: &[(Group, &str, &str, &str)]) -> String {
    let mut out = String::new();
    for group in [Group::Gain, Group::Offset] {
        out.push_str(&format!("[{}]\n", group.name()));
        for (g, ch, range, value) in entries {
            if *g == group {
                out.push_str(&format!("{}\\{}={}\n", ch, range, value));
            }
        }
        out.push('\n');
    }
    out
}
