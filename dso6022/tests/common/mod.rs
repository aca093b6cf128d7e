// Shared helpers for integration tests. Included from each test file via
// `#[path = "../common/mod.rs"]`.
#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

/// Initialise logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh, empty scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dso6022-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
