// dso6022-rs/dso6022/src/calibration/ini.rs

//! Reader for the INI calibration file written by the calibration tool.
//!
//! Layout (QSettings INI format, nested keys separated by `\` or `/`):
//!
//! ```text
//! [gain]
//! ch0\20mV=1.02
//! [offset]
//! ch0\20mV=130
//! ```

use std::path::{Path, PathBuf};

use crate::Result;
use crate::constants::{CALIBRATION_DIR, CALIBRATION_FILE};

use super::{CalibrationStore, Group, MemoryStore};

/// Calibration store backed by an INI file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniStore {
    source: Option<PathBuf>,
    values: MemoryStore,
}

impl IniStore {
    /// Parse INI text. Malformed lines and keys outside the
    /// `gain`/`offset` groups are skipped.
    pub fn parse(text: &str) -> Self {
        let mut values = MemoryStore::new();
        let mut section: Vec<String> = Vec::new();

        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[') {
                match name.strip_suffix(']') {
                    Some(name) => section = split_path(name),
                    None => {
                        log::warn!("calibration line {}: unterminated section", lineno + 1);
                        section.clear();
                    }
                }
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                log::warn!("calibration line {}: expected key=value", lineno + 1);
                continue;
            };

            let mut path = section.clone();
            path.extend(split_path(key));
            let [group, channel, range] = path.as_slice() else {
                continue;
            };
            let Some(group) = Group::from_name(group) else {
                continue;
            };
            values.insert(group, channel.as_str(), range.as_str(), unquote(value.trim()));
        }

        Self {
            source: None,
            values,
        }
    }

    /// Read and parse `path`, exposing I/O failures.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut store = Self::parse(&text);
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    /// Read and parse `path`. A missing or unreadable file yields an empty
    /// store so the specification keeps its theoretical values.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(store) => store,
            Err(crate::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no calibration file at {}", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring calibration file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load the calibration file from its default location, see
    /// [`default_path`].
    pub fn load_default() -> Self {
        match default_path() {
            Some(path) => Self::load(path),
            None => {
                log::warn!("no home directory, calibration file not read");
                Self::default()
            }
        }
    }

    /// File this store was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of gain and offset entries read
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no entry was read
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CalibrationStore for IniStore {
    fn value(&self, group: Group, channel: &str, range: &str) -> Option<String> {
        self.values.value(group, channel, range)
    }
}

/// `$XDG_CONFIG_HOME/OpenHantek/modelDSO6022.conf` when `XDG_CONFIG_HOME`
/// is absolute, `~/.config/OpenHantek/modelDSO6022.conf` otherwise.
pub fn default_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CALIBRATION_DIR).join(CALIBRATION_FILE))
}

fn config_dir() -> Option<PathBuf> {
    if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_config);
        if path.is_absolute() {
            return Some(path);
        }
    }

    dirs::home_dir().map(|h| h.join(".config"))
}

fn split_path(s: &str) -> Vec<String> {
    s.split(['\\', '/'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
