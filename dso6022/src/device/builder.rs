// dso6022-rs/dso6022/src/device/builder.rs

use crate::calibration::{CalibrationStore, IniStore, MemoryStore};
use crate::control::Capabilities;
use crate::device::models::{ModelKind, create_model_for};
use crate::device::registry::Registry;

/// Helper to construct a Registry with optional configuration.
pub struct RegistryBuilder {
    capabilities: Capabilities,
    store: Option<Box<dyn CalibrationStore>>,
    test_boards: bool,
}

impl RegistryBuilder {
    /// Capabilities and test-board registration default to the cargo
    /// features the crate was built with; no calibration store.
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::from_build(),
            store: None,
            test_boards: cfg!(feature = "test-boards"),
        }
    }

    /// Override the build-time capability defaults
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Provide the calibration store overlaid on every model
    pub fn calibration(mut self, store: impl CalibrationStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Use the calibration file at its default location
    pub fn default_calibration(self) -> Self {
        self.calibration(IniStore::load_default())
    }

    /// Register the LCsoft EZ-USB test boards
    pub fn test_boards(mut self, enabled: bool) -> Self {
        self.test_boards = enabled;
        self
    }

    /// Construct and calibrate every variant. Nothing is shared with the
    /// caller until all overlays are done.
    ///
    /// Identity uniqueness is only asserted in debug builds; call
    /// [`Registry::validate`] to check it in release builds.
    pub fn build(self) -> Registry {
        let empty = MemoryStore::new();
        let store: &dyn CalibrationStore = match &self.store {
            Some(store) => &**store,
            None => &empty,
        };

        let models: Vec<_> = ModelKind::ALL
            .iter()
            .filter(|k| self.test_boards || !k.is_test_board())
            .map(|k| create_model_for(*k, self.capabilities, store))
            .collect();

        log::info!(
            "registered {} model(s), capabilities {:?}",
            models.len(),
            self.capabilities
        );
        let registry = Registry::from_models(models);
        debug_assert!(
            registry.validate().is_ok(),
            "variant table has clashing usb identities"
        );
        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
