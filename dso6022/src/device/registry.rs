// dso6022-rs/dso6022/src/device/registry.rs

use crate::device::builder::RegistryBuilder;
use crate::device::models::{DeviceModel, ModelKind};
use crate::types::{FirmwareState, UsbId};
use crate::{Error, Result};

/// Immutable set of supported variants, in registration order.
///
/// Every specification is fully calibrated before the registry is
/// returned by [`RegistryBuilder::build`]; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    models: Vec<DeviceModel>,
}

impl Registry {
    pub(crate) fn from_models(models: Vec<DeviceModel>) -> Self {
        Self { models }
    }

    /// Start a [`RegistryBuilder`]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Models in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, DeviceModel> {
        self.models.iter()
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// `true` when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Model of variant `kind`
    pub fn get(&self, kind: ModelKind) -> Option<&DeviceModel> {
        self.models.iter().find(|m| m.kind() == kind)
    }

    /// Model running firmware with identity `usb_id`. Variants sharing a
    /// firmware image share this identity; the first registered wins.
    pub fn find_active(&self, usb_id: UsbId) -> Option<&DeviceModel> {
        self.models.iter().find(|m| m.identity.active == usb_id)
    }

    /// Model whose bare loader enumerates as `usb_id`
    pub fn find_loader(&self, usb_id: UsbId) -> Option<&DeviceModel> {
        self.models.iter().find(|m| m.identity.loader == usb_id)
    }

    /// Resolve an enumerated identity to a model and its firmware state.
    /// Unknown identities yield `None`.
    pub fn identify(&self, usb_id: UsbId) -> Option<(&DeviceModel, FirmwareState)> {
        if let Some(model) = self.find_active(usb_id) {
            return Some((model, FirmwareState::Active));
        }
        self.find_loader(usb_id)
            .map(|model| (model, FirmwareState::AwaitingFirmware))
    }

    /// Models accepting the firmware image `config_name`
    pub fn by_config_name<'a>(
        &'a self,
        config_name: &'a str,
    ) -> impl Iterator<Item = &'a DeviceModel> + 'a {
        self.models
            .iter()
            .filter(move |m| m.identity.config_name == config_name)
    }

    /// Check identity uniqueness: loader identities are unique and never
    /// collide with an active identity; an active identity is shared only
    /// by variants loading the same firmware image.
    pub fn validate(&self) -> Result<()> {
        for (i, a) in self.models.iter().enumerate() {
            for b in &self.models[i + 1..] {
                let (ia, ib) = (&a.identity, &b.identity);
                let clash = if ia.loader == ib.loader || ia.loader == ib.active {
                    Some(ia.loader)
                } else if ia.active == ib.loader
                    || (ia.active == ib.active && ia.config_name != ib.config_name)
                {
                    Some(ia.active)
                } else {
                    None
                };
                if let Some(usb_id) = clash {
                    return Err(Error::DuplicateIdentity {
                        usb_id,
                        first: ia.display_name,
                        second: ib.display_name,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DeviceModel;
    type IntoIter = std::slice::Iter<'a, DeviceModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
