//! In-memory provider registry

use std::collections::HashMap;
use std::sync::Arc;

use qsel_application::ports::registry::{COMPONENTS, ComponentEntry};
use qsel_domain::error::{Error, Result};
use qsel_domain::{CapabilityType, ProvidedObject, ProviderRegistry, RegisteredProvider};
use tracing::{debug, trace};

/// Name-indexed registry that enumerates providers in registration order
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    providers: Vec<RegisteredProvider>,
    index: HashMap<String, usize>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every compile-time registered component
    pub fn linked() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_linked()?;
        Ok(registry)
    }

    /// Register `object` under `name`
    ///
    /// Fails with [`Error::DuplicateComponent`] when the name is taken.
    pub fn register<S: Into<String>>(
        &mut self,
        name: S,
        object: Arc<ProvidedObject>,
        primary: bool,
    ) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::duplicate_component(name));
        }

        debug!(
            component = %name,
            type_name = object.type_name(),
            primary,
            "Registered component"
        );
        self.index.insert(name.clone(), self.providers.len());
        self.providers
            .push(RegisteredProvider::new(name, object, primary));
        Ok(())
    }

    /// Register every entry, building each object with its factory
    pub fn register_entries<'a, I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a ComponentEntry>,
    {
        for entry in entries {
            self.register(entry.name, Arc::new((entry.factory)()), entry.primary)?;
        }
        Ok(())
    }

    /// Register every entry of the compile-time `COMPONENTS` slice
    ///
    /// Link order is unspecified, so entries are registered sorted by name.
    pub fn register_linked(&mut self) -> Result<()> {
        let mut entries: Vec<&ComponentEntry> = COMPONENTS.iter().collect();
        entries.sort_unstable_by_key(|entry| entry.name);
        self.register_entries(entries)
    }

    /// Drop every primary flag, leaving selection to ranking and order
    pub fn clear_primary_flags(&mut self) {
        for provider in &mut self.providers {
            provider.primary = false;
        }
    }

    /// Registered provider by name
    pub fn get(&self, name: &str) -> Option<&RegisteredProvider> {
        self.index.get(name).map(|&position| &self.providers[position])
    }

    /// Every registered provider, in registration order
    pub fn providers(&self) -> &[RegisteredProvider] {
        &self.providers
    }

    /// Registered names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|provider| provider.name.as_str())
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no component is registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ProviderRegistry for ComponentRegistry {
    fn providers_of(&self, capability: &CapabilityType) -> Vec<RegisteredProvider> {
        let providers: Vec<RegisteredProvider> = self
            .providers
            .iter()
            .filter(|provider| provider.object.is_instance_of(capability))
            .cloned()
            .collect();
        trace!(
            capability = capability.name(),
            found = providers.len(),
            "Enumerated registry"
        );
        providers
    }
}
