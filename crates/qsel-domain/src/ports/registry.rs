//! Provider registry port

use std::sync::Arc;

use crate::entities::ProvidedObject;
use crate::value_objects::CapabilityType;

/// One provider enumerated by a registry
#[derive(Clone, Debug)]
pub struct RegisteredProvider {
    /// Name the provider was registered under
    pub name: String,
    /// The provided object, shared with the registry
    pub object: Arc<ProvidedObject>,
    /// Whether the registration marks this provider as the preferred default
    pub primary: bool,
}

impl RegisteredProvider {
    /// Create a provider record
    pub fn new<S: Into<String>>(name: S, object: Arc<ProvidedObject>, primary: bool) -> Self {
        Self {
            name: name.into(),
            object,
            primary,
        }
    }
}

/// Enumerates every provider bound to a capability
///
/// Implementations return providers in discovery order. Callers preserve
/// that order for tie-breaking but never rely on it being stable across
/// calls.
pub trait ProviderRegistry: Send + Sync {
    /// Every provider whose object is an instance of `capability`
    fn providers_of(&self, capability: &CapabilityType) -> Vec<RegisteredProvider>;
}
