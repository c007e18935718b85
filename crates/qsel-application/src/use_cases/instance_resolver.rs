//! Injection-point resolution
//!
//! Calling contract of the interception layer that hands out a
//! [`ResolvedView`] wherever "every provider of `T`" is requested:
//!
//! 1. enumerate every provider bound to the capability, in registry order
//! 2. snapshot each as a [`Candidate`]
//! 3. keep only the qualifier annotations of the injection point
//! 4. return the full view, or the view narrowed by those qualifiers

use std::fmt;
use std::sync::Arc;

use qsel_domain::error::{Error, Result};
use qsel_domain::{CapabilityType, InjectionPoint, ProviderRegistry, Qualifier};
use tracing::{debug, warn};

use crate::resolution::{Candidate, ResolvedView, SelectionMode};

/// Builds resolved views from a provider registry
#[derive(Clone)]
pub struct InstanceResolver {
    registry: Arc<dyn ProviderRegistry>,
    mode: SelectionMode,
}

impl InstanceResolver {
    /// Resolver over `registry` using lenient selection
    pub fn new(registry: Arc<dyn ProviderRegistry>) -> Self {
        Self {
            registry,
            mode: SelectionMode::default(),
        }
    }

    /// Set the selection mode given to every view this resolver builds
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Selection mode given to built views
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// View over every provider of `T`
    pub fn view<T: ?Sized + Send + Sync + 'static>(&self) -> ResolvedView<T> {
        let capability = CapabilityType::of::<T>();
        let candidates: Vec<Candidate<T>> = self
            .registry
            .providers_of(&capability)
            .into_iter()
            .filter_map(|provider| {
                let name = provider.name.clone();
                let candidate = Candidate::from_provider(provider);
                if candidate.is_none() {
                    warn!(
                        provider = %name,
                        capability = capability.name(),
                        "Registry returned a provider that is not bound to the capability"
                    );
                }
                candidate
            })
            .collect();

        debug!(
            capability = capability.name(),
            candidates = candidates.len(),
            "Enumerated providers"
        );
        ResolvedView::new(capability, candidates).with_mode(self.mode)
    }

    /// View for an injection point requesting `T`
    ///
    /// Fails with [`Error::CapabilityMismatch`] when the injection point
    /// requests a different capability.
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(
        &self,
        point: &InjectionPoint,
    ) -> Result<ResolvedView<T>> {
        if !point.capability().is::<T>() {
            return Err(Error::capability_mismatch(
                std::any::type_name::<T>(),
                point.capability().name(),
            ));
        }

        let view = self.view::<T>();
        let qualifiers: Vec<Qualifier> = point.qualifiers().iter().cloned().collect();
        if qualifiers.is_empty() {
            return Ok(view);
        }
        Ok(view.select(&qualifiers))
    }
}

impl fmt::Debug for InstanceResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceResolver")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
