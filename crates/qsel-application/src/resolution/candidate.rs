//! Resolution candidates

use std::fmt;
use std::sync::Arc;

use qsel_domain::{ComponentMetadata, ProvidedObject, QualifierSet, RegisteredProvider};

/// One provider eligible for a capability `T`
///
/// A candidate is a frozen snapshot: the primary flag comes from the
/// registration, tags and ranking signals from the declared type, and none of
/// them change after construction.
pub struct Candidate<T: ?Sized> {
    name: Arc<str>,
    instance: Arc<T>,
    object: Arc<ProvidedObject>,
    primary: bool,
}

impl<T: ?Sized + Send + Sync + 'static> Candidate<T> {
    /// Snapshot `object` as a candidate for `T`
    ///
    /// Returns `None` when the object was never bound to `T`.
    pub fn new<N: Into<Arc<str>>>(name: N, object: Arc<ProvidedObject>, primary: bool) -> Option<Self> {
        let instance = object.as_capability::<T>()?;
        Some(Self {
            name: name.into(),
            instance,
            object,
            primary,
        })
    }

    /// Snapshot a registry record as a candidate for `T`
    pub fn from_provider(provider: RegisteredProvider) -> Option<Self> {
        Self::new(provider.name, provider.object, provider.primary)
    }

    /// Re-type this candidate as `U` when its object is an instance of `U`
    pub(crate) fn cast<U: ?Sized + Send + Sync + 'static>(&self) -> Option<Candidate<U>> {
        let instance = self.object.as_capability::<U>()?;
        Some(Candidate {
            name: Arc::clone(&self.name),
            instance,
            object: Arc::clone(&self.object),
            primary: self.primary,
        })
    }
}

impl<T: ?Sized> Candidate<T> {
    /// Registry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The provided instance
    pub fn instance(&self) -> &Arc<T> {
        &self.instance
    }

    /// The registry record backing this candidate
    pub fn object(&self) -> &Arc<ProvidedObject> {
        &self.object
    }

    /// Whether the registration marks this candidate as primary
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Qualifier tags of the declared type
    pub fn tags(&self) -> &QualifierSet {
        self.object.tags()
    }

    /// Static metadata of the declared type
    pub fn metadata(&self) -> &ComponentMetadata {
        self.object.metadata()
    }
}

impl<T: ?Sized> Clone for Candidate<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            instance: Arc::clone(&self.instance),
            object: Arc::clone(&self.object),
            primary: self.primary,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Candidate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("type_name", &self.object.type_name())
            .field("primary", &self.primary)
            .field("tags", self.tags())
            .finish()
    }
}
