//! Provided objects
//!
//! A [`ProvidedObject`] is the registry's type-erased record of one component
//! instance. It remembers every capability the component was bound to, as a
//! shared handle already typed as that capability, so that "is this object
//! an instance of `U`?" is a table lookup rather than reflection.
//!
//! ```text
//! ProvidedObject::builder(FormalGreeter)      binds FormalGreeter
//!     .bind::<dyn Greeter>(|g| g)             binds dyn Greeter
//!     .build()
//!
//! object.as_capability::<dyn Greeter>()       Some(Arc<dyn Greeter>)
//! object.as_capability::<dyn Disposable>()    None
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::ports::Component;
use crate::value_objects::{CapabilityType, ComponentMetadata, QualifierSet};

struct Binding {
    capability: CapabilityType,
    handle: Box<dyn Any + Send + Sync>,
}

/// A component instance together with its static metadata and capability bindings
pub struct ProvidedObject {
    type_name: &'static str,
    metadata: ComponentMetadata,
    bindings: HashMap<TypeId, Binding>,
}

impl ProvidedObject {
    /// Start building a record for `component`
    ///
    /// The component is bound to its own concrete type and carries the
    /// metadata declared by [`Component::metadata`].
    pub fn builder<C: Component>(component: C) -> ProvidedObjectBuilder<C> {
        ProvidedObjectBuilder::new(Arc::new(component))
    }

    /// Concrete type name of the component
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Static metadata of the declared type
    pub fn metadata(&self) -> &ComponentMetadata {
        &self.metadata
    }

    /// Qualifier tags of the declared type
    pub fn tags(&self) -> &QualifierSet {
        &self.metadata.tags
    }

    /// Whether the object was bound to `capability`
    pub fn is_instance_of(&self, capability: &CapabilityType) -> bool {
        self.bindings.contains_key(&capability.id())
    }

    /// Shared handle typed as `U`, when the object was bound to `U`
    pub fn as_capability<U: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<U>> {
        self.bindings
            .get(&TypeId::of::<U>())
            .and_then(|binding| binding.handle.downcast_ref::<Arc<U>>())
            .cloned()
    }

    /// Every capability the object was bound to, in no particular order
    pub fn capabilities(&self) -> impl Iterator<Item = CapabilityType> + '_ {
        self.bindings.values().map(|binding| binding.capability)
    }
}

impl fmt::Debug for ProvidedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut capabilities: Vec<&str> = self.capabilities().map(|c| c.name()).collect();
        capabilities.sort_unstable();
        f.debug_struct("ProvidedObject")
            .field("type_name", &self.type_name)
            .field("metadata", &self.metadata)
            .field("capabilities", &capabilities)
            .finish()
    }
}

/// Builder for [`ProvidedObject`]
pub struct ProvidedObjectBuilder<C: Component> {
    component: Arc<C>,
    metadata: ComponentMetadata,
    bindings: HashMap<TypeId, Binding>,
}

impl<C: Component> ProvidedObjectBuilder<C> {
    fn new(component: Arc<C>) -> Self {
        let builder = Self {
            component,
            metadata: C::metadata(),
            bindings: HashMap::new(),
        };
        builder.bind::<C>(|c| c)
    }

    /// Bind the component to capability `U`
    ///
    /// `upcast` is normally the identity closure `|c| c`, which lets the
    /// compiler perform the unsizing coercion to `Arc<U>`.
    pub fn bind<U: ?Sized + Send + Sync + 'static>(mut self, upcast: fn(Arc<C>) -> Arc<U>) -> Self {
        let handle: Arc<U> = upcast(Arc::clone(&self.component));
        self.bindings.insert(
            TypeId::of::<U>(),
            Binding {
                capability: CapabilityType::of::<U>(),
                handle: Box::new(handle),
            },
        );
        self
    }

    /// Replace the declared metadata
    pub fn with_metadata(mut self, metadata: ComponentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Finish the record
    pub fn build(self) -> ProvidedObject {
        ProvidedObject {
            type_name: self.component.component_name(),
            metadata: self.metadata,
            bindings: self.bindings,
        }
    }
}
