//! Capability type descriptors

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Runtime identity of a capability type (usually a `dyn Trait`)
///
/// Two descriptors are equal when they describe the same Rust type; the
/// name is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct CapabilityType {
    id: TypeId,
    name: &'static str,
}

impl CapabilityType {
    /// Descriptor for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Type identity used for binding lookups
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this descriptor describes `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for CapabilityType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CapabilityType {}

impl Hash for CapabilityType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for CapabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CapabilityType").field(&self.name).finish()
    }
}

impl fmt::Display for CapabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Typed descriptor for narrowing to `U`, optionally annotated with type
/// arguments
///
/// Only the raw type takes part in narrowing. Recorded arguments are kept
/// for diagnostics and are discarded by `select_type`, so a descriptor for a
/// generic capability matches exactly what its raw type matches.
pub struct TypeDescriptor<U: ?Sized + 'static> {
    raw: CapabilityType,
    arguments: Vec<CapabilityType>,
    _marker: PhantomData<fn(&U)>,
}

impl<U: ?Sized + 'static> TypeDescriptor<U> {
    /// Descriptor whose raw type is `U`
    pub fn new() -> Self {
        Self {
            raw: CapabilityType::of::<U>(),
            arguments: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Record a type argument
    pub fn with_argument<A: ?Sized + 'static>(mut self) -> Self {
        self.arguments.push(CapabilityType::of::<A>());
        self
    }

    /// The raw type, the only part used for narrowing
    pub fn raw_type(&self) -> CapabilityType {
        self.raw
    }

    /// Recorded type arguments
    pub fn arguments(&self) -> &[CapabilityType] {
        &self.arguments
    }
}

impl<U: ?Sized + 'static> Default for TypeDescriptor<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: ?Sized + 'static> Clone for TypeDescriptor<U> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            arguments: self.arguments.clone(),
            _marker: PhantomData,
        }
    }
}

impl<U: ?Sized + 'static> fmt::Debug for TypeDescriptor<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("raw", &self.raw)
            .field("arguments", &self.arguments)
            .finish()
    }
}
