//! Domain Layer - qsel
//!
//! Core types shared by every layer of the qualified provider selector.
//!
//! ## Contents
//!
//! - [`value_objects`]: capability types, qualifiers, component metadata and
//!   injection points
//! - [`entities`]: the type-erased [`ProvidedObject`] record handed out by a
//!   provider registry
//! - [`ports`]: contracts for external collaborators (provider registries,
//!   disposal capabilities)
//! - [`error`]: the error taxonomy used across the workspace
//!
//! This crate has no knowledge of how providers are discovered or how a
//! default instance is chosen; those live in `qsel-application`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{ProvidedObject, ProvidedObjectBuilder};
pub use error::{Error, Result};
pub use ports::{Component, DisposeError, Disposable, ProviderRegistry, RegisteredProvider};
pub use value_objects::{
    Annotation, CapabilityType, ComponentMetadata, InjectionPoint, Qualifier, QualifierSet,
    TypeDescriptor,
};
