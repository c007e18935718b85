//! Ports for external collaborators
//!
//! - [`registry`]: the provider registry that enumerates candidates
//! - [`lifecycle`]: the component base trait and its disposal capability

pub mod lifecycle;
pub mod registry;

pub use lifecycle::{Component, DisposeError, Disposable};
pub use registry::{ProviderRegistry, RegisteredProvider};
