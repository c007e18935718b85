//! Value objects
//!
//! Immutable types describing *what* is requested (capability types,
//! injection points) and *how* candidates are labelled (qualifiers,
//! component metadata).

pub mod capability;
pub mod injection;
pub mod metadata;
pub mod qualifier;

pub use capability::{CapabilityType, TypeDescriptor};
pub use injection::{Annotation, InjectionPoint};
pub use metadata::ComponentMetadata;
pub use qualifier::{Qualifier, QualifierSet};
