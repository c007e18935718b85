//! Domain entities

pub mod provided_object;

pub use provided_object::{ProvidedObject, ProvidedObjectBuilder};
