//! Ports owned by the application layer

pub mod registry;

pub use registry::{COMPONENTS, ComponentEntry, find_component, list_components};
