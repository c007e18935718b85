//! Use cases

pub mod instance_resolver;

pub use instance_resolver::InstanceResolver;
