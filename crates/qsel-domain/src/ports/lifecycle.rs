//! Component lifecycle port
//!
//! Every object handed out by a provider registry implements [`Component`].
//! Capability traits are declared as subtraits (`trait Greeter: Component`)
//! so that a `dyn Greeter` can still answer the disposal capability query.

use crate::value_objects::ComponentMetadata;

/// Error raised by a disposal capability
pub type DisposeError = Box<dyn std::error::Error + Send + Sync>;

/// A single no-argument disposal operation
pub trait Disposable: Send + Sync {
    /// Release whatever the component holds
    fn dispose(&self) -> std::result::Result<(), DisposeError>;
}

/// Base trait for provided objects
pub trait Component: Send + Sync + 'static {
    /// Static metadata of the declaring type (tags, order, priority)
    fn metadata() -> ComponentMetadata
    where
        Self: Sized,
    {
        ComponentMetadata::default()
    }

    /// Disposal capability, if the component exposes one
    fn disposal(&self) -> Option<&dyn Disposable> {
        None
    }

    /// Concrete type name for diagnostics
    fn component_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
