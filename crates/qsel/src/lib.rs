//! # qsel
//!
//! Qualified provider selection: ask a component registry for every provider
//! of a capability, narrow the result by qualifiers or by a more specific
//! type, and pick a default instance by primary flag, then ranking, then
//! registration order.
//!
//! ## Example
//!
//! ```ignore
//! use qsel::demo::Greeter;
//! use qsel::infrastructure::{AppConfig, init_app};
//!
//! let context = init_app(AppConfig::default())?;
//! let greeters = context.resolver().view::<dyn Greeter>();
//!
//! let formal = greeters.select(&["official".parse()?, "formal".parse()?]);
//! assert!(!formal.is_ambiguous());
//! println!("{}", formal.get()?.greet("Ada"));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability types, qualifiers, provided objects and errors
//! - `application` - candidates, resolved views and injection-point resolution
//! - `infrastructure` - configuration, logging and the component registry
//! - [`demo`] - greeter components registered at link time
//! - [`cli`] - the `qsel` command line

pub mod cli;
pub mod demo;

/// Domain layer - core types and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use qsel_domain::*;
}

/// Application layer - resolved views and the instance resolver
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use qsel_application::*;
}

/// Infrastructure layer - configuration, logging and the component registry
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use qsel_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use application::{Candidate, InstanceResolver, ResolvedView, SelectionMode};
pub use domain::{Component, Error, InjectionPoint, Qualifier, Result};
