//! Component wiring
//!
//! Components announce themselves through the compile-time `COMPONENTS`
//! slice. [`ComponentRegistry`] imports them into an ordered, name-indexed
//! provider registry and [`init_app`] puts a configured resolver on top.
//!
//! ```text
//! COMPONENTS (linkme) ──register_linked()──► ComponentRegistry
//!                                                  │ ProviderRegistry
//!                                                  ▼
//! AppConfig.resolution.mode ──────────────► InstanceResolver
//! ```

pub mod bootstrap;
pub mod registry;

pub use bootstrap::{AppContext, init_app, init_app_with_registry};
pub use registry::ComponentRegistry;
