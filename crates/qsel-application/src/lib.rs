//! Application Layer - qsel
//!
//! This crate contains the multi-candidate provider resolver.
//!
//! ## Architecture
//!
//! ```text
//! ProviderRegistry ──► InstanceResolver ──► ResolvedView<T>
//!  (port, external)     (injection point)     │
//!                                             ├── get()          default instance
//!                                             ├── select(..)     narrowed view
//!                                             ├── iter()         every instance
//!                                             └── destroy(..)    disposal delegate
//! ```
//!
//! ## Contents
//!
//! - `resolution`: [`Candidate`], [`ResolvedView`] and the default-instance
//!   selection rules
//! - `use_cases`: [`InstanceResolver`], the calling contract of the
//!   injection-point interception layer
//! - `ports::registry`: compile-time component registration via `linkme`
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `qsel-domain`: for capability types, qualifiers and port traits
//! - Pure Rust libraries for logging, serialization and registration

pub mod ports;
pub mod resolution;
pub mod use_cases;

pub use resolution::*;
pub use use_cases::*;
