//! Candidate resolution
//!
//! - [`candidate`]: frozen snapshot of one discovered provider
//! - [`selection`]: deterministic default-instance rules
//! - [`view`]: the immutable, narrowable view over a candidate sequence

pub mod candidate;
pub mod selection;
pub mod view;

pub use candidate::Candidate;
pub use selection::{Selection, SelectionMode, SelectionReason, select_default};
pub use view::{Instances, ResolvedView};
