//! Resolution configuration types

use qsel_application::SelectionMode;
use serde::{Deserialize, Serialize};

/// Resolution configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// `lenient` falls back to the first candidate on a tie, `strict` fails
    #[serde(default)]
    pub mode: SelectionMode,
}
