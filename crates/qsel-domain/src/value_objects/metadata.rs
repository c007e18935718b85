//! Static component metadata

use serde::{Deserialize, Serialize};

use super::qualifier::{Qualifier, QualifierSet};

/// Metadata declared by a component type
///
/// Captured once when the component is registered and never changed
/// afterwards. `order` and `priority` are two independent ranking signals on
/// the same integer scale; larger values win.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// Qualifier tags of the declared type
    #[serde(default)]
    pub tags: QualifierSet,
    /// Ordering signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    /// Priority signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl ComponentMetadata {
    /// Metadata with no tags and no ranking signals
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qualifier tag
    pub fn with_tag(mut self, tag: Qualifier) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Set the ordering signal
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the priority signal
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Ranking signals in evaluation order (`order` first, then `priority`)
    pub fn ranking_signals(&self) -> impl Iterator<Item = i32> {
        [self.order, self.priority].into_iter().flatten()
    }

    /// Whether the component declares any ranking signal
    pub fn is_ranked(&self) -> bool {
        self.order.is_some() || self.priority.is_some()
    }
}
