//! Default-instance selection
//!
//! Rules, applied to a candidate sequence in stored order:
//!
//! 1. A single candidate wins outright.
//! 2. Otherwise the first primary candidate wins, even when several are
//!    primary and even when a later one ranks higher.
//! 3. Otherwise the candidate with the strictly greatest ranking signal wins
//!    (`order` and `priority` share one scale); ties keep the earlier one.
//! 4. Otherwise the first candidate wins. [`SelectionMode::Strict`] turns
//!    this last case into an error instead.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::candidate::Candidate;

/// How `get()` treats a tie with no primary and no ranking signal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Fall back to the first candidate
    #[default]
    Lenient,
    /// Fail with `AmbiguousWithoutTiebreak`
    Strict,
}

/// Why a candidate was chosen as the default instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
    /// It was the only candidate
    Single,
    /// It was the first primary candidate
    Primary,
    /// It carried the highest ranking signal
    Priority(i32),
    /// Nothing distinguished the candidates; the first one was taken
    FirstFallback,
}

/// Outcome of default-instance selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Index into the candidate sequence
    pub index: usize,
    /// Rule that decided
    pub reason: SelectionReason,
}

/// Choose the default candidate, or `None` for an empty sequence
pub fn select_default<T: ?Sized>(candidates: &[Candidate<T>]) -> Option<Selection> {
    match candidates {
        [] => None,
        [_] => Some(Selection {
            index: 0,
            reason: SelectionReason::Single,
        }),
        _ => Some(primary_or_highest_priority(candidates).unwrap_or(Selection {
            index: 0,
            reason: SelectionReason::FirstFallback,
        })),
    }
}

fn primary_or_highest_priority<T: ?Sized>(candidates: &[Candidate<T>]) -> Option<Selection> {
    let mut highest: Option<(i32, usize)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.is_primary() {
            trace!(candidate = candidate.name(), "Primary candidate short-circuits selection");
            return Some(Selection {
                index,
                reason: SelectionReason::Primary,
            });
        }

        for value in candidate.metadata().ranking_signals() {
            if highest.is_none_or(|(best, _)| value > best) {
                trace!(candidate = candidate.name(), priority = value, "New highest priority");
                highest = Some((value, index));
            }
        }
    }

    highest.map(|(priority, index)| Selection {
        index,
        reason: SelectionReason::Priority(priority),
    })
}
