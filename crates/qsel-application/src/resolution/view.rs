//! Resolved views
//!
//! A [`ResolvedView`] is an immutable snapshot of every candidate for one
//! capability. Narrowing never touches the view it is called on; it builds a
//! new view over the matching subset, so views can be shared and narrowed
//! from several threads without coordination.
//!
//! ```ignore
//! let greeters: ResolvedView<dyn Greeter> = resolver.view();
//!
//! let default = greeters.get()?;                          // primary / priority / first
//! let formal = greeters.select(&[official, formal]);      // AND of qualifiers
//! let simple = greeters.select_as::<SimpleGreeter>(&[]);  // runtime instance check
//! for greeter in &greeters { /* every instance, stored order */ }
//! ```

use std::fmt;
use std::sync::Arc;

use qsel_domain::error::{Error, Result};
use qsel_domain::{CapabilityType, Component, Qualifier, TypeDescriptor};
use tracing::{debug, error, trace, warn};

use super::candidate::Candidate;
use super::selection::{Selection, SelectionMode, SelectionReason, select_default};

/// Immutable, narrowable view over the candidates for a capability
pub struct ResolvedView<T: ?Sized> {
    target: CapabilityType,
    candidates: Arc<[Candidate<T>]>,
    mode: SelectionMode,
}

impl<T: ?Sized + Send + Sync + 'static> ResolvedView<T> {
    /// View over `candidates`, labelled with `target`
    ///
    /// The candidates are taken as already filtered for `target`; an empty
    /// sequence yields an unsatisfied view.
    pub fn new(target: CapabilityType, candidates: Vec<Candidate<T>>) -> Self {
        trace!(
            capability = target.name(),
            candidates = candidates.len(),
            "Created resolved view"
        );
        Self {
            target,
            candidates: candidates.into(),
            mode: SelectionMode::default(),
        }
    }

    /// View over `candidates`, labelled with `T` itself
    pub fn of(candidates: Vec<Candidate<T>>) -> Self {
        Self::new(CapabilityType::of::<T>(), candidates)
    }

    /// Set the selection mode used by [`get`](Self::get)
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// The default instance, using this view's selection mode
    pub fn get(&self) -> Result<Arc<T>> {
        self.get_with(self.mode)
    }

    /// The default instance, using an explicit selection mode
    pub fn get_with(&self, mode: SelectionMode) -> Result<Arc<T>> {
        let Some(selection) = self.default_selection() else {
            debug!(capability = self.target.name(), "No candidate to select");
            return Err(Error::unsatisfied(self.target.name()));
        };

        let chosen = &self.candidates[selection.index];
        if selection.reason == SelectionReason::FirstFallback {
            if mode == SelectionMode::Strict {
                return Err(Error::ambiguous(
                    self.target.name(),
                    self.names().map(str::to_string).collect(),
                ));
            }
            warn!(
                capability = self.target.name(),
                candidates = self.candidates.len(),
                chosen = chosen.name(),
                "No primary or ranked candidate, falling back to the first"
            );
        } else {
            debug!(
                capability = self.target.name(),
                chosen = chosen.name(),
                reason = ?selection.reason,
                "Selected default instance"
            );
        }

        Ok(Arc::clone(chosen.instance()))
    }

    /// Which candidate [`get`](Self::get) would return, and why
    pub fn default_selection(&self) -> Option<Selection> {
        select_default(&self.candidates)
    }

    /// Narrow by qualifiers, keeping the target capability
    ///
    /// A candidate stays when its tags contain every requested qualifier. No
    /// qualifiers yields an equivalent view over all current candidates.
    pub fn select(&self, qualifiers: &[Qualifier]) -> Self {
        if qualifiers.is_empty() {
            return self.clone();
        }

        let filtered: Vec<Candidate<T>> = self
            .candidates
            .iter()
            .filter(|candidate| candidate.tags().contains_all(qualifiers))
            .cloned()
            .collect();

        self.log_narrowing(self.target, qualifiers, filtered.len());
        Self {
            target: self.target,
            candidates: filtered.into(),
            mode: self.mode,
        }
    }

    /// Narrow to candidates that are instances of `U` and carry every qualifier
    ///
    /// `U` need not be related to `T` at compile time; every candidate is
    /// checked at runtime against its registered bindings.
    pub fn select_as<U: ?Sized + Send + Sync + 'static>(
        &self,
        qualifiers: &[Qualifier],
    ) -> ResolvedView<U> {
        let target = CapabilityType::of::<U>();
        let filtered: Vec<Candidate<U>> = self
            .candidates
            .iter()
            .filter_map(|candidate| candidate.cast::<U>())
            .filter(|candidate| candidate.tags().contains_all(qualifiers))
            .collect();

        self.log_narrowing(target, qualifiers, filtered.len());
        ResolvedView {
            target,
            candidates: filtered.into(),
            mode: self.mode,
        }
    }

    /// Narrow using a type descriptor
    ///
    /// Only the descriptor's raw type is used; recorded type arguments are
    /// ignored.
    pub fn select_type<U: ?Sized + Send + Sync + 'static>(
        &self,
        descriptor: &TypeDescriptor<U>,
        qualifiers: &[Qualifier],
    ) -> ResolvedView<U> {
        if !descriptor.arguments().is_empty() {
            trace!(
                raw = descriptor.raw_type().name(),
                arguments = descriptor.arguments().len(),
                "Ignoring type arguments of descriptor"
            );
        }
        self.select_as::<U>(qualifiers)
    }

    /// Dispose of `object` through its disposal capability, if it has one
    ///
    /// Objects without the capability are left alone. A failing disposal is
    /// returned as [`Error::DisposalFailure`].
    #[allow(clippy::unused_self)]
    pub fn destroy<O: ?Sized + Component>(&self, object: &O) -> Result<()> {
        let Some(disposable) = object.disposal() else {
            trace!(component = object.component_name(), "No disposal capability");
            return Ok(());
        };

        disposable.dispose().map_err(|source| {
            error!(
                component = object.component_name(),
                error = %source,
                "Disposal failed"
            );
            Error::disposal(object.component_name(), source)
        })?;

        debug!(component = object.component_name(), "Disposed component");
        Ok(())
    }

    fn log_narrowing(&self, target: CapabilityType, qualifiers: &[Qualifier], after: usize) {
        let requested: Vec<String> = qualifiers.iter().map(ToString::to_string).collect();
        debug!(
            from = self.target.name(),
            to = target.name(),
            qualifiers = ?requested,
            before = self.candidates.len(),
            after,
            "Narrowed resolved view"
        );
    }
}

impl<T: ?Sized> ResolvedView<T> {
    /// Capability this view claims to satisfy
    pub fn target(&self) -> CapabilityType {
        self.target
    }

    /// Selection mode used by `get()`
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Every candidate, in stored order
    pub fn candidates(&self) -> &[Candidate<T>] {
        &self.candidates
    }

    /// Registry names, in stored order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(Candidate::name)
    }

    /// Every instance, in stored order
    ///
    /// Each call starts an independent traversal.
    pub fn iter(&self) -> Instances<'_, T> {
        Instances {
            inner: self.candidates.iter(),
        }
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the view holds no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// No candidate satisfies the capability
    pub fn is_unsatisfied(&self) -> bool {
        self.candidates.is_empty()
    }

    /// More than one candidate remains
    ///
    /// Purely a cardinality check: a view can be ambiguous and still have a
    /// deterministic default through a primary or ranked candidate.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

impl<T: ?Sized> Clone for ResolvedView<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            candidates: Arc::clone(&self.candidates),
            mode: self.mode,
        }
    }
}

impl<T: ?Sized> fmt::Debug for ResolvedView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedView")
            .field("target", &self.target)
            .field("candidates", &self.names().collect::<Vec<_>>())
            .field("mode", &self.mode)
            .finish()
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a ResolvedView<T> {
    type Item = Arc<T>;
    type IntoIter = Instances<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the instances of a [`ResolvedView`]
pub struct Instances<'a, T: ?Sized> {
    inner: std::slice::Iter<'a, Candidate<T>>,
}

impl<T: ?Sized> Iterator for Instances<'_, T> {
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|candidate| Arc::clone(candidate.instance()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: ?Sized> DoubleEndedIterator for Instances<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|candidate| Arc::clone(candidate.instance()))
    }
}

impl<T: ?Sized> ExactSizeIterator for Instances<'_, T> {}

impl<T: ?Sized> std::iter::FusedIterator for Instances<'_, T> {}
