//! Injection points

use std::fmt;

use super::capability::CapabilityType;
use super::qualifier::{Qualifier, QualifierSet};

/// Annotation found at an injection point
///
/// Only qualifier annotations take part in narrowing; markers are carried
/// through so callers can inspect them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Annotation {
    /// Narrowing qualifier
    Qualifier(Qualifier),
    /// Any other annotation
    Marker(String),
}

impl From<Qualifier> for Annotation {
    fn from(qualifier: Qualifier) -> Self {
        Self::Qualifier(qualifier)
    }
}

/// A place that requests every provider of a capability
#[derive(Clone, Debug)]
pub struct InjectionPoint {
    capability: CapabilityType,
    annotations: Vec<Annotation>,
}

impl InjectionPoint {
    /// Injection point requesting `T` with no annotations
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            capability: CapabilityType::of::<T>(),
            annotations: Vec::new(),
        }
    }

    /// Add an annotation
    pub fn with_annotation<A: Into<Annotation>>(mut self, annotation: A) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Add a qualifier annotation
    pub fn with_qualifier(self, qualifier: Qualifier) -> Self {
        self.with_annotation(Annotation::Qualifier(qualifier))
    }

    /// Add a marker annotation
    pub fn with_marker<S: Into<String>>(self, marker: S) -> Self {
        self.with_annotation(Annotation::Marker(marker.into()))
    }

    /// Requested capability
    pub fn capability(&self) -> CapabilityType {
        self.capability
    }

    /// All annotations in declaration order
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The qualifier annotations, markers dropped
    pub fn qualifiers(&self) -> QualifierSet {
        self.annotations
            .iter()
            .filter_map(|annotation| match annotation {
                Annotation::Qualifier(q) => Some(q.clone()),
                Annotation::Marker(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for InjectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.capability, self.qualifiers())
    }
}
