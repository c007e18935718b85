//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error carried as a `#[source]`
type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for qsel
#[derive(Error, Debug)]
pub enum Error {
    /// No candidate satisfies the requested capability
    #[error("Unsatisfied dependency: no provider for {capability}")]
    Unsatisfied {
        /// Name of the requested capability
        capability: String,
    },

    /// Several candidates remain and none wins by primary flag or priority
    #[error(
        "Ambiguous dependency: {} providers for {capability} and no tie-break ({})",
        .candidates.len(),
        .candidates.join(", ")
    )]
    AmbiguousWithoutTiebreak {
        /// Name of the requested capability
        capability: String,
        /// Registry names of the tied candidates, in iteration order
        candidates: Vec<String>,
    },

    /// The disposal capability of a provided object failed
    #[error("Disposal of {component} failed: {source}")]
    DisposalFailure {
        /// Type name of the component being disposed
        component: String,
        /// Error raised by the disposal capability
        #[source]
        source: BoxedSource,
    },

    /// An injection point was resolved for a different capability
    #[error("Capability mismatch: injection point requests {requested}, resolver asked for {expected}")]
    CapabilityMismatch {
        /// Capability the caller asked the resolver for
        expected: String,
        /// Capability declared by the injection point
        requested: String,
    },

    /// Qualifier text could not be parsed or validated
    #[error("Invalid qualifier: {message}")]
    InvalidQualifier {
        /// Description of the problem
        message: String,
    },

    /// A component name was registered twice
    #[error("Duplicate component: {name}")]
    DuplicateComponent {
        /// The name that was already taken
        name: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unsatisfied dependency error
    pub fn unsatisfied<S: Into<String>>(capability: S) -> Self {
        Self::Unsatisfied {
            capability: capability.into(),
        }
    }

    /// Create an ambiguity error for strict selection
    pub fn ambiguous<S: Into<String>>(capability: S, candidates: Vec<String>) -> Self {
        Self::AmbiguousWithoutTiebreak {
            capability: capability.into(),
            candidates,
        }
    }

    /// Wrap a failure raised by a disposal capability
    pub fn disposal<S: Into<String>>(component: S, source: BoxedSource) -> Self {
        Self::DisposalFailure {
            component: component.into(),
            source,
        }
    }

    /// Create a capability mismatch error
    pub fn capability_mismatch<S: Into<String>, R: Into<String>>(expected: S, requested: R) -> Self {
        Self::CapabilityMismatch {
            expected: expected.into(),
            requested: requested.into(),
        }
    }

    /// Create an invalid qualifier error
    pub fn invalid_qualifier<S: Into<String>>(message: S) -> Self {
        Self::InvalidQualifier {
            message: message.into(),
        }
    }

    /// Create a duplicate component error
    pub fn duplicate_component<S: Into<String>>(name: S) -> Self {
        Self::DuplicateComponent { name: name.into() }
    }

    /// Whether this error reports a cardinality problem (unsatisfied or ambiguous)
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::Unsatisfied { .. } | Self::AmbiguousWithoutTiebreak { .. }
        )
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
