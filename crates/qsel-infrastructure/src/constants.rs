//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `qsel_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "qsel.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "qsel";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "QSEL";

/// Separator between the prefix and nested keys of configuration variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "QSEL_LOG";

/// File name prefix of rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_PREFIX: &str = "qsel";

/// Accepted log level names
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
