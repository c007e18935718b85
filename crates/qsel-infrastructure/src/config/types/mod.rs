//! Configuration types

pub mod app;
pub mod logging;
pub mod resolution;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use resolution::ResolutionConfig;
