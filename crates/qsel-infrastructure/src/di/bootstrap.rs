//! Composition root
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let greeters = context.resolver().view::<dyn Greeter>();
//! ```

use std::sync::Arc;

use qsel_application::InstanceResolver;
use qsel_domain::ProviderRegistry;
use qsel_domain::error::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::di::registry::ComponentRegistry;

/// Configuration, registry and resolver wired together
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    registry: Arc<ComponentRegistry>,
    resolver: InstanceResolver,
}

impl AppContext {
    /// The populated registry
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Resolver using the configured selection mode
    pub fn resolver(&self) -> &InstanceResolver {
        &self.resolver
    }
}

/// Wire every compile-time registered component under `config`
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    Ok(init_app_with_registry(config, ComponentRegistry::linked()?))
}

/// Wire an already populated registry under `config`
pub fn init_app_with_registry(config: AppConfig, registry: ComponentRegistry) -> AppContext {
    let registry = Arc::new(registry);
    let provider: Arc<dyn ProviderRegistry> = registry.clone();
    let resolver = InstanceResolver::new(provider).with_mode(config.resolution.mode);

    info!(
        components = registry.len(),
        mode = ?config.resolution.mode,
        "Component registry ready"
    );

    AppContext {
        config: Arc::new(config),
        registry,
        resolver,
    }
}
