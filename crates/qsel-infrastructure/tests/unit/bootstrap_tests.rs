//! Tests for the composition root

use qsel_application::SelectionMode;
use qsel_domain::Error;
use qsel_infrastructure::config::ConfigBuilder;
use qsel_infrastructure::{AppConfig, ComponentRegistry, init_app, init_app_with_registry};

use crate::test_utils::{Service, service};

#[test]
fn test_resolver_uses_configured_mode() {
    let config = ConfigBuilder::new()
        .with_mode(SelectionMode::Strict)
        .build()
        .unwrap();

    let mut registry = ComponentRegistry::new();
    registry.register("one", service("one"), false).unwrap();
    registry.register("two", service("two"), false).unwrap();

    let context = init_app_with_registry(config, registry);
    assert_eq!(context.config.resolution.mode, SelectionMode::Strict);
    assert_eq!(context.registry().len(), 2);

    let view = context.resolver().view::<dyn Service>();
    assert_eq!(view.mode(), SelectionMode::Strict);
    assert!(matches!(
        view.get(),
        Err(Error::AmbiguousWithoutTiebreak { .. })
    ));
}

#[test]
fn test_lenient_default_falls_back_to_first() {
    let mut registry = ComponentRegistry::new();
    registry.register("one", service("one"), false).unwrap();
    registry.register("two", service("two"), false).unwrap();

    let context = init_app_with_registry(AppConfig::default(), registry);
    let view = context.resolver().view::<dyn Service>();
    assert_eq!(view.get().unwrap().id(), "one");
}

#[test]
fn test_init_app_imports_linked_components() {
    let context = init_app(AppConfig::default()).unwrap();
    let view = context.resolver().view::<dyn Service>();

    // fixedService is primary among the linked test services
    assert_eq!(view.get().unwrap().id(), "fixed");
    assert!(view.names().any(|name| name == "taggedService"));
}

#[test]
fn test_resolver_reads_the_context_registry() {
    let mut registry = ComponentRegistry::new();
    registry.register("only", service("only"), true).unwrap();

    let context = init_app_with_registry(AppConfig::default(), registry);
    let view = context.resolver().view::<dyn Service>();
    assert_eq!(view.len(), context.registry().len());
    assert_eq!(
        view.names().collect::<Vec<_>>(),
        context.registry().names().collect::<Vec<_>>()
    );
}
