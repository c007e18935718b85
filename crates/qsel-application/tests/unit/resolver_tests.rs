//! Tests for injection-point resolution

use std::sync::Arc;

use qsel_application::{InstanceResolver, SelectionMode};
use qsel_domain::{ComponentMetadata, Error, InjectionPoint, RegisteredProvider};

use crate::test_utils::{
    ClosingGreeter, FORMAL, Farewell, Greeter, OFFICIAL, VecRegistry, closing_object,
    greeter_object, labels,
};

fn registry() -> VecRegistry {
    VecRegistry::default()
        .with(
            "simpleGreeter",
            greeter_object("simple", ComponentMetadata::new().with_tag(OFFICIAL)),
            false,
        )
        .with(
            "formalGreeter",
            greeter_object(
                "formal",
                ComponentMetadata::new().with_tag(OFFICIAL).with_tag(FORMAL),
            ),
            false,
        )
        .with("closingGreeter", closing_object("closing", false), false)
}

fn resolver() -> InstanceResolver {
    InstanceResolver::new(Arc::new(registry()))
}

#[test]
fn test_view_enumerates_in_registry_order() {
    let view = resolver().view::<dyn Greeter>();
    assert_eq!(
        view.names().collect::<Vec<_>>(),
        vec!["simpleGreeter", "formalGreeter", "closingGreeter"]
    );
    assert_eq!(labels(&view), vec!["simple", "formal", "closing"]);
    assert_eq!(view.mode(), SelectionMode::Lenient);
}

#[test]
fn test_view_of_secondary_capability() {
    let farewells = resolver().view::<dyn Farewell>();
    assert_eq!(farewells.names().collect::<Vec<_>>(), vec!["closingGreeter"]);

    let concrete = resolver().view::<ClosingGreeter>();
    assert_eq!(concrete.len(), 1);
}

#[test]
fn test_view_of_unprovided_capability_is_unsatisfied() {
    let view = resolver().view::<String>();
    assert!(view.is_unsatisfied());
    assert!(matches!(view.get(), Err(Error::Unsatisfied { .. })));
}

#[test]
fn test_resolve_without_qualifiers_returns_full_view() {
    let point = InjectionPoint::of::<dyn Greeter>();
    let view = resolver().resolve::<dyn Greeter>(&point).unwrap();
    assert_eq!(view.len(), 3);
    assert!(view.is_ambiguous());
}

#[test]
fn test_resolve_narrows_by_qualifier_annotations_only() {
    let point = InjectionPoint::of::<dyn Greeter>()
        .with_qualifier(OFFICIAL)
        .with_marker("inject")
        .with_qualifier(FORMAL);
    let view = resolver().resolve::<dyn Greeter>(&point).unwrap();
    assert_eq!(view.names().collect::<Vec<_>>(), vec!["formalGreeter"]);
    assert_eq!(view.get().unwrap().label(), "formal");
}

#[test]
fn test_resolve_markers_alone_do_not_narrow() {
    let point = InjectionPoint::of::<dyn Greeter>().with_marker("inject");
    let view = resolver().resolve::<dyn Greeter>(&point).unwrap();
    assert_eq!(view.len(), 3);
}

#[test]
fn test_resolve_rejects_mismatched_capability() {
    let point = InjectionPoint::of::<dyn Farewell>();
    let err = resolver().resolve::<dyn Greeter>(&point).unwrap_err();
    assert!(matches!(err, Error::CapabilityMismatch { .. }));
    assert!(!err.is_resolution_failure());
}

#[test]
fn test_resolver_mode_propagates_to_views() {
    let strict = resolver().with_mode(SelectionMode::Strict);
    assert_eq!(strict.mode(), SelectionMode::Strict);

    let view = strict.view::<dyn Greeter>();
    assert_eq!(view.mode(), SelectionMode::Strict);
    assert!(matches!(
        view.get(),
        Err(Error::AmbiguousWithoutTiebreak { ref candidates, .. }) if candidates.len() == 3
    ));

    let narrowed = strict
        .resolve::<dyn Greeter>(&InjectionPoint::of::<dyn Greeter>().with_qualifier(FORMAL))
        .unwrap();
    assert_eq!(narrowed.get().unwrap().label(), "formal");
}

#[test]
fn test_primary_flag_comes_from_registration() {
    let registry = registry().with(
        "defaultGreeter",
        greeter_object("default", ComponentMetadata::new()),
        true,
    );
    let view = InstanceResolver::new(Arc::new(registry)).view::<dyn Greeter>();
    assert_eq!(view.get().unwrap().label(), "default");
}

/// Registry that ignores the requested capability
struct CarelessRegistry(Vec<RegisteredProvider>);

impl qsel_domain::ProviderRegistry for CarelessRegistry {
    fn providers_of(&self, _: &qsel_domain::CapabilityType) -> Vec<RegisteredProvider> {
        self.0.clone()
    }
}

#[test]
fn test_view_skips_providers_not_bound_to_capability() {
    let registry = CarelessRegistry(vec![
        RegisteredProvider::new("closing", closing_object("closing", false), false),
        RegisteredProvider::new("plain", greeter_object("plain", ComponentMetadata::new()), false),
    ]);
    let resolver = InstanceResolver::new(Arc::new(registry));

    assert_eq!(resolver.view::<dyn Farewell>().names().collect::<Vec<_>>(), vec!["closing"]);
    assert_eq!(resolver.view::<dyn Greeter>().len(), 2);
}

#[test]
fn test_resolver_debug_shows_mode() {
    let debug = format!("{:?}", resolver().with_mode(SelectionMode::Strict));
    assert!(debug.contains("InstanceResolver"));
    assert!(debug.contains("Strict"));
}
