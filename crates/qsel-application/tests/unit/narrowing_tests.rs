//! Tests for qualifier and subtype narrowing

use std::sync::Arc;

use qsel_application::{Candidate, ResolvedView, SelectionMode};
use qsel_domain::{CapabilityType, ComponentMetadata, Qualifier, TypeDescriptor};

use crate::test_utils::{
    ClosingGreeter, FORMAL, Farewell, Greeter, OFFICIAL, TestGreeter, closing_object, greeters,
    labels, plain, tagged,
};

#[test]
fn test_select_by_single_and_multiple_qualifiers() {
    // [A{official}, B{official, formal}]
    let view = greeters(vec![tagged("A", &[OFFICIAL]), tagged("B", &[OFFICIAL, FORMAL])]);

    let official = view.select(&[OFFICIAL]);
    assert_eq!(labels(&official), vec!["A", "B"]);
    assert!(official.is_ambiguous());

    let official_formal = view.select(&[OFFICIAL, FORMAL]);
    assert_eq!(labels(&official_formal), vec!["B"]);
    assert!(!official_formal.is_ambiguous());
    assert!(!official_formal.is_unsatisfied());
}

#[test]
fn test_empty_qualifiers_is_identity() {
    let view = greeters(vec![tagged("A", &[OFFICIAL]), plain("B")]);
    let same = view.select(&[]);
    assert_eq!(labels(&same), labels(&view));
    assert_eq!(same.target(), view.target());
}

#[test]
fn test_chained_select_equals_combined_select() {
    let view = greeters(vec![
        tagged("A", &[OFFICIAL]),
        tagged("B", &[OFFICIAL, FORMAL]),
        tagged("C", &[FORMAL]),
        plain("D"),
    ]);

    let chained = view.select(&[OFFICIAL]).select(&[FORMAL]);
    let combined = view.select(&[OFFICIAL, FORMAL]);
    let reversed = view.select(&[FORMAL]).select(&[OFFICIAL]);

    assert_eq!(labels(&chained), labels(&combined));
    assert_eq!(labels(&reversed), labels(&combined));
    // Narrowing never mutates the parent
    assert_eq!(labels(&view), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_unknown_qualifier_yields_unsatisfied_view() {
    let view = greeters(vec![tagged("A", &[OFFICIAL])]);
    let none = view.select(&[Qualifier::from_static("country-style")]);
    assert!(none.is_unsatisfied());
    assert!(none.get().is_err());
}

#[test]
fn test_qualifier_members_must_match() {
    let view = greeters(vec![
        tagged("primary-db", &[Qualifier::named("primary").unwrap()]),
        tagged("replica-db", &[Qualifier::named("replica").unwrap()]),
    ]);
    let replica = Qualifier::named("replica").unwrap();
    assert_eq!(labels(&view.select(&[replica])), vec!["replica-db"]);
    assert!(view.select(&[Qualifier::from_static("named")]).is_unsatisfied());
}

#[test]
fn test_select_preserves_mode() {
    let view = greeters(vec![tagged("A", &[OFFICIAL]), tagged("B", &[OFFICIAL])])
        .with_mode(SelectionMode::Strict);
    let narrowed = view.select(&[OFFICIAL]);
    assert_eq!(narrowed.mode(), SelectionMode::Strict);
    assert!(narrowed.get().is_err());
    assert_eq!(view.select_as::<TestGreeter>(&[]).mode(), SelectionMode::Strict);
}

fn mixed_view() -> ResolvedView<dyn Greeter> {
    let closing = Candidate::<dyn Greeter>::new("closing", closing_object("closing", false), false)
        .expect("closing greeters are bound to dyn Greeter");
    greeters(vec![plain("plain"), closing, tagged("tagged", &[OFFICIAL])])
}

#[test]
fn test_select_as_concrete_type() {
    let view = mixed_view();

    let plain_only = view.select_as::<TestGreeter>(&[]);
    assert_eq!(plain_only.target(), CapabilityType::of::<TestGreeter>());
    let names: Vec<String> = plain_only.iter().map(|g| g.label.clone()).collect();
    assert_eq!(names, vec!["plain", "tagged"]);

    let closing_only = view.select_as::<ClosingGreeter>(&[]);
    assert_eq!(closing_only.len(), 1);
    assert_eq!(closing_only.get().unwrap().label, "closing");
}

#[test]
fn test_select_as_combines_type_and_qualifiers() {
    let view = mixed_view();
    let narrowed = view.select_as::<TestGreeter>(&[OFFICIAL]);
    assert_eq!(narrowed.names().collect::<Vec<_>>(), vec!["tagged"]);

    let nothing = view.select_as::<ClosingGreeter>(&[OFFICIAL]);
    assert!(nothing.is_unsatisfied());
}

#[test]
fn test_select_as_unrelated_capability_runs_runtime_check() {
    // dyn Farewell has no compile-time relation to dyn Greeter, but the
    // closing greeter was bound to both.
    let view = mixed_view();
    let farewells = view.select_as::<dyn Farewell>(&[]);
    assert_eq!(farewells.len(), 1);
    assert_eq!(farewells.get().unwrap().farewell(), "Goodbye from closing");
    // The narrowed view keeps registry names and primary flags
    assert_eq!(farewells.candidates()[0].name(), "closing");
    assert!(!farewells.candidates()[0].is_primary());

    let strings = view.select_as::<String>(&[]);
    assert!(strings.is_unsatisfied());
}

#[test]
fn test_select_as_same_capability_matches_select() {
    let view = mixed_view();
    let via_select = view.select(&[OFFICIAL]);
    let via_select_as = view.select_as::<dyn Greeter>(&[OFFICIAL]);
    assert_eq!(labels(&via_select), labels(&via_select_as));
}

#[test]
fn test_select_type_uses_only_raw_type() {
    let view = mixed_view();
    let descriptor = TypeDescriptor::<TestGreeter>::new().with_argument::<String>();
    let via_descriptor = view.select_type(&descriptor, &[]);
    let via_type = view.select_as::<TestGreeter>(&[]);

    assert_eq!(via_descriptor.target(), descriptor.raw_type());
    assert_eq!(
        via_descriptor.names().collect::<Vec<_>>(),
        via_type.names().collect::<Vec<_>>()
    );
}

#[test]
fn test_narrowed_views_share_instances_with_parent() {
    let view = greeters(vec![tagged("A", &[OFFICIAL]), plain("B")]);
    let narrowed = view.select(&[OFFICIAL]);
    assert!(Arc::ptr_eq(
        view.candidates()[0].instance(),
        narrowed.candidates()[0].instance()
    ));
}

#[test]
fn test_candidate_rejects_unbound_object() {
    let object = closing_object("closing", false);
    assert!(Candidate::<String>::new("closing", object.clone(), false).is_none());
    let farewell = Candidate::<dyn Farewell>::new("closing", object, true).unwrap();
    assert!(farewell.is_primary());
    assert_eq!(farewell.metadata(), &ComponentMetadata::default());
}
