//! Tests for default-instance selection

use qsel_application::{SelectionMode, SelectionReason};
use qsel_domain::{ComponentMetadata, Error};

use crate::test_utils::{Greeter, candidate, chosen, greeters, ordered, plain, primary};

#[test]
fn test_single_candidate_wins_regardless_of_metadata() {
    let view = greeters(vec![plain("only")]);
    assert_eq!(chosen(&view), "only");
    assert_eq!(
        view.default_selection().map(|s| s.reason),
        Some(SelectionReason::Single)
    );

    // Single candidate in strict mode is not a tie
    let strict = greeters(vec![plain("only")]).with_mode(SelectionMode::Strict);
    assert_eq!(chosen(&strict), "only");
}

#[test]
fn test_primary_wins_over_later_higher_priority() {
    // [A(no prio), B(primary), C(prio 500)] -> B
    let view = greeters(vec![
        plain("A"),
        primary("B"),
        candidate("C", false, ComponentMetadata::new().with_priority(500)),
    ]);
    assert_eq!(chosen(&view), "B");
}

#[test]
fn test_primary_wins_over_earlier_higher_priority() {
    let view = greeters(vec![ordered("ranked", 9000), primary("preferred")]);
    assert_eq!(chosen(&view), "preferred");
}

#[test]
fn test_first_of_several_primaries_wins() {
    let view = greeters(vec![plain("A"), primary("B"), primary("C")]);
    assert_eq!(chosen(&view), "B");

    let selection = view.default_selection().unwrap();
    assert_eq!(selection.index, 1);
    assert_eq!(selection.reason, SelectionReason::Primary);
}

#[test]
fn test_highest_priority_tie_keeps_earliest() {
    // [A(1000), B(2000), C(2000)] -> B
    let view = greeters(vec![
        ordered("A", 1000),
        ordered("B", 2000),
        ordered("C", 2000),
    ]);
    assert_eq!(chosen(&view), "B");
    assert_eq!(
        view.default_selection().map(|s| s.reason),
        Some(SelectionReason::Priority(2000))
    );
}

#[test]
fn test_order_and_priority_share_one_scale() {
    let view = greeters(vec![
        ordered("ordered", 10),
        candidate("prioritised", false, ComponentMetadata::new().with_priority(20)),
    ]);
    assert_eq!(chosen(&view), "prioritised");

    let view = greeters(vec![
        candidate("prioritised", false, ComponentMetadata::new().with_priority(30)),
        ordered("ordered", 20),
    ]);
    assert_eq!(chosen(&view), "prioritised");
}

#[test]
fn test_both_signals_on_one_candidate_use_the_larger() {
    let view = greeters(vec![
        candidate(
            "both",
            false,
            ComponentMetadata::new().with_order(5).with_priority(50),
        ),
        ordered("forty", 40),
    ]);
    assert_eq!(chosen(&view), "both");
}

#[test]
fn test_any_ranked_candidate_beats_unranked_ones() {
    let view = greeters(vec![plain("A"), ordered("lowest", i32::MIN), plain("C")]);
    assert_eq!(chosen(&view), "lowest");

    let view = greeters(vec![plain("A"), ordered("negative", -5)]);
    assert_eq!(chosen(&view), "negative");
}

#[test]
fn test_unranked_without_primary_falls_back_to_first() {
    let view = greeters(vec![plain("first"), plain("second"), plain("third")]);
    assert_eq!(chosen(&view), "first");
    assert_eq!(
        view.default_selection().map(|s| s.reason),
        Some(SelectionReason::FirstFallback)
    );
}

#[test]
fn test_strict_mode_rejects_fallback_only() {
    let tied = greeters(vec![plain("first"), plain("second")]);
    match tied.get_with(SelectionMode::Strict) {
        Err(Error::AmbiguousWithoutTiebreak { candidates, .. }) => {
            assert_eq!(candidates, vec!["first".to_string(), "second".to_string()]);
        }
        Err(other) => panic!("Expected AmbiguousWithoutTiebreak, got {other:?}"),
        Ok(greeter) => panic!("Expected an error, got {}", greeter.label()),
    }
    // The same view still falls back under its own (lenient) mode
    assert_eq!(chosen(&tied), "first");

    let ranked = greeters(vec![plain("first"), ordered("ranked", 1)]).with_mode(SelectionMode::Strict);
    assert_eq!(chosen(&ranked), "ranked");

    let preferred = greeters(vec![plain("first"), primary("preferred")]).with_mode(SelectionMode::Strict);
    assert_eq!(chosen(&preferred), "preferred");
}

#[test]
fn test_empty_view_is_unsatisfied() {
    let view = greeters(Vec::new());
    assert!(view.is_unsatisfied());
    assert!(view.default_selection().is_none());
    assert!(matches!(view.get(), Err(Error::Unsatisfied { .. })));
    assert!(matches!(
        view.get_with(SelectionMode::Strict),
        Err(Error::Unsatisfied { .. })
    ));
}

#[test]
fn test_selection_mode_serde() {
    assert_eq!(
        serde_json::to_string(&SelectionMode::Strict).unwrap(),
        "\"strict\""
    );
    let mode: SelectionMode = serde_json::from_str("\"lenient\"").unwrap();
    assert_eq!(mode, SelectionMode::Lenient);
    assert_eq!(SelectionMode::default(), SelectionMode::Lenient);
}
