//! Unit tests for component metadata

use qsel_domain::{ComponentMetadata, Qualifier};

#[test]
fn test_ranking_signals_order_then_priority() {
    let metadata = ComponentMetadata::new().with_order(10).with_priority(5);
    assert_eq!(metadata.ranking_signals().collect::<Vec<_>>(), vec![10, 5]);
    assert!(metadata.is_ranked());
}

#[test]
fn test_unranked_metadata() {
    let metadata = ComponentMetadata::new().with_tag(Qualifier::from_static("official"));
    assert_eq!(metadata.ranking_signals().count(), 0);
    assert!(!metadata.is_ranked());
    assert_eq!(metadata.tags.len(), 1);
}

#[test]
fn test_metadata_with_member_tags_survives_serde() {
    let metadata = ComponentMetadata::new()
        .with_tag(Qualifier::named("backup-1").unwrap())
        .with_tag(Qualifier::from_static("official"))
        .with_order(3);

    let json = serde_json::to_string(&metadata).unwrap();
    let back: ComponentMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back, metadata);
}
