use scoregen_core::{GenConfig, RegistrySnapshot};
use scoregen_emit::{run_pipeline, TagIndex};

#[test]
fn reinsertion_keeps_first_seen_position() {
    let mut tags = TagIndex::new();
    tags.insert("minecraft:load", "gen:break_hook/install");
    tags.insert("minecraft:load", "gen:place_hook/install");
    tags.insert("minecraft:load", "gen:break_hook/install");
    assert_eq!(
        tags.get("minecraft:load").unwrap(),
        &[
            "gen:break_hook/install".to_string(),
            "gen:place_hook/install".to_string(),
        ]
    );
}

#[test]
fn collections_are_created_lazily() {
    let tags = TagIndex::new();
    assert!(tags.is_empty());
    assert!(tags.get("minecraft:load").is_none());
}

#[test]
fn pipeline_populates_load_and_check_collections() {
    let snapshot = RegistrySnapshot::from_raw(
        "1.19",
        vec!["a:stone".into(), "a:dirt".into()],
        vec!["a:stone".into()],
    )
    .unwrap();
    let config = GenConfig::default();
    let output = run_pipeline(&snapshot, &config).expect("pipeline");

    assert_eq!(output.tags.len(), 2);
    assert_eq!(
        output.tags.get("minecraft:load").unwrap(),
        &[
            "territories_generated:break_hook/install".to_string(),
            "territories_generated:place_hook/install".to_string(),
        ]
    );
    assert_eq!(
        output.tags.get("territories:update_expensive").unwrap(),
        &[
            "territories_generated:break_hook/check".to_string(),
            "territories_generated:place_hook/check".to_string(),
        ]
    );
}

#[test]
fn duplicate_bundle_references_do_not_duplicate_entries() {
    let mut tags = TagIndex::new();
    for _ in 0..2 {
        tags.insert("minecraft:load", "territories_generated:break_hook/install");
        tags.insert(
            "territories:update_expensive",
            "territories_generated:break_hook/check",
        );
    }
    assert_eq!(tags.get("minecraft:load").unwrap().len(), 1);
    assert_eq!(tags.get("territories:update_expensive").unwrap().len(), 1);
}
