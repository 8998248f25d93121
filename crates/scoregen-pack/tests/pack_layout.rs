use std::fs;

use scoregen_core::{GenConfig, RegistrySnapshot};
use scoregen_emit::run_pipeline;
use scoregen_map::index_from_json;
use scoregen_pack::{FunctionTag, PackLayout, PackWriter};

fn generated() -> (scoregen_emit::GenerationOutput, GenConfig) {
    let snapshot = RegistrySnapshot::from_raw(
        "1.19",
        vec!["a:stone".into(), "a:dirt".into()],
        vec!["a:stone".into()],
    )
    .unwrap();
    let config = GenConfig::default();
    let output = run_pipeline(&snapshot, &config).expect("pipeline");
    (output, config)
}

#[test]
fn writes_the_expected_tree() {
    let (output, config) = generated();
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = PackWriter::new(dir.path());
    let report = writer.write(&output, &config).expect("write");

    assert_eq!(report.functions, 6);
    assert_eq!(report.tags, 2);

    for rel in [
        "pack.mcmeta",
        "data/territories_generated/functions/break_hook/install.mcfunction",
        "data/territories_generated/functions/break_hook/check.mcfunction",
        "data/territories_generated/functions/break_hook/uninstall.mcfunction",
        "data/territories_generated/functions/place_hook/install.mcfunction",
        "data/territories_generated/functions/place_hook/check.mcfunction",
        "data/territories_generated/functions/place_hook/uninstall.mcfunction",
        "data/minecraft/tags/functions/load.json",
        "data/territories/tags/functions/update_expensive.json",
        "mappings/unified.json",
        "mappings/provenance.json",
    ] {
        assert!(dir.path().join(rel).is_file(), "missing {rel}");
    }
}

#[test]
fn function_files_hold_the_bundle_texts() {
    let (output, config) = generated();
    let dir = tempfile::tempdir().expect("tempdir");
    PackWriter::new(dir.path()).write(&output, &config).expect("write");

    let install = fs::read_to_string(
        dir.path()
            .join("data/territories_generated/functions/break_hook/install.mcfunction"),
    )
    .unwrap();
    assert_eq!(install, output.bundles[0].install);
}

#[test]
fn tag_declarations_roundtrip() {
    let (output, config) = generated();
    let dir = tempfile::tempdir().expect("tempdir");
    PackWriter::new(dir.path()).write(&output, &config).expect("write");

    let raw = fs::read_to_string(dir.path().join("data/minecraft/tags/functions/load.json")).unwrap();
    let tag: FunctionTag = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        tag.values,
        vec![
            "territories_generated:break_hook/install".to_string(),
            "territories_generated:place_hook/install".to_string(),
        ]
    );
}

#[test]
fn mapping_index_artifact_is_loadable() {
    let (output, config) = generated();
    let dir = tempfile::tempdir().expect("tempdir");
    PackWriter::new(dir.path()).write(&output, &config).expect("write");

    let raw = fs::read_to_string(dir.path().join("mappings/unified.json")).unwrap();
    let restored = index_from_json(&raw).expect("parse");
    assert_eq!(restored, output.index);
}

#[test]
fn mcmeta_carries_the_configured_pack_format() {
    let (output, config) = generated();
    let dir = tempfile::tempdir().expect("tempdir");
    PackWriter::new(dir.path()).write(&output, &config).expect("write");

    let raw = fs::read_to_string(dir.path().join("pack.mcmeta")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["pack"]["pack_format"], 10);
}

#[test]
fn unnamespaced_tag_collection_is_rejected() {
    let layout = PackLayout::new("/tmp/unused");
    let err = layout.tag_path("load").expect_err("tag without namespace");
    assert_eq!(err.info().code, "pack-tag-name");
}
