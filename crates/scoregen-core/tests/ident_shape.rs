use scoregen_core::{Identifier, RegistrySnapshot};

#[test]
fn accepts_well_formed_identifiers() {
    for raw in [
        "minecraft:stone",
        "minecraft:deepslate_gold_ore",
        "mod_pack.extras:block/ore",
        "a:b",
    ] {
        let id = Identifier::parse(raw).expect(raw);
        assert_eq!(id.as_str(), raw);
    }
}

#[test]
fn rejects_malformed_identifiers() {
    for raw in [
        "stone",
        ":stone",
        "minecraft:",
        "Minecraft:stone",
        "minecraft:Stone",
        "minecraft stone",
        "minecraft:sto ne",
    ] {
        let err = Identifier::parse(raw).expect_err(raw);
        assert_eq!(err.info().code, "snapshot-ident");
    }
}

#[test]
fn stat_key_maps_separator_to_dot() {
    let id = Identifier::parse("minecraft:stone").unwrap();
    assert_eq!(id.stat_key(), "minecraft.stone");
}

#[test]
fn identifier_deserialization_validates() {
    let ok: Result<Identifier, _> = serde_json::from_str("\"minecraft:stone\"");
    assert!(ok.is_ok());
    let bad: Result<Identifier, _> = serde_json::from_str("\"not namespaced\"");
    assert!(bad.is_err());
}

#[test]
fn snapshot_fails_fast_on_first_malformed_token() {
    let err = RegistrySnapshot::from_raw(
        "1.19",
        vec!["a:stone".into(), "broken".into()],
        vec!["a:stone".into()],
    )
    .expect_err("malformed surface token");
    assert_eq!(err.info().code, "snapshot-ident");
    assert_eq!(err.info().context.get("token").map(String::as_str), Some("broken"));
}

#[test]
fn empty_snapshot_is_valid() {
    let snapshot = RegistrySnapshot::from_raw("1.19", Vec::new(), Vec::new()).unwrap();
    assert!(snapshot.is_empty());
}
