use scoregen_core::config::GenConfig;

#[test]
fn empty_toml_yields_shipped_defaults() {
    let config = GenConfig::from_toml_str("").expect("defaults");
    assert_eq!(config.scoreboard.prefix, "terr.");
    assert_eq!(config.pack.generated_namespace, "territories_generated");
    assert_eq!(config.pack.pack_format, 10);
    assert_eq!(config.tags.load, "minecraft:load");
    assert_eq!(config.tags.check, "territories:update_expensive");
    assert_eq!(config.upstream.cache_ttl_secs, 3600);
    assert_eq!(config.upstream.version.as_deref(), Some("1.19"));
    assert!(config.templates.is_empty());
}

#[test]
fn partial_toml_overrides_merge_with_defaults() {
    let config = GenConfig::from_toml_str(
        r#"
[scoreboard]
prefix = "claim."

[upstream]
version = "1.20"

[templates.break]
install = "scoreboard objectives add {obj} {criterion}"
"#,
    )
    .expect("partial config");
    assert_eq!(config.scoreboard.prefix, "claim.");
    assert_eq!(config.upstream.version.as_deref(), Some("1.20"));
    assert_eq!(config.pack.pack_format, 10);
    let brk = config.templates.get("break").expect("break override");
    assert!(brk.install.is_some());
    assert!(brk.check_trigger.is_none());
}

#[test]
fn unknown_top_level_key_is_rejected() {
    let err = GenConfig::from_toml_str("[unknown]\nkey = 1\n").expect_err("unknown table");
    assert_eq!(err.info().code, "config-parse");
}
