use scoregen_core::config::GenConfig;
use scoregen_core::RegistrySnapshot;
use scoregen_emit::{run_pipeline, GENERATED_BANNER};

fn snapshot() -> RegistrySnapshot {
    RegistrySnapshot::from_raw("1.19", vec!["a:stone".into()], vec!["a:stone".into()]).unwrap()
}

#[test]
fn configured_override_replaces_the_default_line() {
    let config = GenConfig::from_toml_str(
        r#"
[templates.break]
install = "scoreboard objectives add {obj} {criterion} [\"hook\"]"
"#,
    )
    .unwrap();
    let output = run_pipeline(&snapshot(), &config).expect("pipeline");
    let break_install = &output.bundles[0].install;
    assert!(break_install.contains("terr.break.0 minecraft.mined:a.stone [\"hook\"]"));
    // The place bundle keeps its defaults.
    assert!(output.bundles[1]
        .install
        .contains("scoreboard objectives add terr.place.0 minecraft.used:a.stone"));
}

#[test]
fn unknown_placeholder_fails_before_any_artifact_is_built() {
    let config = GenConfig::from_toml_str(
        r#"
[templates.place]
uninstall = "scoreboard objectives remove {objective}"
"#,
    )
    .unwrap();
    let err = run_pipeline(&snapshot(), &config).expect_err("placeholder");
    assert_eq!(err.info().code, "template-placeholder");
    assert_eq!(
        err.info().context.get("placeholder").map(String::as_str),
        Some("objective")
    );
}

#[test]
fn selector_braces_are_not_mistaken_for_placeholders() {
    // The default check templates contain literal `{...=1..}` selector text.
    let output = run_pipeline(&snapshot(), &GenConfig::default()).expect("pipeline");
    let check = output.bundles[0]
        .check
        .strip_prefix(GENERATED_BANNER)
        .unwrap();
    assert!(check.contains("@a[scores={terr.break.0=1..}]"));
}
