use scoregen_core::errors::{ErrorInfo, ScoregenError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("token", "a:stone")
        .with_context("reason", "example")
}

#[test]
fn snapshot_error_surface() {
    let err = ScoregenError::Snapshot(sample_info("snapshot-ident", "malformed identifier"));
    assert_eq!(err.info().code, "snapshot-ident");
    assert!(err.info().context.contains_key("token"));
}

#[test]
fn naming_error_surface() {
    let err = ScoregenError::Naming(sample_info("naming-collision", "duplicate objective"));
    assert_eq!(err.info().code, "naming-collision");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn template_error_surface() {
    let err = ScoregenError::Template(sample_info("template-placeholder", "unknown placeholder"));
    assert_eq!(err.info().code, "template-placeholder");
}

#[test]
fn pack_error_surface() {
    let err = ScoregenError::Pack(sample_info("pack-io", "write failed"));
    assert_eq!(err.info().code, "pack-io");
}

#[test]
fn sync_error_surface() {
    let err = ScoregenError::Sync(sample_info("sync-fetch", "manifest unavailable"));
    assert_eq!(err.info().code, "sync-fetch");
}

#[test]
fn error_display_includes_context_and_hint() {
    let err = ScoregenError::Config(
        ErrorInfo::new("config-parse", "bad toml").with_hint("check the templates table"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("config-parse"));
    assert!(rendered.contains("check the templates table"));
}
