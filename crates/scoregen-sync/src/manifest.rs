use serde::Deserialize;

use scoregen_core::errors::{ErrorInfo, ScoregenError};

/// Upstream version manifest; unknown fields are ignored so manifest schema
/// additions do not break the sync.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionManifest {
    /// Latest release and snapshot pointers.
    pub latest: LatestVersions,
    /// Known versions, newest first.
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
}

/// The manifest's `latest` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatestVersions {
    /// Most recent release version id.
    pub release: String,
    /// Most recent snapshot version id.
    pub snapshot: String,
}

/// One version row of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionEntry {
    /// Version id (`1.19`, `22w11a`, …).
    pub id: String,
    /// Version channel (`release` or `snapshot`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Downloads and parses the version manifest.
pub fn fetch_manifest(url: &str) -> Result<VersionManifest, ScoregenError> {
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|err| {
            ScoregenError::Sync(
                ErrorInfo::new("sync-fetch", "failed to download version manifest")
                    .with_context("url", url)
                    .with_hint(err.to_string()),
            )
        })?;
    response.json().map_err(|err| {
        ScoregenError::Sync(
            ErrorInfo::new("sync-parse", "failed to parse version manifest")
                .with_context("url", url)
                .with_hint(err.to_string()),
        )
    })
}

/// Resolves the target version: the pinned version when configured, the
/// latest release otherwise.
pub fn resolve_target(manifest: &VersionManifest, pinned: Option<&str>) -> String {
    match pinned {
        Some(version) => version.to_string(),
        None => manifest.latest.release.clone(),
    }
}
