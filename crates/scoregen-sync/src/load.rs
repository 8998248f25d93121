use std::fs;
use std::path::Path;

use serde::Deserialize;

use scoregen_core::errors::{ErrorInfo, ScoregenError};
use scoregen_core::RegistrySnapshot;

#[derive(Debug, Deserialize)]
struct RegistryDump {
    values: Vec<String>,
}

/// Reads the block and item registry dumps into a validated snapshot.
pub fn load_snapshot(
    registries_dir: &Path,
    version: &str,
) -> Result<RegistrySnapshot, ScoregenError> {
    let surfaces = read_dump(&registries_dir.join("block").join("data.json"))?;
    let items = read_dump(&registries_dir.join("item").join("data.json"))?;
    tracing::debug!(
        surfaces = surfaces.len(),
        items = items.len(),
        %version,
        "loaded registry dumps"
    );
    RegistrySnapshot::from_raw(version, surfaces, items)
}

fn read_dump(path: &Path) -> Result<Vec<String>, ScoregenError> {
    let bytes = fs::read(path).map_err(|err| {
        ScoregenError::Snapshot(
            ErrorInfo::new("snapshot-read", "failed to read registry dump")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    let dump: RegistryDump = serde_json::from_slice(&bytes).map_err(|err| {
        ScoregenError::Snapshot(
            ErrorInfo::new("snapshot-parse", "failed to parse registry dump")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    Ok(dump.values)
}
