pub mod generate;
pub mod index;
pub mod sync;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use scoregen_core::GenConfig;
use scoregen_sync::SyncCache;

/// Loads the generator configuration: an explicit `--config` path, a
/// `scoregen.toml` in the working directory, or the shipped defaults.
pub fn load_config(path: Option<&Path>) -> Result<GenConfig, Box<dyn Error>> {
    let fallback = Path::new("scoregen.toml");
    let path = match path {
        Some(path) => path,
        None if fallback.is_file() => fallback,
        None => return Ok(GenConfig::default()),
    };
    let text = fs::read_to_string(path)?;
    Ok(GenConfig::from_toml_str(&text)?)
}

/// Resolves the version the local dumps belong to: the sync cache when one
/// exists (it records what was actually extracted), the pinned version
/// otherwise.
pub fn resolve_version(config: &GenConfig) -> Result<String, Box<dyn Error>> {
    if let Some(cache) = SyncCache::load(&scoregen_sync::cache_path(&config.upstream))? {
        return Ok(cache.version);
    }
    Ok(config
        .upstream
        .version
        .clone()
        .unwrap_or_else(|| "unknown".into()))
}

/// Registry dumps directory: an explicit override or the sync layer's
/// discoverable folder.
pub fn registries_dir(override_path: Option<&Path>, config: &GenConfig) -> PathBuf {
    match override_path {
        Some(path) => path.to_path_buf(),
        None => scoregen_sync::registries_dir(&config.upstream),
    }
}
