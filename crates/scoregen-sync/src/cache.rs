use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use scoregen_core::errors::{ErrorInfo, ScoregenError};

/// On-disk freshness cache gating the sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCache {
    /// Version the registries folder was last extracted for.
    pub version: String,
    /// Unix timestamp of the last successful sync pass.
    pub refreshed_at: i64,
}

impl SyncCache {
    /// Loads the cache file. A missing or unreadable file counts as no cache.
    pub fn load(path: &Path) -> Result<Option<Self>, ScoregenError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ScoregenError::Sync(
                    ErrorInfo::new("sync-cache", err.to_string())
                        .with_context("path", path.display().to_string()),
                ))
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(cache) => Ok(Some(cache)),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "ignoring unreadable sync cache"
                );
                Ok(None)
            }
        }
    }

    /// Persists the cache file, creating the work directory if needed.
    pub fn store(&self, path: &Path) -> Result<(), ScoregenError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                ScoregenError::Sync(
                    ErrorInfo::new("sync-cache", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let bytes = serde_json::to_vec_pretty(self).map_err(|err| {
            ScoregenError::Sync(ErrorInfo::new("sync-cache", err.to_string()))
        })?;
        fs::write(path, bytes).map_err(|err| {
            ScoregenError::Sync(
                ErrorInfo::new("sync-cache", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Whether the cache is still within the freshness window.
    pub fn is_fresh(&self, now: i64, ttl_secs: u64) -> bool {
        now - self.refreshed_at < ttl_secs as i64
    }
}
