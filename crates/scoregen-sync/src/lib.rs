//! Upstream sync layer: keeps the local registry dumps fresh and loads them
//! into validated snapshots for the core pipeline.
//!
//! Everything here is I/O sequencing around the deterministic core. Network
//! retry policy, extractor sandboxing, and cache corruption recovery are
//! deliberately out of scope: failures abort the run with a coded error.

mod cache;
mod extract;
mod load;
mod manifest;

pub use cache::SyncCache;
pub use extract::{clean_stale_output, export_registries, run_extractor};
pub use load::load_snapshot;
pub use manifest::{fetch_manifest, resolve_target, LatestVersions, VersionEntry, VersionManifest};

use std::path::PathBuf;

use chrono::Utc;

use scoregen_core::config::UpstreamConfig;
use scoregen_core::errors::ScoregenError;

/// Result of a sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The cache was fresh; nothing was fetched.
    Fresh,
    /// The manifest was fetched but local data already matches the target
    /// version; the cache timestamp was renewed.
    UpToDate {
        /// Resolved target version.
        version: String,
    },
    /// The extractor ran and the registries folder was rebuilt.
    Extracted {
        /// Resolved target version.
        version: String,
    },
}

/// Location of the freshness cache file.
pub fn cache_path(upstream: &UpstreamConfig) -> PathBuf {
    upstream.work_dir.join("caching.json")
}

/// Location of the exported registry dumps.
pub fn registries_dir(upstream: &UpstreamConfig) -> PathBuf {
    upstream.work_dir.join("registries")
}

/// Brings the local registry dumps up to date with the configured upstream.
///
/// A fresh cache short-circuits the whole pass. Otherwise the version
/// manifest decides whether the extractor has to run; either way the cache
/// is rewritten with the resolved version and the current time.
pub fn refresh(upstream: &UpstreamConfig) -> Result<SyncOutcome, ScoregenError> {
    let cache_file = cache_path(upstream);
    let now = Utc::now().timestamp();
    if let Some(cache) = SyncCache::load(&cache_file)? {
        if cache.is_fresh(now, upstream.cache_ttl_secs) {
            tracing::info!(version = %cache.version, "sync cache is fresh, skipping refresh");
            return Ok(SyncOutcome::Fresh);
        }
    }

    tracing::info!(url = %upstream.manifest_url, "downloading version manifest");
    let manifest = fetch_manifest(&upstream.manifest_url)?;
    let version = resolve_target(&manifest, upstream.version.as_deref());

    if let Some(cache) = SyncCache::load(&cache_file)? {
        if cache.version == version {
            tracing::info!(%version, "registry data is up to date");
            SyncCache {
                version: version.clone(),
                refreshed_at: now,
            }
            .store(&cache_file)?;
            return Ok(SyncOutcome::UpToDate { version });
        }
    }

    tracing::info!(%version, "registry data is out of date, running extractor");
    clean_stale_output(&upstream.work_dir)?;
    run_extractor(&upstream.extract_command, &version)?;
    export_registries(&upstream.work_dir, &version)?;
    SyncCache {
        version: version.clone(),
        refreshed_at: now,
    }
    .store(&cache_file)?;
    Ok(SyncOutcome::Extracted { version })
}
