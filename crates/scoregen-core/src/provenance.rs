//! Generation provenance attached to emitted mapping artifacts.
//!
//! Provenance carries only data derived from the snapshot itself, never the
//! wall clock: regenerating from an identical snapshot must reproduce every
//! artifact byte-for-byte. Timestamps belong to the sync layer's cache.

use serde::{Deserialize, Serialize};

/// Schema version of the serialized mapping index payload.
pub const MAPPING_SCHEMA: u32 = 1;

/// Versioned record describing one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenProvenance {
    /// Schema version of the mapping artifacts this record accompanies.
    pub schema: u32,
    /// Upstream game version the registries were extracted from.
    pub game_version: String,
    /// Stable hash of the full registry snapshot.
    pub snapshot_hash: String,
    /// Number of mapping entries produced by the run.
    pub entries: usize,
    /// Generator identification (name and crate version).
    pub generator: String,
}
