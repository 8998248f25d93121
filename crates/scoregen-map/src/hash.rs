use serde::Serialize;
use sha2::{Digest, Sha256};

use scoregen_core::errors::ScoregenError;
use scoregen_core::RegistrySnapshot;

use crate::serde::to_canonical_json_bytes;

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, ScoregenError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}

/// Canonical hash of a registry snapshot (version and both sequences).
pub fn snapshot_hash(snapshot: &RegistrySnapshot) -> Result<String, ScoregenError> {
    stable_hash_string(snapshot)
}
