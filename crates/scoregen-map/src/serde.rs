use serde::de::DeserializeOwned;
use serde::Serialize;

use scoregen_core::errors::{ErrorInfo, ScoregenError};

use crate::index::MappingIndex;

fn map_err(err: serde_json::Error, code: &str) -> ScoregenError {
    ScoregenError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a value to canonical JSON bytes: object keys sorted, compact
/// separators. Canonical bytes are the hashing and comparison currency for
/// every artifact.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, ScoregenError> {
    let value = serde_json::to_value(value).map_err(|err| map_err(err, "serde-canonical"))?;
    serde_json::to_vec(&value).map_err(|err| map_err(err, "serde-canonical"))
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ScoregenError> {
    serde_json::from_slice(bytes).map_err(|err| map_err(err, "serde-parse"))
}

/// Serialises the mapping index to its discoverable artifact form.
pub fn index_to_json(index: &MappingIndex) -> Result<String, ScoregenError> {
    let value = serde_json::to_value(index).map_err(|err| map_err(err, "index-serialize"))?;
    serde_json::to_string_pretty(&value).map_err(|err| map_err(err, "index-serialize"))
}

/// Restores a mapping index from its artifact form.
pub fn index_from_json(json: &str) -> Result<MappingIndex, ScoregenError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "index-deserialize"))
}
