//! Capability partitioning, handle assignment, and hook table construction.
//!
//! Every function here is pure: ordering flows from the snapshot's surface
//! sequence into handle space and from handle space into the hook tables, so
//! identical snapshots always reproduce identical indices.

mod hash;
mod hooks;
mod index;
mod partition;
mod serde;

pub use hash::{snapshot_hash, stable_hash_string};
pub use hooks::HookTable;
pub use index::MappingIndex;
pub use partition::{partition, CapabilityRow};
pub use crate::serde::{from_json_slice, index_from_json, index_to_json, to_canonical_json_bytes};
