use serde::{Deserialize, Serialize};

use scoregen_core::{Handle, MappingEntry, RegistrySnapshot};

use crate::partition::{partition, CapabilityRow};

/// The full identifier-to-handle index for one generation run.
///
/// Entries are stored in handle order; handles are dense, so `entries[h]`
/// always holds the entry for handle `h`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MappingIndex {
    entries: Vec<MappingEntry>,
}

impl MappingIndex {
    /// Assigns handles `0, 1, 2, …` over the partitioned rows.
    pub fn assign(rows: Vec<CapabilityRow>) -> Self {
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(idx, (identifier, actions))| MappingEntry {
                handle: Handle::from_raw(idx as u32),
                identifier,
                actions,
            })
            .collect();
        Self { entries }
    }

    /// Partitions and assigns a snapshot in one step.
    pub fn from_snapshot(snapshot: &RegistrySnapshot) -> Self {
        Self::assign(partition(&snapshot.surfaces, &snapshot.items))
    }

    /// Returns all entries in handle order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Looks up the entry for a handle.
    pub fn entry(&self, handle: Handle) -> Option<&MappingEntry> {
        self.entries.get(handle.as_raw() as usize)
    }

    /// Number of mapped identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no identifiers were mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
