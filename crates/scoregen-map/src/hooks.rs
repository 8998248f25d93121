use std::collections::BTreeMap;

use scoregen_core::{ActionKind, Handle};

use crate::index::MappingIndex;

/// Per-action ordered work lists of handles requiring a generated hook.
///
/// Built as an explicit value from the mapping index; the order within each
/// action is the global handle order, which downstream emission depends on
/// for reproducible line ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HookTable {
    table: BTreeMap<ActionKind, Vec<Handle>>,
}

impl HookTable {
    /// Collects the handles supporting each action kind.
    pub fn build(index: &MappingIndex) -> Self {
        let mut table: BTreeMap<ActionKind, Vec<Handle>> = BTreeMap::new();
        for entry in index.entries() {
            for kind in &entry.actions {
                table.entry(*kind).or_default().push(entry.handle);
            }
        }
        Self { table }
    }

    /// Handles supporting the given action, in global handle order.
    pub fn handles(&self, kind: ActionKind) -> &[Handle] {
        self.table.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Action kinds with at least one hook, in canonical order.
    pub fn kinds(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.table.keys().copied()
    }

    /// Returns true when no action has any hooks.
    pub fn is_empty(&self) -> bool {
        self.table.values().all(Vec::is_empty)
    }
}
