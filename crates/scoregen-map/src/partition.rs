use std::collections::BTreeSet;

use scoregen_core::{ActionKind, Identifier};

/// One partitioned identifier with the actions that apply to it.
pub type CapabilityRow = (Identifier, BTreeSet<ActionKind>);

/// Splits the surface registry into capability classes.
///
/// Identifiers present in both registries come first with `{break, place}`,
/// followed by surface-only identifiers with `{break}`. Within each class
/// the surface registry's own order is preserved, so the dual-capability
/// block always occupies handles `0..k` independently of the remainder.
/// Item-only identifiers have no observable world event and are skipped.
pub fn partition(surfaces: &[Identifier], items: &[Identifier]) -> Vec<CapabilityRow> {
    let item_set: BTreeSet<&Identifier> = items.iter().collect();
    let mut rows = Vec::with_capacity(surfaces.len());
    for id in surfaces {
        if item_set.contains(id) {
            rows.push((
                id.clone(),
                BTreeSet::from([ActionKind::Break, ActionKind::Place]),
            ));
        }
    }
    for id in surfaces {
        if !item_set.contains(id) {
            rows.push((id.clone(), BTreeSet::from([ActionKind::Break])));
        }
    }
    rows
}
