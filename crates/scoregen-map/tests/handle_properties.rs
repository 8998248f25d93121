use std::collections::BTreeSet;

use proptest::prelude::*;
use scoregen_core::{ActionKind, Identifier};
use scoregen_map::{partition, HookTable, MappingIndex};

fn to_ids(names: &BTreeSet<String>) -> Vec<Identifier> {
    names
        .iter()
        .map(|name| Identifier::parse(format!("t:{name}")).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn handles_are_dense_and_partition_ordered(
        surface_names in prop::collection::btree_set("[a-z]{1,8}", 0..24),
        item_names in prop::collection::btree_set("[a-z]{1,8}", 0..24),
    ) {
        let surfaces = to_ids(&surface_names);
        let items = to_ids(&item_names);
        let index = MappingIndex::assign(partition(&surfaces, &items));

        prop_assert_eq!(index.len(), surfaces.len());
        let item_set: BTreeSet<&Identifier> = items.iter().collect();
        let mut seen = BTreeSet::new();
        let mut surface_only_started = false;
        for (idx, entry) in index.entries().iter().enumerate() {
            prop_assert_eq!(entry.handle.as_raw() as usize, idx);
            prop_assert!(seen.insert(entry.identifier.clone()));
            prop_assert!(entry.supports(ActionKind::Break));
            if item_set.contains(&entry.identifier) {
                prop_assert!(entry.supports(ActionKind::Place));
                prop_assert!(!surface_only_started);
            } else {
                prop_assert!(!entry.supports(ActionKind::Place));
                surface_only_started = true;
            }
        }

        let table = HookTable::build(&index);
        for kind in ActionKind::ALL {
            let handles = table.handles(kind);
            prop_assert!(handles.windows(2).all(|w| w[0].as_raw() < w[1].as_raw()));
            for handle in handles {
                prop_assert!(index.entry(*handle).unwrap().supports(kind));
            }
        }
        prop_assert_eq!(table.handles(ActionKind::Break).len(), surfaces.len());
    }

    #[test]
    fn assignment_is_reproducible(
        surface_names in prop::collection::btree_set("[a-z]{1,8}", 0..16),
        item_names in prop::collection::btree_set("[a-z]{1,8}", 0..16),
    ) {
        let surfaces = to_ids(&surface_names);
        let items = to_ids(&item_names);
        let first = MappingIndex::assign(partition(&surfaces, &items));
        let second = MappingIndex::assign(partition(&surfaces, &items));
        prop_assert_eq!(first, second);
    }
}
