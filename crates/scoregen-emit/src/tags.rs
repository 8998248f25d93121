use std::collections::BTreeMap;

/// Named, ordered, de-duplicated collections of artifact references.
///
/// Insertion is idempotent: re-adding a reference keeps its first-seen
/// position. Collections are created lazily on first insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagIndex {
    collections: BTreeMap<String, Vec<String>>,
}

impl TagIndex {
    /// Creates an empty tag index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reference to a collection unless it is already present.
    pub fn insert(&mut self, collection: &str, reference: impl Into<String>) {
        let refs = self.collections.entry(collection.to_string()).or_default();
        let reference = reference.into();
        if !refs.contains(&reference) {
            refs.push(reference);
        }
    }

    /// References of one collection, in insertion order.
    pub fn get(&self, collection: &str) -> Option<&[String]> {
        self.collections.get(collection).map(Vec::as_slice)
    }

    /// All collections in name order.
    pub fn collections(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.collections
            .iter()
            .map(|(name, refs)| (name.as_str(), refs.as_slice()))
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true when no collection has been populated.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
