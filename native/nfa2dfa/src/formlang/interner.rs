//! Label interning for states and symbols.

use indexmap::IndexSet;

/// Bidirectional mapping between textual labels and dense u32 ids.
///
/// Ids are handed out in first-seen order, so iteration order is
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interner {
    labels: IndexSet<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `label`, assigning the next free id if it is new.
    pub fn intern(&mut self, label: &str) -> u32 {
        if let Some(id) = self.get(label) {
            return id;
        }
        let (id, _) = self.labels.insert_full(label.to_owned());
        id as u32
    }

    /// Look up the id of an already interned label.
    pub fn get(&self, label: &str) -> Option<u32> {
        self.labels.get_index_of(label).map(|i| i as u32)
    }

    /// Resolve an id back to its label.
    pub fn resolve(&self, id: u32) -> Option<&str> {
        self.labels.get_index(id as usize).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (i as u32, label.as_str()))
    }
}
