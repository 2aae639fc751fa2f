//! Index of NFA transitions keyed by (source, symbol).

use crate::formlang::state::{StateId, StateSet};
use crate::formlang::symbol::SymbolId;
use std::collections::HashMap;

/// One entry of an NFA's transition list, as declared.
///
/// A `destination` of `None` is the "no destination" marker: the pair is
/// declared but contributes no target state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTransition {
    pub source: StateId,
    pub symbol: SymbolId,
    pub destination: Option<StateId>,
}

/// Transitions grouped as `(source, symbol) -> set of destinations`.
///
/// Entries sharing a `(source, symbol)` pair are merged by union. Lookups
/// of pairs that were never declared yield the empty set.
#[derive(Debug, Clone, Default)]
pub struct TransitionIndex {
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Capacity hint for the destination sets (number of NFA states).
    capacity: usize,
}

impl TransitionIndex {
    /// Create an empty index sized for `capacity` NFA states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: HashMap::new(),
            capacity,
        }
    }

    /// Build the index from a raw transition list.
    pub fn build<'a, I>(raw: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = &'a RawTransition>,
    {
        let mut index = Self::with_capacity(capacity);
        for transition in raw {
            index.insert(*transition);
        }
        index
    }

    /// Merge one raw transition into the index.
    pub fn insert(&mut self, transition: RawTransition) {
        let capacity = self.capacity;
        let targets = self
            .transitions
            .entry((transition.source, transition.symbol))
            .or_insert_with(|| StateSet::with_capacity(capacity));
        if let Some(destination) = transition.destination {
            targets.insert(destination);
        }
    }

    /// Destinations of `source` on `symbol`, if the pair has any entry.
    pub fn get(&self, source: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(source, symbol))
    }

    /// Destinations of `source` on `symbol`; empty when undeclared.
    pub fn targets(&self, source: StateId, symbol: SymbolId) -> StateSet {
        self.get(source, symbol)
            .cloned()
            .unwrap_or_else(|| StateSet::with_capacity(self.capacity))
    }

    /// Union of the destinations of every state in `states` on `symbol`.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        let mut reached = StateSet::with_capacity(self.capacity);

        for state in states.iter() {
            if let Some(destinations) = self.get(state, symbol) {
                reached.union_with(destinations);
            }
        }

        reached
    }

    /// Number of declared `(source, symbol)` pairs.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
