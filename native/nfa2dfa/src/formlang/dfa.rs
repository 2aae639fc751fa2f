//! Deterministic Finite Automaton (DFA) produced by subset construction.

use crate::formlang::state::{StateId, StateSet};
use crate::formlang::symbol::SymbolId;
use indexmap::{IndexMap, IndexSet};

/// A Deterministic Finite Automaton whose states are sets of NFA states.
///
/// DFA state `i` is the `i`-th composite state in discovery order. The
/// transition function is partial: a missing `(state, symbol)` entry means
/// the input is rejected, there is no implicit dead state.
#[derive(Debug, Clone, Default)]
pub struct DFA {
    /// Composite states in discovery order; the index is the DFA state id
    composites: IndexSet<StateSet>,
    /// Start state (None until the first state is added)
    start_state: Option<StateId>,
    /// Final (accepting) states
    final_states: StateSet,
    /// Transitions: (source, symbol) -> destination, in insertion order
    transitions: IndexMap<(StateId, SymbolId), StateId>,
    /// Alphabet in the order it was explored
    alphabet: Vec<SymbolId>,
}

impl DFA {
    /// Create a new empty DFA over the given alphabet.
    pub fn new(alphabet: Vec<SymbolId>) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Add a composite state, returning its id and whether it is new.
    ///
    /// Adding a set that is already present returns the existing id.
    pub fn add_state(&mut self, composite: StateSet) -> (StateId, bool) {
        let (index, inserted) = self.composites.insert_full(composite);
        (index as StateId, inserted)
    }

    /// Look up the id of a composite state.
    pub fn state_of(&self, composite: &StateSet) -> Option<StateId> {
        self.composites.get_index_of(composite).map(|i| i as StateId)
    }

    /// The NFA states that make up DFA state `state`.
    pub fn composite(&self, state: StateId) -> Option<&StateSet> {
        self.composites.get_index(state as usize)
    }

    /// Composite states in discovery order.
    pub fn composites(&self) -> impl Iterator<Item = &StateSet> + '_ {
        self.composites.iter()
    }

    pub fn set_start_state(&mut self, state: StateId) {
        self.start_state = Some(state);
    }

    pub fn add_final_state(&mut self, state: StateId) {
        self.final_states.insert(state);
    }

    /// Record a transition, returning the previous target if one was replaced.
    pub fn add_transition(
        &mut self,
        source: StateId,
        symbol: SymbolId,
        destination: StateId,
    ) -> Option<StateId> {
        self.transitions.insert((source, symbol), destination)
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: StateId, symbol: SymbolId) -> Option<StateId> {
        self.transitions.get(&(source, symbol)).copied()
    }

    pub fn num_states(&self) -> StateId {
        self.composites.len() as StateId
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    pub fn start_state(&self) -> Option<StateId> {
        self.start_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(state)
    }

    pub fn alphabet(&self) -> &[SymbolId] {
        &self.alphabet
    }

    /// Get all transitions in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(src, sym), &dst)| (src, sym, dst))
    }
}
