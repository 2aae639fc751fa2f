//! Shared helpers for the integration tests.
#![allow(dead_code)]

use nfa2dfa::formlang::{DFA, NFA, StateSet, SymbolId};
use proptest::prelude::*;

/// The NFA used throughout the tests: strings over {a, b} containing "ab".
pub const CONTAINS_AB: &str = r#"{
    "alphabet": ["a", "b"],
    "transiction": [
        { "initial": "q0", "symbol": "a", "end": ["q0", "q1"] },
        { "initial": "q0", "symbol": "b", "end": ["q0"] },
        { "initial": "q1", "symbol": "b", "end": ["q2"] },
        { "initial": "q2", "symbol": "a", "end": "null" },
        { "initial": "q2", "symbol": "b", "end": "null" }
    ],
    "initial_state": "q0",
    "end_state": ["q2"]
}"#;

/// Run the NFA by stepping the set of active states.
pub fn nfa_accepts(nfa: &NFA, word: &[SymbolId]) -> bool {
    let mut current = StateSet::singleton(nfa.start_state(), nfa.num_states() as usize);
    for &symbol in word {
        current = nfa.move_on_symbol(&current, symbol);
    }
    current.intersects(nfa.final_states())
}

/// Run the DFA; a missing transition rejects.
pub fn dfa_accepts(dfa: &DFA, word: &[SymbolId]) -> bool {
    let Some(mut state) = dfa.start_state() else {
        return false;
    };
    for &symbol in word {
        match dfa.transition(state, symbol) {
            Some(next) => state = next,
            None => return false,
        }
    }
    dfa.is_final(state)
}

/// Symbol ids for a word given by labels.
pub fn word(nfa: &NFA, labels: &[&str]) -> Vec<SymbolId> {
    labels
        .iter()
        .map(|l| nfa.symbol_id(l).expect("symbol in alphabet"))
        .collect()
}

/// A randomly generated NFA description.
#[derive(Debug, Clone)]
pub struct RandomNfa {
    pub num_states: usize,
    pub num_symbols: usize,
    pub transitions: Vec<(usize, usize, Option<usize>)>,
    pub finals: Vec<bool>,
    pub words: Vec<Vec<SymbolId>>,
}

impl RandomNfa {
    pub fn build(&self) -> NFA {
        let mut builder = NFA::builder()
            .symbols((0..self.num_symbols).map(|s| format!("s{s}")))
            .start_state("q0");
        for &(source, symbol, destination) in &self.transitions {
            builder = match destination {
                Some(dst) => builder.transition(format!("q{source}"), format!("s{symbol}"), format!("q{dst}")),
                None => builder.no_transition(format!("q{source}"), format!("s{symbol}")),
            };
        }
        for (state, _) in self.finals.iter().enumerate().filter(|(_, f)| **f) {
            builder = builder.final_state(format!("q{state}"));
        }
        builder.build().expect("generated NFA is well formed")
    }

    /// The same automaton with its transition list in a different order.
    pub fn shuffled(&self) -> Self {
        let mut other = self.clone();
        other.transitions.reverse();
        other
    }
}

pub fn random_nfa() -> impl Strategy<Value = RandomNfa> {
    (1..=6usize, 1..=3usize).prop_flat_map(|(num_states, num_symbols)| {
        (
            prop::collection::vec(
                (
                    0..num_states,
                    0..num_symbols,
                    prop::option::weighted(0.9, 0..num_states),
                ),
                0..16,
            ),
            prop::collection::vec(any::<bool>(), num_states),
            prop::collection::vec(
                prop::collection::vec(0..num_symbols as SymbolId, 0..10),
                1..12,
            ),
        )
            .prop_map(move |(transitions, finals, words)| RandomNfa {
                num_states,
                num_symbols,
                transitions,
                finals,
                words,
            })
    })
}
