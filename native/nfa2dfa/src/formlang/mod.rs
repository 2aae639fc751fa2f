//! Finite automata and the NFA to DFA subset construction.
//!
//! This module provides:
//! - an immutable NFA model with a validating builder
//! - the transition index the construction reads from
//! - subset construction (NFA to DFA conversion)
//! - canonical labels for the resulting composite states

mod canonical;
mod dfa;
mod interner;
mod nfa;
mod state;
mod subset_construction;
mod symbol;
mod transition_index;

pub use canonical::{LabeledDFA, SEPARATOR, canonical_label};
pub use dfa::DFA;
pub use interner::Interner;
pub use nfa::{NFA, NFABuilder};
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::SymbolId;
pub use transition_index::{RawTransition, TransitionIndex};
