//! Canonical labels for composite states.
//!
//! A composite state is named by the labels of its NFA states, sorted and
//! joined with [`SEPARATOR`]. The label is only used for output: identity
//! inside the construction is the [`StateSet`] itself.

use crate::error::ConversionError;
use crate::formlang::dfa::DFA;
use crate::formlang::interner::Interner;
use crate::formlang::nfa::NFA;
use crate::formlang::state::{StateId, StateSet};
use crate::formlang::symbol::SymbolId;
use log::warn;
use std::collections::HashMap;

/// Separator placed between member labels.
pub const SEPARATOR: &str = ",";

/// Member labels of `set`, sorted.
fn sorted_members<'a>(set: &StateSet, states: &'a Interner) -> Vec<&'a str> {
    let mut members: Vec<&str> = set.iter().filter_map(|s| states.resolve(s)).collect();
    members.sort_unstable();
    members
}

/// The canonical label of `set`. The empty set maps to the empty string.
pub fn canonical_label(set: &StateSet, states: &Interner) -> String {
    sorted_members(set, states).join(SEPARATOR)
}

/// A DFA together with the canonical label of every state.
#[derive(Debug, Clone)]
pub struct LabeledDFA {
    dfa: DFA,
    state_labels: Vec<String>,
    symbol_labels: Vec<String>,
}

impl LabeledDFA {
    /// Label every composite state of `dfa`, built from `nfa`.
    ///
    /// Fails if two distinct composite states end up with the same label,
    /// which can only happen when an NFA state label contains the
    /// separator.
    pub fn new(nfa: &NFA, dfa: DFA) -> Result<Self, ConversionError> {
        for (_, label) in nfa.states().iter() {
            if label.contains(SEPARATOR) {
                warn!("state label `{label}` contains the separator `{SEPARATOR}`");
            }
        }

        let mut seen: HashMap<String, StateId> = HashMap::new();
        let mut state_labels = Vec::with_capacity(dfa.num_states() as usize);

        for (id, composite) in dfa.composites().enumerate() {
            let label = canonical_label(composite, nfa.states());
            if let Some(&previous) = seen.get(&label) {
                let members = |state: StateId| -> Vec<String> {
                    dfa.composite(state)
                        .map(|set| {
                            sorted_members(set, nfa.states())
                                .into_iter()
                                .map(str::to_owned)
                                .collect()
                        })
                        .unwrap_or_default()
                };
                return Err(ConversionError::LabelCollision {
                    first: members(previous),
                    second: members(id as StateId),
                    label,
                });
            }
            seen.insert(label.clone(), id as StateId);
            state_labels.push(label);
        }

        let symbol_labels = nfa.symbols().iter().map(|(_, s)| s.to_owned()).collect();

        Ok(Self {
            dfa,
            state_labels,
            symbol_labels,
        })
    }

    pub fn dfa(&self) -> &DFA {
        &self.dfa
    }

    pub fn into_dfa(self) -> DFA {
        self.dfa
    }

    pub fn state_label(&self, state: StateId) -> Option<&str> {
        self.state_labels.get(state as usize).map(String::as_str)
    }

    pub fn symbol_label(&self, symbol: SymbolId) -> Option<&str> {
        self.symbol_labels.get(symbol as usize).map(String::as_str)
    }

    /// Alphabet labels in declaration order.
    pub fn alphabet(&self) -> impl Iterator<Item = &str> + '_ {
        self.dfa
            .alphabet()
            .iter()
            .filter_map(|&symbol| self.symbol_label(symbol))
    }

    /// State labels in discovery order.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.state_labels.iter().map(String::as_str)
    }

    pub fn start_label(&self) -> Option<&str> {
        self.dfa
            .start_state()
            .and_then(|state| self.state_label(state))
    }

    /// Labels of the accepting states in discovery order.
    pub fn final_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.dfa
            .final_states()
            .iter()
            .filter_map(|state| self.state_label(state))
    }

    /// `(source, symbol, destination)` labels in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.dfa.transitions().filter_map(|(src, sym, dst)| {
            Some((
                self.state_label(src)?,
                self.symbol_label(sym)?,
                self.state_label(dst)?,
            ))
        })
    }
}
