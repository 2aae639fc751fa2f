//! Non-deterministic Finite Automaton (NFA) model.

use crate::error::SchemaError;
use crate::formlang::interner::Interner;
use crate::formlang::state::{StateId, StateSet};
use crate::formlang::symbol::SymbolId;
use crate::formlang::transition_index::{RawTransition, TransitionIndex};

/// A Non-deterministic Finite Automaton.
///
/// Built once through [`NFABuilder`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct NFA {
    /// Alphabet in declaration order
    symbols: Interner,
    /// State labels; ids are dense
    states: Interner,
    /// Transitions: (source, symbol) -> set of destination states
    index: TransitionIndex,
    start_state: StateId,
    final_states: StateSet,
}

impl NFA {
    pub fn builder() -> NFABuilder {
        NFABuilder::new()
    }

    /// Get the number of states.
    pub fn num_states(&self) -> StateId {
        self.states.len() as StateId
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Symbol ids in declaration order.
    pub fn alphabet(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().map(|(id, _)| id)
    }

    pub fn symbols(&self) -> &Interner {
        &self.symbols
    }

    pub fn states(&self) -> &Interner {
        &self.states
    }

    pub fn transition_index(&self) -> &TransitionIndex {
        &self.index
    }

    pub fn state_id(&self, label: &str) -> Option<StateId> {
        self.states.get(label)
    }

    pub fn symbol_id(&self, label: &str) -> Option<SymbolId> {
        self.symbols.get(label)
    }

    /// Get the states reachable from a set of states on a given symbol.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        self.index.move_on_symbol(states, symbol)
    }
}

/// Collects an automaton description by label and validates it into an [`NFA`].
#[derive(Debug, Clone, Default)]
pub struct NFABuilder {
    alphabet: Vec<String>,
    declared_states: Option<Vec<String>>,
    transitions: Vec<(String, String, Option<String>)>,
    start_state: Option<String>,
    final_states: Vec<String>,
}

impl NFABuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symbol to the alphabet.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.alphabet.push(symbol.into());
        self
    }

    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Restrict the automaton to an explicit list of states.
    ///
    /// Without it, states are implied by their use.
    pub fn declare_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_states = Some(states.into_iter().map(Into::into).collect());
        self
    }

    /// Add a transition from `source` to `destination` on `symbol`.
    pub fn transition(
        mut self,
        source: impl Into<String>,
        symbol: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.transitions
            .push((source.into(), symbol.into(), Some(destination.into())));
        self
    }

    /// Declare `(source, symbol)` without any destination.
    pub fn no_transition(mut self, source: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.transitions.push((source.into(), symbol.into(), None));
        self
    }

    pub fn start_state(mut self, state: impl Into<String>) -> Self {
        self.start_state = Some(state.into());
        self
    }

    pub fn final_state(mut self, state: impl Into<String>) -> Self {
        self.final_states.push(state.into());
        self
    }

    pub fn final_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.final_states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Validate the description and build the NFA.
    pub fn build(self) -> Result<NFA, SchemaError> {
        let start_label = self.start_state.ok_or(SchemaError::MissingStartState)?;

        let mut symbols = Interner::new();
        for symbol in &self.alphabet {
            if symbol.is_empty() {
                return Err(SchemaError::EmptySymbol { field: "alphabet" });
            }
            if symbols.contains(symbol) {
                return Err(SchemaError::DuplicateSymbol(symbol.clone()));
            }
            symbols.intern(symbol);
        }

        let mut states = Interner::new();
        let mut resolve = |label: &str, field: &'static str| -> Result<StateId, SchemaError> {
            if label.is_empty() {
                return Err(SchemaError::EmptyStateLabel { field });
            }
            if let Some(declared) = &self.declared_states {
                if !declared.iter().any(|s| s == label) {
                    return Err(SchemaError::UndeclaredState {
                        state: label.to_owned(),
                        field,
                    });
                }
            }
            Ok(states.intern(label))
        };

        let start_state = resolve(&start_label, "initial_state")?;

        let mut raw = Vec::with_capacity(self.transitions.len());
        for (source, symbol, destination) in &self.transitions {
            if symbol.is_empty() {
                return Err(SchemaError::EmptySymbol {
                    field: "transitions",
                });
            }
            let source_id = resolve(source, "transitions")?;
            let symbol_id = symbols.get(symbol).ok_or_else(|| SchemaError::UnknownSymbol {
                source_state: source.clone(),
                symbol: symbol.clone(),
            })?;
            let destination_id = match destination {
                Some(label) => Some(resolve(label, "transitions")?),
                None => None,
            };
            raw.push(RawTransition {
                source: source_id,
                symbol: symbol_id,
                destination: destination_id,
            });
        }

        let mut final_ids = Vec::with_capacity(self.final_states.len());
        for label in &self.final_states {
            final_ids.push(resolve(label, "final_states")?);
        }

        if let Some(declared) = &self.declared_states {
            for label in declared {
                resolve(label, "states")?;
            }
        }

        let capacity = states.len();
        let mut final_states = StateSet::with_capacity(capacity);
        for state in final_ids {
            final_states.insert(state);
        }

        Ok(NFA {
            symbols,
            states,
            index: TransitionIndex::build(&raw, capacity),
            start_state,
            final_states,
        })
    }
}
