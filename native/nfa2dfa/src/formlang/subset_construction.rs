//! Subset construction algorithm for converting an NFA to a DFA.

use crate::config::Config;
use crate::error::ConversionError;
use crate::formlang::dfa::DFA;
use crate::formlang::nfa::NFA;
use crate::formlang::state::{StateId, StateSet};
use log::{debug, trace};
use std::collections::VecDeque;

/// Convert an NFA to a DFA using the powerset construction algorithm.
///
/// Only composite states reachable from `{start}` are built. States are
/// explored in FIFO order and symbols in alphabet order, so the state and
/// transition order of the result is the same on every run. An empty
/// successor set records no transition.
pub fn subset_construction(nfa: &NFA, config: &Config) -> Result<DFA, ConversionError> {
    let capacity = nfa.num_states() as usize;
    let mut dfa = DFA::new(nfa.alphabet().collect());

    debug!(
        "subset construction: {} NFA states, {} symbols",
        capacity,
        dfa.alphabet().len()
    );

    let (initial_dfa_state, _) = dfa.add_state(StateSet::singleton(nfa.start_state(), capacity));
    dfa.set_start_state(initial_dfa_state);
    check_limit(&dfa, config)?;

    // Queue of DFA states to process
    let mut worklist: VecDeque<StateId> = VecDeque::from([initial_dfa_state]);
    let mut visited = StateSet::with_capacity(capacity);

    while let Some(current) = worklist.pop_front() {
        if visited.contains(current) {
            continue;
        }
        visited.insert(current);

        for symbol in nfa.alphabet() {
            let Some(current_set) = dfa.composite(current) else {
                break;
            };
            let next_nfa_set = nfa.move_on_symbol(current_set, symbol);

            if next_nfa_set.is_empty() {
                continue;
            }

            let (next_dfa_state, inserted) = dfa.add_state(next_nfa_set);
            if inserted {
                trace!("discovered state {next_dfa_state}: {:?}", dfa.composite(next_dfa_state));
                check_limit(&dfa, config)?;
                worklist.push_back(next_dfa_state);
            }

            trace!("transition {current} --{symbol}--> {next_dfa_state}");
            dfa.add_transition(current, symbol, next_dfa_state);
        }
    }

    let accepting: Vec<StateId> = dfa
        .composites()
        .enumerate()
        .filter(|(_, composite)| composite.intersects(nfa.final_states()))
        .map(|(id, _)| id as StateId)
        .collect();
    for state in accepting {
        dfa.add_final_state(state);
    }

    debug!(
        "subset construction done: {} states, {} transitions, {} accepting",
        dfa.num_states(),
        dfa.num_transitions(),
        dfa.final_states().len()
    );

    Ok(dfa)
}

fn check_limit(dfa: &DFA, config: &Config) -> Result<(), ConversionError> {
    match config.max_states {
        Some(limit) if dfa.num_states() as usize > limit => {
            Err(ConversionError::StateLimitExceeded { limit })
        }
        _ => Ok(()),
    }
}
