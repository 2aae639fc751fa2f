//! Reading NFAs from automaton documents.

use crate::document::schema::AutomatonDocument;
use crate::error::{Error, Result, SchemaError};
use crate::formlang::NFA;
use log::debug;
use std::path::Path;

/// Load an NFA from a JSON file.
pub fn load_nfa(path: &Path) -> Result<NFA> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let nfa = parse_nfa(&contents)?;
    debug!(
        "loaded NFA from {}: {} states, {} symbols",
        path.display(),
        nfa.num_states(),
        nfa.symbols().len()
    );
    Ok(nfa)
}

/// Parse an NFA from JSON text.
pub fn parse_nfa(text: &str) -> Result<NFA> {
    let document: AutomatonDocument = serde_json::from_str(text)?;
    Ok(NFA::try_from(&document)?)
}

impl TryFrom<&AutomatonDocument> for NFA {
    type Error = SchemaError;

    fn try_from(document: &AutomatonDocument) -> Result<Self, Self::Error> {
        let mut builder = NFA::builder()
            .symbols(document.alphabet.iter().cloned())
            .start_state(document.initial_state.clone())
            .final_states(document.final_states.iter().cloned());

        if let Some(states) = &document.states {
            builder = builder.declare_states(states.iter().cloned());
        }

        for entry in &document.transitions {
            let targets = entry.end.targets();
            if targets.is_empty() {
                builder = builder.no_transition(entry.initial.clone(), entry.symbol.clone());
            }
            for target in targets {
                builder = builder.transition(entry.initial.clone(), entry.symbol.clone(), target);
            }
        }

        builder.build()
    }
}
