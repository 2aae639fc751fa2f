//! Writing converted DFAs as automaton documents.

use crate::document::schema::{AutomatonDocument, Destination, TransitionEntry};
use crate::error::{Error, Result};
use crate::formlang::LabeledDFA;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

impl From<&LabeledDFA> for AutomatonDocument {
    fn from(dfa: &LabeledDFA) -> Self {
        Self {
            alphabet: dfa.alphabet().map(str::to_owned).collect(),
            states: Some(dfa.states().map(str::to_owned).collect()),
            transitions: dfa
                .transitions()
                .map(|(source, symbol, destination)| TransitionEntry {
                    initial: source.to_owned(),
                    symbol: symbol.to_owned(),
                    end: Destination::States(vec![destination.to_owned()]),
                })
                .collect(),
            initial_state: dfa.start_label().unwrap_or_default().to_owned(),
            final_states: dfa.final_labels().map(str::to_owned).collect(),
        }
    }
}

/// Serialize a DFA as pretty printed JSON, indented by `indent` spaces.
pub fn to_json(dfa: &LabeledDFA, indent: usize) -> Result<String> {
    let document = AutomatonDocument::from(dfa);
    let indent = " ".repeat(indent);

    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    document.serialize(&mut serializer)?;
    buffer.push(b'\n');

    String::from_utf8(buffer).map_err(|e| Error::Json(serde::ser::Error::custom(e)))
}

/// Write a DFA to `path`.
///
/// The document is fully serialized before the file is touched.
pub fn write_dfa(path: &Path, dfa: &LabeledDFA, indent: usize) -> Result<()> {
    let json = to_json(dfa, indent)?;
    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
