//! NFA to DFA conversion by subset construction.
//!
//! ```no_run
//! use nfa2dfa::{Config, convert, document};
//!
//! let nfa = document::load_nfa("nfa.json".as_ref())?;
//! let dfa = convert(&nfa, &Config::default())?;
//! document::write_dfa("dfa.json".as_ref(), &dfa, 4)?;
//! # Ok::<(), nfa2dfa::Error>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod formlang;

pub use config::Config;
pub use error::{ConversionError, Error, Result, SchemaError};
pub use formlang::{DFA, LabeledDFA, NFA};

use std::path::Path;

/// Run the subset construction on `nfa` and label the resulting states.
///
/// Nothing is returned on failure; there is no partial DFA.
pub fn convert(nfa: &NFA, config: &Config) -> Result<LabeledDFA, ConversionError> {
    let dfa = formlang::subset_construction(nfa, config)?;
    LabeledDFA::new(nfa, dfa)
}

/// Convert the NFA stored at `input` and write the DFA to `output`.
///
/// `output` is only written once the conversion has succeeded.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<LabeledDFA> {
    let nfa = document::load_nfa(input)?;
    let dfa = convert(&nfa, config)?;
    document::write_dfa(output, &dfa, config.indent)?;
    Ok(dfa)
}
