//! Error types for loading and converting automata.

use std::path::PathBuf;
use thiserror::Error;

/// The automaton description does not describe a valid NFA.
///
/// Raised while an [`NFA`](crate::formlang::NFA) is being built, before any
/// conversion runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No initial state was given.
    #[error("missing required field `initial_state`")]
    MissingStartState,

    /// A state label is the empty string.
    #[error("empty state label in `{field}`")]
    EmptyStateLabel { field: &'static str },

    /// A symbol is the empty string.
    #[error("empty symbol in `{field}`")]
    EmptySymbol { field: &'static str },

    /// The alphabet lists the same symbol twice.
    #[error("symbol `{0}` appears more than once in `alphabet`")]
    DuplicateSymbol(String),

    /// A transition uses a symbol that is not in the alphabet.
    #[error("transition from `{source_state}` uses symbol `{symbol}` which is not in `alphabet`")]
    UnknownSymbol {
        source_state: String,
        symbol: String,
    },

    /// A state is used but missing from an explicit `states` list.
    #[error("state `{state}` used in `{field}` is not listed in `states`")]
    UndeclaredState { state: String, field: &'static str },
}

/// The subset construction could not produce a DFA.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Two different sets of NFA states were given the same label.
    #[error(
        "composite states {{{a}}} and {{{b}}} share the label `{label}`",
        a = .first.join(" "),
        b = .second.join(" ")
    )]
    LabelCollision {
        label: String,
        first: Vec<String>,
        second: Vec<String>,
    },

    /// More composite states were discovered than the configured ceiling.
    #[error("subset construction exceeded the limit of {limit} states")]
    StateLimitExceeded { limit: usize },
}

/// Errors raised by the file level helpers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed automaton document")]
    Json(#[from] serde_json::Error),

    #[error("invalid automaton")]
    Schema(#[from] SchemaError),

    #[error("conversion failed")]
    Conversion(#[from] ConversionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
