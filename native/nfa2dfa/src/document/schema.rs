//! Serde model of the automaton document.
//!
//! Input and output share one shape. Field names follow the established
//! file format (`transiction`, `end_state`); the spelled-out names are
//! accepted as aliases on input.

use serde::{Deserialize, Serialize};

/// String sentinel for a transition entry with no destination.
pub const NULL_SENTINEL: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDocument {
    pub alphabet: Vec<String>,
    /// Optional on input; always written on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(rename = "transiction", alias = "transitions")]
    pub transitions: Vec<TransitionEntry>,
    pub initial_state: String,
    #[serde(rename = "end_state", alias = "final_states")]
    pub final_states: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry {
    pub initial: String,
    pub symbol: String,
    pub end: Destination,
}

/// The `end` of a transition entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
    /// Any number of destination states.
    States(Vec<String>),
    /// A single state, or [`NULL_SENTINEL`].
    Label(String),
    /// JSON `null`.
    Null,
}

impl Destination {
    /// The destination state labels; empty for either sentinel.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Destination::States(states) => states.iter().map(String::as_str).collect(),
            Destination::Label(label) if label == NULL_SENTINEL => Vec::new(),
            Destination::Label(label) => vec![label.as_str()],
            Destination::Null => Vec::new(),
        }
    }
}
