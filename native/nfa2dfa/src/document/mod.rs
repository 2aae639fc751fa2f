//! JSON automaton documents: reading NFAs and writing converted DFAs.

mod loader;
mod render;
mod schema;
mod writer;

pub use loader::{load_nfa, parse_nfa};
pub use schema::{AutomatonDocument, Destination, NULL_SENTINEL, TransitionEntry};
pub use writer::{to_json, write_dfa};
