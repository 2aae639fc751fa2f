//! Symbol types for automata transitions.

/// A symbol identifier represented as a u32.
///
/// Ids are dense and follow the order in which the alphabet was declared,
/// which is also the order the subset construction explores symbols in.
pub type SymbolId = u32;
