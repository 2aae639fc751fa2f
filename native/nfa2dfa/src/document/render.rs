//! Human readable rendering of a converted DFA.

use crate::formlang::LabeledDFA;
use std::fmt;

impl fmt::Display for LabeledDFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== DFA ===")?;
        writeln!(f, "Alphabet: {:?}", self.alphabet().collect::<Vec<_>>())?;
        writeln!(f, "States: {:?}", self.states().collect::<Vec<_>>())?;
        writeln!(f, "Initial state: {}", self.start_label().unwrap_or_default())?;
        writeln!(
            f,
            "Accepting states: {:?}",
            self.final_labels().collect::<Vec<_>>()
        )?;
        writeln!(f)?;
        writeln!(f, "Transitions:")?;
        for (source, symbol, destination) in self.transitions() {
            writeln!(f, "  δ({source}, {symbol}) → {destination}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::convert;
    use crate::formlang::NFA;

    #[test]
    fn test_render() {
        let nfa = NFA::builder()
            .symbols(["a"])
            .transition("s", "a", "t")
            .transition("s", "a", "s")
            .start_state("s")
            .final_state("t")
            .build()
            .unwrap();
        let dfa = convert(&nfa, &Config::default()).unwrap();

        let expected = "\
=== DFA ===
Alphabet: [\"a\"]
States: [\"s\", \"s,t\"]
Initial state: s
Accepting states: [\"s,t\"]

Transitions:
  δ(s, a) → s,t
  δ(s,t, a) → s,t
";
        assert_eq!(dfa.to_string(), expected);
    }
}
