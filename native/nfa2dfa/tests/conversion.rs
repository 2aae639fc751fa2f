//! End to end conversion tests.

mod common;

use common::{CONTAINS_AB, dfa_accepts, nfa_accepts, word};
use nfa2dfa::document::{AutomatonDocument, Destination, TransitionEntry, parse_nfa, to_json};
use nfa2dfa::{Config, ConversionError, Error, convert, convert_file};

#[test]
fn test_contains_ab() {
    let nfa = parse_nfa(CONTAINS_AB).unwrap();
    let dfa = convert(&nfa, &Config::default()).unwrap();

    assert_eq!(
        dfa.states().collect::<Vec<_>>(),
        vec!["q0", "q0,q1", "q0,q2"]
    );
    assert_eq!(dfa.start_label(), Some("q0"));
    assert_eq!(dfa.final_labels().collect::<Vec<_>>(), vec!["q0,q2"]);

    let transitions: Vec<_> = dfa.transitions().collect();
    assert_eq!(
        transitions,
        vec![
            ("q0", "a", "q0,q1"),
            ("q0", "b", "q0"),
            ("q0,q1", "a", "q0,q1"),
            ("q0,q1", "b", "q0,q2"),
            ("q0,q2", "a", "q0,q1"),
            ("q0,q2", "b", "q0"),
        ]
    );
}

#[test]
fn test_contains_ab_language() {
    let nfa = parse_nfa(CONTAINS_AB).unwrap();
    let dfa = convert(&nfa, &Config::default()).unwrap();

    for (input, expected) in [
        (&[][..], false),
        (&["a"][..], false),
        (&["a", "b"][..], true),
        (&["b", "a", "b"][..], true),
        (&["a", "b", "a"][..], false),
        (&["b", "b", "a"][..], false),
    ] {
        let w = word(&nfa, input);
        assert_eq!(nfa_accepts(&nfa, &w), expected, "NFA on {input:?}");
        assert_eq!(dfa_accepts(dfa.dfa(), &w), expected, "DFA on {input:?}");
    }
}

#[test]
fn test_only_null_transitions_from_start() {
    let nfa = parse_nfa(
        r#"{
            "alphabet": ["a", "b"],
            "transiction": [
                { "initial": "s", "symbol": "a", "end": "null" },
                { "initial": "s", "symbol": "b", "end": null }
            ],
            "initial_state": "s",
            "end_state": ["s"]
        }"#,
    )
    .unwrap();
    let dfa = convert(&nfa, &Config::default()).unwrap();

    assert_eq!(dfa.states().collect::<Vec<_>>(), vec!["s"]);
    assert_eq!(dfa.transitions().count(), 0);
    assert_eq!(dfa.final_labels().collect::<Vec<_>>(), vec!["s"]);
}

#[test]
fn test_partial_transition_function() {
    // p -a-> r, nothing on b.
    let nfa = parse_nfa(
        r#"{
            "alphabet": ["a", "b"],
            "transiction": [{ "initial": "p", "symbol": "a", "end": ["r"] }],
            "initial_state": "p",
            "end_state": ["r"]
        }"#,
    )
    .unwrap();
    let dfa = convert(&nfa, &Config::default()).unwrap();

    let document = AutomatonDocument::from(&dfa);
    assert_eq!(
        document.transitions,
        vec![TransitionEntry {
            initial: "p".into(),
            symbol: "a".into(),
            end: Destination::States(vec!["r".into()]),
        }]
    );
    assert_eq!(document.states, Some(vec!["p".into(), "r".into()]));
}

#[test]
fn test_byte_identical_output() {
    let nfa = parse_nfa(CONTAINS_AB).unwrap();
    let first = to_json(&convert(&nfa, &Config::default()).unwrap(), 4).unwrap();
    let second = to_json(&convert(&nfa, &Config::default()).unwrap(), 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nfa.json");
    let output = dir.path().join("dfa.json");
    std::fs::write(&input, CONTAINS_AB).unwrap();

    let dfa = convert_file(&input, &output, &Config::default()).unwrap();

    let written: AutomatonDocument =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, AutomatonDocument::from(&dfa));
    assert_eq!(written.initial_state, "q0");
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nfa.json");
    let output = dir.path().join("dfa.json");
    std::fs::write(&input, CONTAINS_AB).unwrap();

    let err = convert_file(&input, &output, &Config::default().with_max_states(1)).unwrap_err();
    assert!(matches!(
        err,
        Error::Conversion(ConversionError::StateLimitExceeded { limit: 1 })
    ));
    assert!(!output.exists());
}

#[test]
fn test_schema_error_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nfa.json");
    let output = dir.path().join("dfa.json");
    std::fs::write(
        &input,
        r#"{ "alphabet": ["a", "a"], "transiction": [], "initial_state": "q", "end_state": [] }"#,
    )
    .unwrap();

    let err = convert_file(&input, &output, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
    assert!(!output.exists());
}
