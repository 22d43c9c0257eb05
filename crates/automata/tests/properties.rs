//! Property-based tests for the execution laws of both engines.

use automata::{Dfa, Nfa, StateId};
use proptest::prelude::*;

const NUM_STATES: StateId = 6;

/// An arbitrary transition over a small automaton and alphabet.
fn arb_edge() -> impl Strategy<Value = (StateId, u8, StateId)> {
    (0..NUM_STATES, prop::sample::select(&b"abc"[..]), 0..NUM_STATES)
}

fn arb_edges(max: usize) -> impl Strategy<Value = Vec<(StateId, u8, StateId)>> {
    prop::collection::vec(arb_edge(), 0..max)
}

fn arb_accepting() -> impl Strategy<Value = Vec<StateId>> {
    prop::collection::vec(0..NUM_STATES, 0..4)
}

fn arb_input() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,8}").unwrap()
}

fn build_dfa(edges: &[(StateId, u8, StateId)], accepting: &[StateId]) -> Dfa {
    let mut dfa = Dfa::new(NUM_STATES).unwrap();
    for &(src, sym, dst) in edges {
        dfa.set_transition(src, sym, dst).unwrap();
    }
    for &state in accepting {
        dfa.set_accepting(state, true).unwrap();
    }
    dfa
}

fn build_nfa(edges: &[(StateId, u8, StateId)], accepting: &[StateId]) -> Nfa {
    let mut nfa = Nfa::new(NUM_STATES).unwrap();
    for &(src, sym, dst) in edges {
        nfa.add_transition(src, sym, dst).unwrap();
    }
    for &state in accepting {
        nfa.set_accepting(state, true).unwrap();
    }
    nfa
}

proptest! {
    /// Empty input accepts iff the start state is accepting.
    #[test]
    fn empty_input_equals_start_state_flag(
        edges in arb_edges(12),
        accepting in arb_accepting(),
    ) {
        let mut dfa = build_dfa(&edges, &accepting);
        prop_assert_eq!(dfa.execute(""), dfa.is_accepting(0));

        let mut nfa = build_nfa(&edges, &accepting);
        prop_assert_eq!(nfa.execute(""), nfa.is_accepting(0));
    }

    /// Re-setting a DFA transition replaces the prior destination.
    #[test]
    fn dfa_last_write_wins(
        edges in arb_edges(12),
        src in 0..NUM_STATES,
        first in 0..NUM_STATES,
        second in 0..NUM_STATES,
    ) {
        let mut dfa = build_dfa(&edges, &[]);
        dfa.set_transition(src, b'a', first).unwrap();
        dfa.set_transition(src, b'a', second).unwrap();
        prop_assert_eq!(dfa.transition(src, b'a'), Some(second));
    }

    /// Once a DFA run hits an undefined transition, no suffix can make it
    /// accept.
    #[test]
    fn dfa_dead_state_is_absorbing(
        edges in arb_edges(12),
        accepting in arb_accepting(),
        prefix in arb_input(),
        suffix in arb_input(),
    ) {
        let mut dfa = build_dfa(&edges, &accepting);
        // Walk the prefix by hand; only interesting when it dies.
        let mut state = Some(0);
        for &sym in prefix.as_bytes() {
            state = state.and_then(|s| dfa.transition(s, sym));
        }
        prop_assume!(state.is_none());

        let mut run = prefix.clone();
        run.push_str(&suffix);
        prop_assert!(!dfa.execute(&run));
    }

    /// The DFA and NFA engines agree on any deterministic transition table.
    #[test]
    fn engines_agree_on_deterministic_tables(
        edges in arb_edges(12),
        accepting in arb_accepting(),
        input in arb_input(),
    ) {
        let mut dfa = build_dfa(&edges, &accepting);
        // Mirror the DFA exactly: keep only each pair's final destination.
        let mut nfa = Nfa::new(NUM_STATES).unwrap();
        for src in 0..NUM_STATES {
            for &sym in b"abc" {
                if let Some(dst) = dfa.transition(src, sym) {
                    nfa.add_transition(src, sym, dst).unwrap();
                }
            }
        }
        for &state in &accepting {
            nfa.set_accepting(state, true).unwrap();
        }

        prop_assert_eq!(dfa.execute(&input), nfa.execute(&input));
    }

    /// Adding transitions to an NFA never shrinks the accepted language.
    #[test]
    fn nfa_union_is_monotonic(
        edges in arb_edges(12),
        extra in arb_edges(6),
        accepting in arb_accepting(),
        input in arb_input(),
    ) {
        let mut nfa = build_nfa(&edges, &accepting);
        let accepted_before = nfa.execute(&input);

        for &(src, sym, dst) in &extra {
            nfa.add_transition(src, sym, dst).unwrap();
        }

        if accepted_before {
            prop_assert!(nfa.execute(&input));
        }
    }

    /// Growing the transition relation never removes reachable states.
    #[test]
    fn nfa_reachability_is_monotonic(
        edges in arb_edges(12),
        extra in arb_edges(6),
        input in arb_input(),
    ) {
        let mut nfa = build_nfa(&edges, &[]);
        nfa.execute(&input);
        let reachable_before = nfa.current_states().to_vec();

        for &(src, sym, dst) in &extra {
            nfa.add_transition(src, sym, dst).unwrap();
        }
        nfa.execute(&input);

        for state in reachable_before {
            prop_assert!(nfa.current_states().contains(state));
        }
    }
}
