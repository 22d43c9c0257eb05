//! The fixed example problems, wired up as ready-to-run machines.
//!
//! Each constructor builds a recognizer for one of the course languages; the
//! registry exposes them to the driver in a stable order.

use crate::dfa::Dfa;
use crate::error::Result;
use crate::nfa::Nfa;
use crate::state::StateId;
use crate::symbol::SymbolId;
use indexmap::IndexMap;

/// Either engine behind one `execute` entry point, for callers that do not
/// care which flavor of automaton recognizes the language.
#[derive(Debug, Clone)]
pub enum Machine {
    /// A deterministic recognizer.
    Dfa(Dfa),
    /// A nondeterministic recognizer.
    Nfa(Nfa),
}

impl Machine {
    /// Run the machine on the given input and return whether it accepts.
    pub fn execute(&mut self, input: &str) -> bool {
        match self {
            Machine::Dfa(dfa) => dfa.execute(input),
            Machine::Nfa(nfa) => nfa.execute(input),
        }
    }

    /// Iterate over all transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> Box<dyn Iterator<Item = (StateId, SymbolId, StateId)> + '_> {
        match self {
            Machine::Dfa(dfa) => Box::new(dfa.transitions()),
            Machine::Nfa(nfa) => Box::new(nfa.transitions()),
        }
    }

    /// Check if a state is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        match self {
            Machine::Dfa(dfa) => dfa.is_accepting(state),
            Machine::Nfa(nfa) => nfa.is_accepting(state),
        }
    }

    /// Get the number of states.
    pub fn num_states(&self) -> StateId {
        match self {
            Machine::Dfa(dfa) => dfa.num_states(),
            Machine::Nfa(nfa) => nfa.num_states(),
        }
    }
}

/// DFA accepting exactly the word "ullman".
pub fn exactly_ullman() -> Result<Dfa> {
    let mut dfa = Dfa::new(7)?;
    dfa.set_transition(0, b'u', 1)?;
    dfa.set_transition(1, b'l', 2)?;
    dfa.set_transition(2, b'l', 3)?;
    dfa.set_transition(3, b'm', 4)?;
    dfa.set_transition(4, b'a', 5)?;
    dfa.set_transition(5, b'n', 6)?;
    dfa.set_accepting(6, true)?;
    Ok(dfa)
}

/// DFA accepting strings starting with "com".
pub fn starts_with_com() -> Result<Dfa> {
    let mut dfa = Dfa::new(4)?;
    dfa.set_transition(0, b'c', 1)?;
    dfa.set_transition(1, b'o', 2)?;
    dfa.set_transition(2, b'm', 3)?;
    dfa.set_transition_all(3, 3)?;
    dfa.set_accepting(3, true)?;
    Ok(dfa)
}

/// DFA accepting strings containing exactly three '3's.
pub fn exactly_three_threes() -> Result<Dfa> {
    let mut dfa = Dfa::new(5)?;
    // Any other symbol keeps the count; a fourth '3' falls into the
    // absorbing overflow state 4.
    dfa.set_transition_all(0, 0)?;
    dfa.set_transition(0, b'3', 1)?;
    dfa.set_transition_all(1, 1)?;
    dfa.set_transition(1, b'3', 2)?;
    dfa.set_transition_all(2, 2)?;
    dfa.set_transition(2, b'3', 3)?;
    dfa.set_transition_all(3, 3)?;
    dfa.set_transition(3, b'3', 4)?;
    dfa.set_transition_all(4, 4)?;
    dfa.set_accepting(3, true)?;
    Ok(dfa)
}

/// DFA accepting binary strings with an even number of 0's and an odd number
/// of 1's.
pub fn even_zeros_odd_ones() -> Result<Dfa> {
    // Parity square: state = (zeros mod 2, ones mod 2).
    let mut dfa = Dfa::new(4)?;
    dfa.set_transition(0, b'1', 1)?;
    dfa.set_transition(1, b'1', 0)?;
    dfa.set_transition(0, b'0', 2)?;
    dfa.set_transition(2, b'0', 0)?;
    dfa.set_transition(1, b'0', 3)?;
    dfa.set_transition(3, b'0', 1)?;
    dfa.set_transition(2, b'1', 3)?;
    dfa.set_transition(3, b'1', 2)?;
    dfa.set_accepting(1, true)?;
    Ok(dfa)
}

/// NFA accepting strings that end in "gs".
pub fn ends_in_gs() -> Result<Nfa> {
    let mut nfa = Nfa::new(3)?;
    nfa.add_transition_all(0, 0)?;
    nfa.add_transition(0, b'g', 1)?;
    nfa.add_transition(1, b's', 2)?;
    nfa.set_accepting(2, true)?;
    Ok(nfa)
}

/// NFA accepting strings that contain "mas".
pub fn contains_mas() -> Result<Nfa> {
    let mut nfa = Nfa::new(4)?;
    nfa.add_transition_all(0, 0)?;
    nfa.add_transition(0, b'm', 1)?;
    nfa.add_transition(1, b'a', 2)?;
    nfa.add_transition(2, b's', 3)?;
    nfa.add_transition_all(3, 3)?;
    nfa.set_accepting(3, true)?;
    Ok(nfa)
}

/// NFA accepting strings with more than one 'a', 'b', 'c', 'd', 'k', or 'o',
/// more than two 'r's, or more than three 'e's.
pub fn too_many_repeats() -> Result<Nfa> {
    let mut nfa = Nfa::new(20)?;

    // One counting chain per letter, guessed nondeterministically from
    // state 0; the self-loops added below let the chain skip any symbols
    // between the counted occurrences.
    for (chain, letter) in [(1, b'a'), (3, b'b'), (5, b'c'), (7, b'd'), (9, b'k'), (11, b'o')] {
        nfa.add_transition(0, letter, chain)?;
        nfa.add_transition(chain, letter, chain + 1)?;
        nfa.set_accepting(chain + 1, true)?;
    }

    nfa.add_transition(0, b'r', 13)?;
    nfa.add_transition(13, b'r', 14)?;
    nfa.add_transition(14, b'r', 15)?;
    nfa.set_accepting(15, true)?;

    nfa.add_transition(0, b'e', 16)?;
    nfa.add_transition(16, b'e', 17)?;
    nfa.add_transition(17, b'e', 18)?;
    nfa.add_transition(18, b'e', 19)?;
    nfa.set_accepting(19, true)?;

    for state in 0..19 {
        nfa.add_transition_all(state, state)?;
    }

    Ok(nfa)
}

/// Build the registry of example problems, keyed by name, in presentation
/// order.
pub fn registry() -> Result<IndexMap<&'static str, (&'static str, Machine)>> {
    let mut problems = IndexMap::new();
    problems.insert(
        "1a",
        ("exactly the word \"ullman\"", Machine::Dfa(exactly_ullman()?)),
    );
    problems.insert(
        "1b",
        ("strings starting with \"com\"", Machine::Dfa(starts_with_com()?)),
    );
    problems.insert(
        "1c",
        (
            "strings containing exactly three 3's",
            Machine::Dfa(exactly_three_threes()?),
        ),
    );
    problems.insert(
        "1d",
        (
            "binary strings with an even number of 0's and an odd number of 1's",
            Machine::Dfa(even_zeros_odd_ones()?),
        ),
    );
    problems.insert(
        "2a",
        ("strings that end in \"gs\"", Machine::Nfa(ends_in_gs()?)),
    );
    problems.insert(
        "2b",
        ("strings that contain \"mas\"", Machine::Nfa(contains_mas()?)),
    );
    problems.insert(
        "2c",
        (
            "strings with too many repeated letters",
            Machine::Nfa(too_many_repeats()?),
        ),
    );
    Ok(problems)
}
