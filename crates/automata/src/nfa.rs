//! Nondeterministic Finite Automaton (NFA) execution engine.

use crate::error::{AutomatonError, Result};
use crate::state::{StateId, StateSet};
use crate::symbol::{self, SymbolId};
use std::collections::{HashMap, VecDeque};

/// A Nondeterministic Finite Automaton.
///
/// Each `(state, symbol)` pair maps to a set of destinations; a run is
/// accepting when any sequence of choices through those sets consumes the
/// whole input and ends on an accepting state. Execution tracks the full
/// frontier of reachable states per symbol, which is equivalent to exploring
/// every branch but linear in the input length.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// Number of states
    num_states: StateId,
    /// Accepting states
    accepting: StateSet,
    /// Transitions: (source, symbol) -> set of destinations.
    /// An absent entry and an empty set are equivalent.
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Frontier of the most recent run
    current: StateSet,
}

impl Nfa {
    /// Create a new NFA with the given number of states, all non-accepting
    /// and with no transitions. The start configuration is `{0}`.
    pub fn new(num_states: StateId) -> Result<Self> {
        if num_states == 0 {
            return Err(AutomatonError::InvalidSize);
        }
        Ok(Self {
            num_states,
            accepting: StateSet::with_capacity(num_states as usize),
            transitions: HashMap::new(),
            current: StateSet::singleton(0, num_states as usize),
        })
    }

    /// Get the number of states.
    pub fn num_states(&self) -> StateId {
        self.num_states
    }

    fn check_state(&self, state: StateId) -> Result<()> {
        if state >= self.num_states {
            return Err(AutomatonError::StateOutOfRange {
                state,
                num_states: self.num_states,
            });
        }
        Ok(())
    }

    fn check_symbol(&self, sym: SymbolId) -> Result<()> {
        if !symbol::in_alphabet(sym) {
            return Err(AutomatonError::SymbolOutOfRange(sym));
        }
        Ok(())
    }

    /// Add `dst` to the set of destinations from `src` on `sym`. Destinations
    /// accumulate across calls; adding one never removes another.
    pub fn add_transition(&mut self, src: StateId, sym: SymbolId, dst: StateId) -> Result<()> {
        self.check_state(src)?;
        self.check_state(dst)?;
        self.check_symbol(sym)?;
        let num_states = self.num_states as usize;
        self.transitions
            .entry((src, sym))
            .or_insert_with(|| StateSet::with_capacity(num_states))
            .insert(dst);
        Ok(())
    }

    /// Add a transition from `src` to `dst` for every symbol of the given
    /// string.
    pub fn add_transition_str(&mut self, src: StateId, symbols: &str, dst: StateId) -> Result<()> {
        for &sym in symbols.as_bytes() {
            self.add_transition(src, sym, dst)?;
        }
        Ok(())
    }

    /// Add a transition from `src` to `dst` for every symbol of the alphabet.
    pub fn add_transition_all(&mut self, src: StateId, dst: StateId) -> Result<()> {
        for sym in symbol::alphabet() {
            self.add_transition(src, sym, dst)?;
        }
        Ok(())
    }

    /// Get the set of destinations from a state on a symbol, or `None` if no
    /// transition was added for the pair.
    pub fn transitions_from(&self, src: StateId, sym: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(src, sym))
    }

    /// Mark a state as accepting or not.
    pub fn set_accepting(&mut self, state: StateId, value: bool) -> Result<()> {
        self.check_state(state)?;
        if value {
            self.accepting.insert(state);
        } else {
            self.accepting.remove(state);
        }
        Ok(())
    }

    /// Check if a state is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    /// Compute the frontier reached from `states` on `sym`: the union of the
    /// destination sets of every state in `states`. Symbols outside the
    /// alphabet reach nothing.
    pub fn step(&self, states: &StateSet, sym: SymbolId) -> StateSet {
        let mut next = StateSet::with_capacity(self.num_states as usize);
        if !symbol::in_alphabet(sym) {
            return next;
        }
        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, sym)) {
                next.union_with(destinations);
            }
        }
        next
    }

    /// Run the NFA on the given input from the start configuration `{0}` and
    /// return whether it accepts.
    pub fn execute(&mut self, input: &str) -> bool {
        let start = StateSet::singleton(0, self.num_states as usize);
        self.execute_from(input, start)
    }

    /// Run the NFA on the given input from an explicit set of active states.
    ///
    /// On empty input the result is whether any active state is accepting.
    /// Otherwise the frontier is replaced per symbol with the union of every
    /// active state's destinations; once the frontier is empty no suffix can
    /// accept and the run short-circuits to `false`. An empty starting set
    /// rejects any input for the same reason.
    pub fn execute_from(&mut self, input: &str, start: StateSet) -> bool {
        self.current = start;
        for &sym in input.as_bytes() {
            if self.current.is_empty() {
                return false;
            }
            self.current = self.step(&self.current, sym);
        }
        self.current.intersects(&self.accepting)
    }

    /// The frontier left behind by the most recent run.
    pub fn current_states(&self) -> &StateSet {
        &self.current
    }

    /// Iterate over all transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }

    /// Check if the NFA accepts no strings at all.
    pub fn is_empty(&self) -> bool {
        if self.accepting.is_empty() {
            return true;
        }

        // BFS from the start state to find a reachable accepting state
        let mut visited = StateSet::with_capacity(self.num_states as usize);
        let mut queue: VecDeque<StateId> = VecDeque::new();
        queue.push_back(0);

        while let Some(state) = queue.pop_front() {
            if visited.contains(state) {
                continue;
            }
            visited.insert(state);

            if self.accepting.contains(state) {
                return false;
            }

            for sym in symbol::alphabet() {
                if let Some(destinations) = self.transitions.get(&(state, sym)) {
                    for dst in destinations.iter() {
                        if !visited.contains(dst) {
                            queue.push_back(dst);
                        }
                    }
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_states_rejected() {
        assert_eq!(Nfa::new(0).unwrap_err(), AutomatonError::InvalidSize);
    }

    #[test]
    fn test_transitions_accumulate() {
        let mut nfa = Nfa::new(3).unwrap();
        nfa.add_transition(0, b'a', 1).unwrap();
        nfa.add_transition(0, b'a', 2).unwrap();
        nfa.add_transition(0, b'a', 1).unwrap();

        let dests = nfa.transitions_from(0, b'a').unwrap();
        assert_eq!(dests.len(), 2);
        assert!(dests.contains(1));
        assert!(dests.contains(2));
        assert!(nfa.transitions_from(0, b'b').is_none());
    }

    #[test]
    fn test_bounds_checks() {
        let mut nfa = Nfa::new(2).unwrap();
        assert_eq!(
            nfa.add_transition(2, b'a', 0),
            Err(AutomatonError::StateOutOfRange {
                state: 2,
                num_states: 2
            })
        );
        assert_eq!(
            nfa.add_transition(0, 0xff, 1),
            Err(AutomatonError::SymbolOutOfRange(0xff))
        );
    }

    #[test]
    fn test_step_unions_destinations() {
        let mut nfa = Nfa::new(4).unwrap();
        nfa.add_transition(0, b'a', 1).unwrap();
        nfa.add_transition(0, b'a', 2).unwrap();
        nfa.add_transition(1, b'a', 3).unwrap();

        let from: StateSet = [0, 1].into_iter().collect();
        let next = nfa.step(&from, b'a');
        let expected: StateSet = [1, 2, 3].into_iter().collect();
        assert_eq!(next, expected);

        // No state moves on 'b'.
        assert!(nfa.step(&from, b'b').is_empty());
    }

    #[test]
    fn test_execute_branches() {
        // 0 -a-> 1 and 0 -a-> 2; only the branch through 2 accepts "ab".
        let mut nfa = Nfa::new(4).unwrap();
        nfa.add_transition(0, b'a', 1).unwrap();
        nfa.add_transition(0, b'a', 2).unwrap();
        nfa.add_transition(2, b'b', 3).unwrap();
        nfa.set_accepting(3, true).unwrap();

        assert!(nfa.execute("ab"));
        assert!(!nfa.execute("a"));
        assert!(!nfa.execute("b"));
        assert!(!nfa.execute("abb"));
    }

    #[test]
    fn test_empty_input_checks_start_state() {
        let mut nfa = Nfa::new(2).unwrap();
        assert!(!nfa.execute(""));
        nfa.set_accepting(0, true).unwrap();
        assert!(nfa.execute(""));
    }

    #[test]
    fn test_empty_active_set_rejects() {
        let mut nfa = Nfa::new(2).unwrap();
        nfa.set_accepting(0, true).unwrap();
        nfa.add_transition_all(0, 0).unwrap();

        let empty = StateSet::with_capacity(2);
        assert!(!nfa.execute_from("", empty.clone()));
        assert!(!nfa.execute_from("anything", empty));
    }

    #[test]
    fn test_execute_from_explicit_configuration() {
        let mut nfa = Nfa::new(3).unwrap();
        nfa.add_transition(1, b'x', 2).unwrap();
        nfa.set_accepting(2, true).unwrap();

        assert!(!nfa.execute("x"));
        let from_one = StateSet::singleton(1, 3);
        assert!(nfa.execute_from("x", from_one));
    }

    #[test]
    fn test_run_resets_configuration() {
        let mut nfa = Nfa::new(2).unwrap();
        nfa.add_transition(0, b'a', 1).unwrap();
        nfa.set_accepting(1, true).unwrap();

        assert!(nfa.execute("a"));
        assert_eq!(nfa.current_states().to_vec(), vec![1]);

        // The stale frontier from the previous run must not leak in.
        assert!(nfa.execute("a"));
        assert_eq!(nfa.current_states().to_vec(), vec![1]);
    }

    #[test]
    fn test_non_ascii_input_rejects() {
        let mut nfa = Nfa::new(1).unwrap();
        nfa.add_transition_all(0, 0).unwrap();
        nfa.set_accepting(0, true).unwrap();

        assert!(nfa.execute("dogs"));
        assert!(!nfa.execute("d\u{fc}gs"));
    }

    #[test]
    fn test_is_empty() {
        let mut nfa = Nfa::new(3).unwrap();
        assert!(nfa.is_empty());

        nfa.set_accepting(2, true).unwrap();
        assert!(nfa.is_empty());

        nfa.add_transition(0, b'g', 1).unwrap();
        nfa.add_transition(1, b's', 2).unwrap();
        assert!(!nfa.is_empty());
    }
}
