//! Deterministic Finite Automaton (DFA) execution engine.

use crate::error::{AutomatonError, Result};
use crate::state::{StateId, StateSet};
use crate::symbol::{self, SymbolId};
use std::collections::{HashMap, VecDeque};

/// A Deterministic Finite Automaton.
///
/// States are numbered `0..num_states` and state 0 is the start state. Each
/// `(state, symbol)` pair maps to at most one destination; a pair with no
/// entry rejects the run.
#[derive(Debug, Clone)]
pub struct Dfa {
    /// Number of states
    num_states: StateId,
    /// Accepting states
    accepting: StateSet,
    /// Transitions: (source, symbol) -> destination
    transitions: HashMap<(StateId, SymbolId), StateId>,
    /// Configuration of the most recent run; `None` once a lookup has failed
    current: Option<StateId>,
}

impl Dfa {
    /// Create a new DFA with the given number of states, all non-accepting
    /// and with no transitions.
    pub fn new(num_states: StateId) -> Result<Self> {
        if num_states == 0 {
            return Err(AutomatonError::InvalidSize);
        }
        Ok(Self {
            num_states,
            accepting: StateSet::with_capacity(num_states as usize),
            transitions: HashMap::new(),
            current: Some(0),
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

    /// Set the transition from `src` on `sym` to `dst`, replacing any prior
    /// destination for that pair.
    pub fn set_transition(&mut self, src: StateId, sym: SymbolId, dst: StateId) -> Result<()> {
        self.check_state(src)?;
        self.check_state(dst)?;
        self.check_symbol(sym)?;
        self.transitions.insert((src, sym), dst);
        Ok(())
    }

    /// Set the transition from `src` to `dst` for every symbol of the given
    /// string. Convenient for edges carrying several labels.
    pub fn set_transition_str(&mut self, src: StateId, symbols: &str, dst: StateId) -> Result<()> {
        for &sym in symbols.as_bytes() {
            self.set_transition(src, sym, dst)?;
        }
        Ok(())
    }

    /// Set the transition from `src` to `dst` for every symbol of the
    /// alphabet.
    pub fn set_transition_all(&mut self, src: StateId, dst: StateId) -> Result<()> {
        for sym in symbol::alphabet() {
            self.set_transition(src, sym, dst)?;
        }
        Ok(())
    }

    /// Get the transition from a state on a symbol, or `None` if undefined.
    pub fn transition(&self, src: StateId, sym: SymbolId) -> Option<StateId> {
        self.transitions.get(&(src, sym)).copied()
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

    /// Run the DFA on the given input and return whether it accepts.
    ///
    /// The run starts from state 0 regardless of any previous run. A symbol
    /// with no transition from the current state rejects immediately without
    /// consuming the rest of the input; the dead configuration is absorbing.
    /// Symbols outside the alphabet have no transitions by construction and
    /// reject the same way.
    pub fn execute(&mut self, input: &str) -> bool {
        let mut state = 0;
        for &sym in input.as_bytes() {
            match self.transition(state, sym) {
                Some(next) => state = next,
                None => {
                    self.current = None;
                    return false;
                }
            }
        }
        self.current = Some(state);
        self.is_accepting(state)
    }

    /// The configuration left behind by the most recent run, `None` once a
    /// transition lookup has failed.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Iterate over all transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(src, sym), &dst)| (src, sym, dst))
    }

    /// Check if the DFA accepts no strings at all.
    pub fn is_empty(&self) -> bool {
        if self.accepting.is_empty() {
            return true;
        }

        // BFS from the start state to find a reachable accepting state
        let mut visited = StateSet::with_capacity(self.num_states as usize);
        let mut queue = VecDeque::new();
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
                if let Some(next) = self.transition(state, sym) {
                    if !visited.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        true
    }
}
