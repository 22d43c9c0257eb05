//! Error types for automaton construction.

use crate::state::StateId;
use crate::symbol::SymbolId;
use thiserror::Error;

/// Errors that can occur while building an automaton.
///
/// Execution never fails: a missing transition is an ordinary reject path,
/// not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonError {
    /// An automaton must contain at least one state.
    #[error("automaton must have at least one state")]
    InvalidSize,

    /// A state index outside `[0, num_states)` was passed to the
    /// construction API.
    #[error("state {state} is out of range for an automaton with {num_states} states")]
    StateOutOfRange {
        /// The offending state index.
        state: StateId,
        /// The number of states in the automaton.
        num_states: StateId,
    },

    /// A symbol outside the 7-bit alphabet was passed to the construction
    /// API.
    #[error("symbol {0:#04x} is outside the 7-bit alphabet")]
    SymbolOutOfRange(SymbolId),
}

/// A specialized `Result` type for automaton construction.
pub type Result<T> = std::result::Result<T, AutomatonError>;
