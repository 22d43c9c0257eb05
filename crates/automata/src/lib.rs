//! Finite-automaton execution engines.
//!
//! This crate provides two recognizers for languages defined by
//! state-transition rules:
//! - [`Dfa`]: deterministic stepping, one current state per run
//! - [`Nfa`]: nondeterministic simulation tracking the full frontier of
//!   reachable states per input symbol
//!
//! plus the bit-set [`StateSet`] they share and the fixed example problems
//! consumed by the `automata` driver binary.

mod dfa;
mod error;
mod nfa;
pub mod problems;
mod state;
pub mod symbol;

pub use dfa::Dfa;
pub use error::{AutomatonError, Result};
pub use nfa::Nfa;
pub use problems::Machine;
pub use state::{StateId, StateSet};
pub use symbol::{ALPHABET_SIZE, SymbolId};
