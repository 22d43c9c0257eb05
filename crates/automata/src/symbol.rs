//! Symbol types for automata transitions.

/// A symbol identifier: a 7-bit character code.
pub type SymbolId = u8;

/// Number of symbols in the alphabet (character codes 0..128).
pub const ALPHABET_SIZE: usize = 128;

/// Check if a symbol falls inside the 7-bit alphabet.
#[inline]
pub fn in_alphabet(symbol: SymbolId) -> bool {
    (symbol as usize) < ALPHABET_SIZE
}

/// Iterate over every symbol of the alphabet.
pub fn alphabet() -> impl Iterator<Item = SymbolId> {
    0..ALPHABET_SIZE as SymbolId
}
