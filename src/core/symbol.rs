//! Marks that can occupy a board cell.

use serde::{Deserialize, Serialize};

/// A mark on a cell. An empty cell is `None` at the board level.
///
/// `Plus` and `Slash` are composite marks: they only appear through
/// upgrades, never from placing on an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Player One's raw mark (`|`).
    Vertical,
    /// Player Two's raw mark (`-`).
    Horizontal,
    /// Both raw marks combined (`+`).
    Plus,
    /// Upgraded `Plus` (`/`). Three in a line wins.
    Slash,
    /// Frozen cell from the Block ability (`O`).
    Block,
}

impl Symbol {
    /// Check if this is one of the two raw player marks.
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, Symbol::Vertical | Symbol::Horizontal)
    }

    /// Single-character glyph used by board rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Vertical => '|',
            Symbol::Horizontal => '-',
            Symbol::Plus => '+',
            Symbol::Slash => '/',
            Symbol::Block => 'O',
        }
    }
}
