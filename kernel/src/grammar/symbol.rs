//! Dragon-curve alphabet and its fixed production.
//!
//! Two move symbols (`F`, `G`) and two turn symbols (`+`, `-`). The
//! production is the Heighway dragon:
//!
//! ```text
//! F → F + G
//! G → F - G
//! + → +
//! - → -
//! ```
//!
//! Every move rewrites to exactly two moves, so a level-L string carries
//! exactly `2^L` moves and `2^L - 1` turns.

use super::error::GrammarError;

/// A quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Turn {
    /// +90°.
    Left,
    /// −90°.
    Right,
}

/// One instruction of a dragon path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// Leading move (`F`): rewrites with a left turn.
    Forward,
    /// Trailing move (`G`): rewrites with a right turn.
    Mirror,
    /// Quarter turn (`+` or `-`). Passes through rewriting unchanged.
    Turn(Turn),
}

impl Symbol {
    /// The axiom every expansion starts from.
    pub const AXIOM: Symbol = Symbol::Forward;

    /// Whether this symbol advances the path (and therefore produces a fold).
    #[must_use]
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Forward | Self::Mirror)
    }

    /// The turn carried by this symbol, if any.
    #[must_use]
    pub const fn turn(self) -> Option<Turn> {
        match self {
            Self::Turn(turn) => Some(turn),
            Self::Forward | Self::Mirror => None,
        }
    }

    /// Append this symbol's rewrite to `out`.
    pub fn rewrite_into(self, out: &mut Vec<Symbol>) {
        match self {
            Self::Forward => {
                out.extend_from_slice(&[Self::Forward, Self::Turn(Turn::Left), Self::Mirror]);
            }
            Self::Mirror => {
                out.extend_from_slice(&[Self::Forward, Self::Turn(Turn::Right), Self::Mirror]);
            }
            Self::Turn(_) => out.push(self),
        }
    }

    /// Canonical character for this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Mirror => 'G',
            Self::Turn(Turn::Left) => '+',
            Self::Turn(Turn::Right) => '-',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'F' => Ok(Self::Forward),
            'G' => Ok(Self::Mirror),
            '+' => Ok(Self::Turn(Turn::Left)),
            // U+2212 MINUS SIGN is accepted alongside ASCII hyphen.
            '-' | '\u{2212}' => Ok(Self::Turn(Turn::Right)),
            other => Err(other),
        }
    }
}

/// Parse a textual symbol string (e.g. `"F+G-F"`).
///
/// ASCII whitespace is skipped.
///
/// # Errors
///
/// Returns [`GrammarError::UnknownSymbol`] for any character outside the
/// alphabet, with its character index.
pub fn parse_symbols(text: &str) -> Result<Vec<Symbol>, GrammarError> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_ascii_whitespace())
        .map(|(index, c)| {
            Symbol::try_from(c).map_err(|symbol| GrammarError::UnknownSymbol { symbol, index })
        })
        .collect()
}

/// Render symbols back to their canonical text form.
#[must_use]
pub fn render_symbols(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}

/// Count move symbols.
#[must_use]
pub fn move_count(symbols: &[Symbol]) -> usize {
    symbols.iter().filter(|s| s.is_move()).count()
}
