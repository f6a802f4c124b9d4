//! Typed grammar errors.

/// Typed failure for symbol generation and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The requested level is beyond the hard cap. Never truncated: a
    /// partial expansion would corrupt every derived position.
    CapacityExceeded { level: u32, cap: u32 },
    /// A textual symbol string contained a character outside the alphabet.
    UnknownSymbol { symbol: char, index: usize },
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { level, cap } => {
                write!(f, "level {level} exceeds maximum level {cap}")
            }
            Self::UnknownSymbol { symbol, index } => {
                write!(f, "unknown symbol {symbol:?} at index {index}")
            }
        }
    }
}

impl std::error::Error for GrammarError {}
