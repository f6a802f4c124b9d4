//! Typed exploration errors.
//!
//! `ExploreError` represents pre-flight failures only: every variant is
//! raised before any fold function runs. A fold function returning `None`
//! is not an error, and synthesized impossibilities are findings carried
//! on [`crate::edge::BoundaryEdge`], not failures.

use dragonfold_kernel::grammar::error::GrammarError;

/// Typed failure for pre-flight exploration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreError {
    /// The grammar rejected the requested level.
    Capacity(GrammarError),
    /// More initial states than the policy allows.
    StateBudgetExceeded { max_states: usize, actual: usize },
    /// `folds × states` exceeds the policy's probe budget.
    ProbeBudgetExceeded { max_probes: u64, actual: u64 },
    /// The policy itself is inconsistent.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for ExploreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capacity(e) => write!(f, "capacity exceeded: {e}"),
            Self::StateBudgetExceeded { max_states, actual } => {
                write!(f, "{actual} initial states exceed budget of {max_states}")
            }
            Self::ProbeBudgetExceeded { max_probes, actual } => {
                write!(f, "{actual} probes exceed budget of {max_probes}")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid explore policy: {detail}"),
        }
    }
}

impl std::error::Error for ExploreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Capacity(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GrammarError> for ExploreError {
    fn from(e: GrammarError) -> Self {
        Self::Capacity(e)
    }
}
