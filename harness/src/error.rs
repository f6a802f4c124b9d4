//! Typed harness errors.

use dragonfold_search::error::ExploreError;

/// Typed failure for world-level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The explorer rejected the request before probing.
    Explore(ExploreError),
    /// A world policy failed validation.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explore(e) => write!(f, "exploration failed: {e}"),
            Self::InvalidPolicy { detail } => write!(f, "invalid world policy: {detail}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Explore(e) => Some(e),
            Self::InvalidPolicy { .. } => None,
        }
    }
}

impl From<ExploreError> for HarnessError {
    fn from(e: ExploreError) -> Self {
        Self::Explore(e)
    }
}
