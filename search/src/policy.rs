//! Exploration policy types.

use dragonfold_kernel::grammar::generator::{moves_at_level, MAX_LEVEL};

use crate::error::ExploreError;

/// Pre-flight budget for [`crate::explorer::BoundaryExplorer::explore`].
///
/// Exploration costs `2^level × states` fold-function calls. The grammar
/// caps `level` at [`MAX_LEVEL`]; this policy lets callers tighten both
/// factors for interactive latency. The default bounds only the level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorePolicy {
    /// Deepest level accepted. Must not exceed [`MAX_LEVEL`].
    pub max_level: u32,
    /// Largest initial state set accepted.
    pub max_states: usize,
    /// Cap on `folds × states`.
    pub max_probes: u64,
}

impl ExplorePolicy {
    /// Validate internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError::InvalidPolicy`] if `max_level` exceeds the
    /// grammar cap or either budget is zero.
    pub fn validate(&self) -> Result<(), ExploreError> {
        if self.max_level > MAX_LEVEL {
            return Err(ExploreError::InvalidPolicy {
                detail: format!(
                    "max_level {} exceeds grammar cap {MAX_LEVEL}",
                    self.max_level
                ),
            });
        }
        if self.max_states == 0 {
            return Err(ExploreError::InvalidPolicy {
                detail: "max_states must be positive".into(),
            });
        }
        if self.max_probes == 0 {
            return Err(ExploreError::InvalidPolicy {
                detail: "max_probes must be positive".into(),
            });
        }
        Ok(())
    }

    /// Check a concrete `(level, state_count)` request against this budget.
    ///
    /// # Errors
    ///
    /// - [`ExploreError::Capacity`] if `level > max_level`
    /// - [`ExploreError::StateBudgetExceeded`] if `state_count > max_states`
    /// - [`ExploreError::ProbeBudgetExceeded`] if `2^level × state_count > max_probes`
    pub fn admit(&self, level: u32, state_count: usize) -> Result<(), ExploreError> {
        if level > self.max_level {
            return Err(ExploreError::Capacity(
                dragonfold_kernel::grammar::error::GrammarError::CapacityExceeded {
                    level,
                    cap: self.max_level,
                },
            ));
        }
        if state_count > self.max_states {
            return Err(ExploreError::StateBudgetExceeded {
                max_states: self.max_states,
                actual: state_count,
            });
        }
        let probes = moves_at_level(level).saturating_mul(state_count as u64);
        if probes > self.max_probes {
            return Err(ExploreError::ProbeBudgetExceeded {
                max_probes: self.max_probes,
                actual: probes,
            });
        }
        Ok(())
    }
}

impl Default for ExplorePolicy {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            max_states: usize::MAX,
            max_probes: u64::MAX,
        }
    }
}
