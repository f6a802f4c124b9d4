//! World policies: thresholds and limits applied when folding explorer
//! edges into domain reports.
//!
//! Policies are plain values with defaults; worlds validate them before
//! any exploration runs.

use crate::error::HarnessError;

/// Default validity floor: states scoring below it are impossible.
const DEFAULT_VALIDITY_FLOOR: f64 = 0.3;
/// Default number of critical paths reported.
const DEFAULT_CRITICAL_PATH_LIMIT: usize = 10;

/// Drift above this is recorded.
const DEFAULT_WARNING_THRESHOLD: f64 = 0.15;
/// Average drift below this merges outright.
const DEFAULT_HARMONIZATION_TARGET: f64 = 0.10;
/// Average drift at or above this rejects the merge.
const DEFAULT_REJECT_THRESHOLD: f64 = 0.30;

/// Policy for the state-machine world.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMachinePolicy {
    /// States with a validity score strictly below this are impossible.
    pub validity_floor: f64,
    /// How many impossible edges to surface as critical paths.
    pub critical_path_limit: usize,
}

impl StateMachinePolicy {
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidPolicy`] if `validity_floor` is not
    /// within `[0, 1]`.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if !(0.0..=1.0).contains(&self.validity_floor) {
            return Err(HarnessError::InvalidPolicy {
                detail: format!("validity_floor {} outside [0, 1]", self.validity_floor),
            });
        }
        Ok(())
    }
}

impl Default for StateMachinePolicy {
    fn default() -> Self {
        Self {
            validity_floor: DEFAULT_VALIDITY_FLOOR,
            critical_path_limit: DEFAULT_CRITICAL_PATH_LIMIT,
        }
    }
}

/// Policy for the team-baseline world.
///
/// Requires `0 < harmonization_target <= reject_threshold <= 1` and
/// `0 < warning_threshold <= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergePolicy {
    pub warning_threshold: f64,
    pub harmonization_target: f64,
    pub reject_threshold: f64,
}

impl MergePolicy {
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidPolicy`] if any threshold is outside
    /// `(0, 1]` or the merge/reject thresholds are out of order.
    pub fn validate(&self) -> Result<(), HarnessError> {
        for (name, value) in [
            ("warning_threshold", self.warning_threshold),
            ("harmonization_target", self.harmonization_target),
            ("reject_threshold", self.reject_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(HarnessError::InvalidPolicy {
                    detail: format!("{name} {value} outside (0, 1]"),
                });
            }
        }
        if self.harmonization_target > self.reject_threshold {
            return Err(HarnessError::InvalidPolicy {
                detail: format!(
                    "harmonization_target {} above reject_threshold {}",
                    self.harmonization_target, self.reject_threshold
                ),
            });
        }
        Ok(())
    }
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            harmonization_target: DEFAULT_HARMONIZATION_TARGET,
            reject_threshold: DEFAULT_REJECT_THRESHOLD,
        }
    }
}
