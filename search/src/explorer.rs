//! Explorer entry point and the fold × state probe loop.

use tracing::debug;

use dragonfold_kernel::diagnostics::{path_metrics, PathMetrics};
use dragonfold_kernel::grammar::generator::Generator;
use dragonfold_kernel::grammar::symbol::Symbol;
use dragonfold_kernel::path::fold::{Fold, RegimeCounts};
use dragonfold_kernel::path::interpret;

use crate::contract::FoldStrategy;
use crate::edge::BoundaryEdge;
use crate::error::ExploreError;
use crate::policy::ExplorePolicy;

/// Step length used for explorer-generated paths.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Logical start time used for explorer-generated paths.
pub const DEFAULT_START_TIME_MS: f64 = 0.0;

/// Result of one exploration.
///
/// `edges` are in fold-major order (outer loop over folds, inner over
/// states), so edge weights are non-decreasing.
#[derive(Debug, Clone)]
pub struct Exploration<S, T = S> {
    pub level: u32,
    pub fold_count: usize,
    pub state_count: usize,
    pub edges: Vec<BoundaryEdge<S, T>>,
}

impl<S, T> Exploration<S, T> {
    /// Number of fold-function calls made.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.fold_count * self.state_count
    }

    /// Edges flagged impossible, in exploration order.
    pub fn impossible_edges(&self) -> impl Iterator<Item = &BoundaryEdge<S, T>> {
        self.edges.iter().filter(|e| e.is_impossible)
    }

    /// Per-regime edge counts.
    #[must_use]
    pub fn regime_counts(&self) -> RegimeCounts {
        let mut counts = RegimeCounts::default();
        for edge in &self.edges {
            counts.record(edge.regime);
        }
        counts
    }

    /// `edges / states²`: a sampling upper bound on transition coverage.
    /// Zero when there are no states.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage(&self) -> f64 {
        if self.state_count == 0 {
            return 0.0;
        }
        let possible = self.state_count * self.state_count;
        self.edges.len() as f64 / possible as f64
    }

    /// Consume into the edge list.
    #[must_use]
    pub fn into_edges(self) -> Vec<BoundaryEdge<S, T>> {
        self.edges
    }
}

/// Boundary explorer owning the grammar memo and an exploration budget.
#[derive(Debug, Clone, Default)]
pub struct BoundaryExplorer {
    generator: Generator,
    policy: ExplorePolicy,
}

impl BoundaryExplorer {
    /// Create an explorer with a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError::InvalidPolicy`] if `policy` fails validation.
    pub fn new(policy: ExplorePolicy) -> Result<Self, ExploreError> {
        policy.validate()?;
        Ok(Self {
            generator: Generator::new(),
            policy,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &ExplorePolicy {
        &self.policy
    }

    /// Symbol string for `level` (memoized).
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError::Capacity`] when `level` exceeds the grammar cap.
    pub fn generate(&mut self, level: u32) -> Result<&[Symbol], ExploreError> {
        Ok(self.generator.generate(level)?)
    }

    /// Fold sequence for `level` at the default scale and start time.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError::Capacity`] when `level` exceeds the grammar cap.
    pub fn fold_path(&mut self, level: u32) -> Result<Vec<Fold>, ExploreError> {
        let symbols = self.generator.generate(level)?;
        Ok(interpret(symbols, DEFAULT_SCALE, DEFAULT_START_TIME_MS))
    }

    /// Path metrics for `level`.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError::Capacity`] when `level` exceeds the grammar cap.
    pub fn metrics(&mut self, level: u32) -> Result<PathMetrics, ExploreError> {
        let folds = self.fold_path(level)?;
        Ok(path_metrics(level, &folds))
    }

    /// Regime-ratio deviation for `level`, in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError::Capacity`] when `level` exceeds the grammar cap.
    pub fn regime_deviation(&mut self, level: u32) -> Result<f64, ExploreError> {
        Ok(self.metrics(level)?.regime_deviation())
    }

    /// Drop the grammar memo.
    pub fn clear_cache(&mut self) {
        self.generator.clear_cache();
    }

    /// Probe every `(fold, state)` pair at `level` with `strategy`.
    ///
    /// `None` results are dropped. Each `Some` becomes one
    /// [`BoundaryEdge`], flagged by [`FoldStrategy::is_impossible`]. An
    /// empty state set yields an empty exploration.
    ///
    /// # Errors
    ///
    /// Pre-flight only; see [`ExplorePolicy::admit`]. No fold function is
    /// called when an error is returned.
    pub fn explore<W: FoldStrategy>(
        &mut self,
        states: &[W::State],
        level: u32,
        strategy: &W,
    ) -> Result<Exploration<W::State, W::Target>, ExploreError> {
        self.policy.admit(level, states.len())?;
        let folds = self.fold_path(level)?;

        let mut edges = Vec::new();
        for fold in &folds {
            for state in states {
                let Some(to) = strategy.fold_state(state, fold) else {
                    continue;
                };
                let is_impossible = strategy.is_impossible(state, fold, &to);
                let divergence = strategy.divergence(state, &to);
                edges.push(BoundaryEdge {
                    from: state.clone(),
                    to,
                    fold: fold.clone(),
                    is_impossible,
                    regime: fold.regime,
                    divergence,
                });
            }
        }

        let exploration = Exploration {
            level,
            fold_count: folds.len(),
            state_count: states.len(),
            edges,
        };
        debug!(
            level,
            folds = exploration.fold_count,
            states = exploration.state_count,
            edges = exploration.edges.len(),
            impossible = exploration.impossible_edges().count(),
            "boundary exploration complete"
        );
        Ok(exploration)
    }
}
