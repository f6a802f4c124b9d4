//! Team-baseline world: folds independently reported metric baselines
//! along the dragon path, detects pairwise drift and, when drift is low
//! enough, computes a consensus baseline.
//!
//! The fold function rescales a team's summary and every metric by
//! `1 / weight`, so deeper folds shrink magnitude. Within each fold every
//! unordered pair of folded teams is compared on the summary and on each
//! metric key both teams report.

use std::collections::BTreeMap;

use tracing::{info, warn};

use dragonfold_kernel::path::fold::{Fold, Regime, PHI};
use dragonfold_search::contract::FoldStrategy;
use dragonfold_search::edge::BoundaryEdge;
use dragonfold_search::explorer::BoundaryExplorer;

use crate::error::HarnessError;
use crate::harmonize::{GeometricMean, Harmonizer};
use crate::policy::MergePolicy;

/// One team's metric baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamBaseline {
    pub team_id: String,
    /// Scalar summary score in `[0, 1]`.
    pub summary: f64,
    pub metrics: BTreeMap<String, f64>,
    pub timestamp_ms: f64,
    pub regime: Option<Regime>,
}

impl TeamBaseline {
    #[must_use]
    pub fn new(team_id: impl Into<String>, summary: f64) -> Self {
        Self {
            team_id: team_id.into(),
            summary,
            metrics: BTreeMap::new(),
            timestamp_ms: 0.0,
            regime: None,
        }
    }

    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn at(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Copy rescaled by `1 / fold.weight`, decorated with the fold ordinal.
    #[must_use]
    pub fn folded(&self, fold: &Fold) -> Self {
        let scale = fold.weight.recip();
        Self {
            team_id: format!("{}_fold_{}", self.team_id, fold.level),
            summary: self.summary * scale,
            metrics: self
                .metrics
                .iter()
                .map(|(name, value)| (name.clone(), value * scale))
                .collect(),
            timestamp_ms: self.timestamp_ms + fold.timestamp_ms,
            regime: Some(fold.regime),
        }
    }
}

/// Fold strategy for team baselines. Every fold applies; divergence is the
/// absolute summary change.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamFoldStrategy;

impl FoldStrategy for TeamFoldStrategy {
    type State = TeamBaseline;
    type Target = TeamBaseline;

    fn fold_state(&self, state: &TeamBaseline, fold: &Fold) -> Option<TeamBaseline> {
        Some(state.folded(fold))
    }

    fn divergence(&self, from: &TeamBaseline, to: &TeamBaseline) -> Option<f64> {
        Some((from.summary - to.summary).abs())
    }
}

/// A recorded drift between two teams at one fold.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDrift {
    pub team_a: String,
    pub team_b: String,
    pub amount: f64,
    /// Metric key, or `None` for the summary score.
    pub metric: Option<String>,
    pub fold_level: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Merge,
    Review,
    Reject,
}

impl Recommendation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Review => "review",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of folding team baselines.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    /// Consensus on merge, provisional consensus on review, `None` on reject.
    pub merged_baseline: Option<TeamBaseline>,
    pub drifts: Vec<TeamDrift>,
    /// Mean recorded drift amount; 0 when nothing was recorded.
    pub avg_drift: f64,
    /// `edges / teams²`.
    pub fractal_coverage: f64,
    /// `max(0, 1 − avg_drift / reject_threshold)`.
    pub harmonization_score: f64,
    pub recommendation: Recommendation,
}

/// Fold `teams` at `level` with the geometric-mean harmonizer.
///
/// # Errors
///
/// See [`fold_team_baselines_with`].
pub fn fold_team_baselines(
    explorer: &mut BoundaryExplorer,
    teams: &[TeamBaseline],
    level: u32,
    policy: &MergePolicy,
) -> Result<MergeResult, HarnessError> {
    fold_team_baselines_with(explorer, teams, level, policy, &GeometricMean)
}

/// Fold `teams` at `level`, detect drift and decide on a merge.
///
/// Fewer than two teams short-circuit to a pass-through merge without
/// exploring.
///
/// # Errors
///
/// - [`HarnessError::InvalidPolicy`] if `policy` fails validation
/// - [`HarnessError::Explore`] if the explorer rejects `level` or the team count
pub fn fold_team_baselines_with(
    explorer: &mut BoundaryExplorer,
    teams: &[TeamBaseline],
    level: u32,
    policy: &MergePolicy,
    harmonizer: &dyn Harmonizer,
) -> Result<MergeResult, HarnessError> {
    policy.validate()?;
    if teams.len() < 2 {
        return Ok(MergeResult {
            merged_baseline: teams.first().cloned(),
            drifts: Vec::new(),
            avg_drift: 0.0,
            fractal_coverage: 0.0,
            harmonization_score: 1.0,
            recommendation: Recommendation::Merge,
        });
    }

    let exploration = explorer.explore(teams, level, &TeamFoldStrategy)?;
    let fractal_coverage = exploration.coverage();
    let drifts = detect_drifts(&exploration.edges, policy.warning_threshold);
    let avg_drift = mean_amount(&drifts);
    let harmonization_score = (1.0 - avg_drift / policy.reject_threshold).max(0.0);

    let recommendation = if avg_drift < policy.harmonization_target {
        Recommendation::Merge
    } else if avg_drift < policy.reject_threshold {
        Recommendation::Review
    } else {
        Recommendation::Reject
    };
    let merged_baseline = match recommendation {
        Recommendation::Merge | Recommendation::Review => Some(consensus(teams, harmonizer)),
        Recommendation::Reject => None,
    };

    if recommendation == Recommendation::Reject {
        warn!(
            level,
            teams = teams.len(),
            drifts = drifts.len(),
            avg_drift,
            "team baselines rejected"
        );
    } else {
        info!(
            level,
            teams = teams.len(),
            drifts = drifts.len(),
            avg_drift,
            %recommendation,
            "team baselines folded"
        );
    }

    Ok(MergeResult {
        merged_baseline,
        drifts,
        avg_drift,
        fractal_coverage,
        harmonization_score,
        recommendation,
    })
}

/// Pairwise drift within each fold group of `edges`.
///
/// Relies on fold-major edge order: edges sharing a fold are contiguous.
fn detect_drifts(edges: &[BoundaryEdge<TeamBaseline>], threshold: f64) -> Vec<TeamDrift> {
    let mut drifts = Vec::new();
    for group in edges.chunk_by(|a, b| a.fold.level == b.fold.level) {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                let mut record = |amount: f64, metric: Option<&String>| {
                    if amount > threshold {
                        drifts.push(TeamDrift {
                            team_a: a.from.team_id.clone(),
                            team_b: b.from.team_id.clone(),
                            amount,
                            metric: metric.cloned(),
                            fold_level: a.fold.level,
                            weight: a.fold.weight,
                        });
                    }
                };
                record((a.to.summary - b.to.summary).abs(), None);
                for (name, value_a) in &a.to.metrics {
                    if let Some(value_b) = b.to.metrics.get(name) {
                        record((value_a - value_b).abs(), Some(name));
                    }
                }
            }
        }
    }
    drifts
}

#[allow(clippy::cast_precision_loss)]
fn mean_amount(drifts: &[TeamDrift]) -> f64 {
    if drifts.is_empty() {
        return 0.0;
    }
    drifts.iter().map(|d| d.amount).sum::<f64>() / drifts.len() as f64
}

/// Consensus over `teams` (at least one).
///
/// Summary is the harmonized summaries scaled by `φ / √n`. Each metric key
/// reported by any team is a weighted average over the teams reporting
/// it, with weight `φ^(−i/n)` for input position `i`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn consensus(teams: &[TeamBaseline], harmonizer: &dyn Harmonizer) -> TeamBaseline {
    let n = teams.len() as f64;
    let summaries: Vec<f64> = teams.iter().map(|t| t.summary).collect();
    let summary = harmonizer.harmonize(&summaries) * PHI / n.sqrt();

    let mut sums: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for (i, team) in teams.iter().enumerate() {
        let weight = PHI.powf(-(i as f64) / n);
        for (name, value) in &team.metrics {
            let entry = sums.entry(name.as_str()).or_insert((0.0, 0.0));
            entry.0 += value * weight;
            entry.1 += weight;
        }
    }
    let metrics = sums
        .into_iter()
        .map(|(name, (weighted, total))| (name.to_owned(), weighted / total))
        .collect();

    let ids: Vec<&str> = teams.iter().map(|t| t.team_id.as_str()).collect();
    TeamBaseline {
        team_id: format!("merged_{}", ids.join("_")),
        summary,
        metrics,
        timestamp_ms: teams
            .iter()
            .map(|t| t.timestamp_ms)
            .fold(f64::NEG_INFINITY, f64::max),
        regime: Some(Regime::Stabilization),
    }
}
