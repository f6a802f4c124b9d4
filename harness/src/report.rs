//! Human-readable drift report.

use std::fmt::Write as _;

use crate::worlds::team_baselines::TeamDrift;

/// Line emitted when there is nothing to report.
pub const NO_DRIFT_LINE: &str = "No significant drift detected; teams are in harmony.";

/// Drift above this is reported as critical.
const CRITICAL_DRIFT: f64 = 0.30;

/// Render `drifts`, largest first.
///
/// Each entry shows severity, the team pair, the metric (or `summary`),
/// the amount as a percentage, the fold ordinal and its weight.
#[must_use]
pub fn drift_report(drifts: &[TeamDrift]) -> String {
    if drifts.is_empty() {
        return NO_DRIFT_LINE.to_owned();
    }

    let mut sorted: Vec<&TeamDrift> = drifts.iter().collect();
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let mut out = String::from("Drift analysis\n");
    for drift in sorted {
        let severity = if drift.amount > CRITICAL_DRIFT {
            "CRITICAL"
        } else {
            "WARNING"
        };
        let metric = drift.metric.as_deref().unwrap_or("summary");
        let _ = writeln!(
            out,
            "\n{severity}: {} <-> {} ({metric})\n  drift: {:.1}%\n  fold: {} (weight {:.3})",
            drift.team_a,
            drift.team_b,
            drift.amount * 100.0,
            drift.fold_level,
            drift.weight,
        );
    }
    out
}
