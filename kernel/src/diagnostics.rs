//! Path diagnostics: ranking heuristics over a generated fold sequence.
//!
//! None of these values feed control flow. The fractal dimension is a
//! heuristic score, not a validated Hausdorff measurement.

use crate::path::fold::{Fold, Regime, RegimeCounts, HARMONIC_FREQUENCY_HZ, HARMONIC_PERIOD_MS};

/// Target regime fractions, in `Regime::ALL` order.
pub const TARGET_REGIME_FRACTIONS: [f64; 3] = [0.30, 0.20, 0.50];

/// Fractal-dimension estimate `log(2^level) / log(1/scale)` with
/// `scale = 2^(-level/2)`.
///
/// Level 0 is a single segment and reports 1.0.
#[must_use]
pub fn fractal_dimension(level: u32) -> f64 {
    if level == 0 {
        return 1.0;
    }
    let level = f64::from(level);
    let segments = level.exp2();
    let scale = (-level / 2.0).exp2();
    segments.ln() / (1.0 / scale).ln()
}

/// Mean absolute difference between observed and target regime fractions.
///
/// Lies in `[0, 1]`; 0 is a perfect match.
#[must_use]
pub fn regime_deviation(counts: &RegimeCounts) -> f64 {
    let observed = counts.fractions();
    let total: f64 = observed
        .iter()
        .zip(TARGET_REGIME_FRACTIONS)
        .map(|(o, t)| (o - t).abs())
        .sum();
    total / 3.0
}

/// Backoff schedule `delay[i] = HARMONIC_PERIOD_MS × 2^i`.
#[must_use]
pub fn harmonic_delays(steps: usize) -> Vec<f64> {
    harmonic_delays_from(HARMONIC_PERIOD_MS, steps)
}

/// Backoff schedule `delay[i] = base_period_ms × 2^i`.
#[must_use]
pub fn harmonic_delays_from(base_period_ms: f64, steps: usize) -> Vec<f64> {
    let mut delays = Vec::with_capacity(steps);
    let mut delay = base_period_ms;
    for _ in 0..steps {
        delays.push(delay);
        delay *= 2.0;
    }
    delays
}

/// Summary metrics for a generated path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMetrics {
    pub level: u32,
    pub total_folds: usize,
    pub regimes: RegimeCounts,
    pub fractal_dimension: f64,
    /// Sum of distances between consecutive fold positions.
    pub boundary_length: f64,
    /// Area of the bounding box of all fold positions.
    pub bounding_area: f64,
    /// Exploration count over stabilization count (denominator floored at 1).
    pub exploration_ratio: f64,
    pub harmonic_frequency_hz: f64,
}

impl PathMetrics {
    /// Deviation of this path's regime mix from the target fractions.
    #[must_use]
    pub fn regime_deviation(&self) -> f64 {
        regime_deviation(&self.regimes)
    }
}

/// Compute [`PathMetrics`] for `folds` generated at `level`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn path_metrics(level: u32, folds: &[Fold]) -> PathMetrics {
    let regimes = RegimeCounts::from_folds(folds);

    let boundary_length = folds
        .windows(2)
        .map(|w| w[0].position.distance(w[1].position))
        .sum();

    let bounding_area = if folds.is_empty() {
        0.0
    } else {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for fold in folds {
            min_x = min_x.min(fold.position.x);
            max_x = max_x.max(fold.position.x);
            min_y = min_y.min(fold.position.y);
            max_y = max_y.max(fold.position.y);
        }
        (max_x - min_x) * (max_y - min_y)
    };

    let exploration_ratio =
        regimes.get(Regime::Exploration) as f64 / regimes.get(Regime::Stabilization).max(1) as f64;

    PathMetrics {
        level,
        total_folds: folds.len(),
        regimes,
        fractal_dimension: fractal_dimension(level),
        boundary_length,
        bounding_area,
        exploration_ratio,
        harmonic_frequency_hz: HARMONIC_FREQUENCY_HZ,
    }
}
