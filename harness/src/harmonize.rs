//! Harmonizer seam: reduces a list of scores to one score.

/// Contract: `list<number> → number`. Must be pure.
pub trait Harmonizer {
    fn harmonize(&self, values: &[f64]) -> f64;
}

/// Geometric mean. Empty input yields 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricMean;

impl Harmonizer for GeometricMean {
    #[allow(clippy::cast_precision_loss)]
    fn harmonize(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let product: f64 = values.iter().product();
        product.powf(1.0 / values.len() as f64)
    }
}

impl<F> Harmonizer for F
where
    F: Fn(&[f64]) -> f64,
{
    fn harmonize(&self, values: &[f64]) -> f64 {
        self(values)
    }
}
