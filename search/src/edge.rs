//! Boundary edge: one non-null fold result.

use dragonfold_kernel::path::fold::{Fold, Regime};

/// The result of applying a fold function to one state at one fold.
///
/// `fold` is always drawn from the sequence generated for the explored
/// level; `regime` is copied from it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryEdge<S, T = S> {
    pub from: S,
    pub to: T,
    pub fold: Fold,
    pub is_impossible: bool,
    pub regime: Regime,
    pub divergence: Option<f64>,
}

impl<S, T> BoundaryEdge<S, T> {
    /// The fold's weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.fold.weight
    }
}
