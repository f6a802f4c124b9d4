//! Fold strategy contract.

use std::marker::PhantomData;

use dragonfold_kernel::path::fold::Fold;

/// A domain's fold function plus its impossibility predicate.
///
/// # Contract
///
/// - `fold_state` must be pure: same `(state, fold)` → same result.
///   `None` means the fold does not apply to that state.
/// - `is_impossible` and `divergence` see the originating state, the fold,
///   and the produced target, and must also be pure.
pub trait FoldStrategy {
    /// Caller-owned initial state.
    type State: Clone;
    /// What a fold produces. Often `Self::State`; may be a tagged result.
    type Target;

    /// Apply `fold` to `state`.
    fn fold_state(&self, state: &Self::State, fold: &Fold) -> Option<Self::Target>;

    /// Whether the produced edge is an impossibility finding.
    ///
    /// Default: nothing is impossible.
    fn is_impossible(&self, _from: &Self::State, _fold: &Fold, _to: &Self::Target) -> bool {
        false
    }

    /// Optional scalar distance between `from` and `to`.
    fn divergence(&self, _from: &Self::State, _to: &Self::Target) -> Option<f64> {
        None
    }
}

/// Adapts a closure `Fn(&S, &Fold) -> Option<S>` into a [`FoldStrategy`]
/// with the default (never impossible) predicate.
pub struct FnStrategy<S, F> {
    fold_fn: F,
    _state: PhantomData<fn(&S) -> S>,
}

impl<S, F> FnStrategy<S, F>
where
    F: Fn(&S, &Fold) -> Option<S>,
{
    #[must_use]
    pub fn new(fold_fn: F) -> Self {
        Self {
            fold_fn,
            _state: PhantomData,
        }
    }
}

impl<S, F> FoldStrategy for FnStrategy<S, F>
where
    S: Clone,
    F: Fn(&S, &Fold) -> Option<S>,
{
    type State = S;
    type Target = S;

    fn fold_state(&self, state: &S, fold: &Fold) -> Option<S> {
        (self.fold_fn)(state, fold)
    }
}
