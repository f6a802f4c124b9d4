//! Fold path lock tests.
//!
//! Proves:
//! 1. The fold sequence for level L has exactly 2^L entries
//! 2. Regime counts sum to 2^L
//! 3. Repeated interpretation is bit-identical (digest and field-wise)
//! 4. Ordinals, weights and timestamps follow the fold ordinal
//! 5. Only the final fold is unconditionally Forward

use dragonfold_kernel::grammar::generator::{Generator, MAX_LEVEL};
use dragonfold_kernel::path::fold::{fold_weight, HARMONIC_PERIOD_MS};
use dragonfold_kernel::path::{interpret, Direction, Regime, RegimeCounts};
use dragonfold_kernel::proof::hash::fold_path_digest;
use lock_tests::fixtures::{path_digests, CANONICAL_LEVEL};

#[test]
fn fold_count_and_regime_sum_match_move_count() {
    let mut generator = Generator::new();
    for level in 0..=MAX_LEVEL {
        let folds = interpret(generator.generate(level).unwrap(), 1.0, 0.0);
        assert_eq!(folds.len(), 1usize << level, "level {level}");
        let counts = RegimeCounts::from_folds(&folds);
        assert_eq!(
            counts.exploration + counts.stabilization + counts.convergence,
            1usize << level
        );
    }
}

#[test]
fn repeated_interpretation_is_bit_identical() {
    let mut generator = Generator::new();
    let symbols = generator.generate(10).unwrap();
    let first = interpret(symbols, 2.5, 1_000.0);
    for _ in 0..5 {
        let again = interpret(symbols, 2.5, 1_000.0);
        assert_eq!(fold_path_digest(&again), fold_path_digest(&first));
        for (a, b) in first.iter().zip(&again) {
            assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
            assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
            assert_eq!(a.heading, b.heading);
            assert_eq!(a.regime, b.regime);
        }
    }
}

#[test]
fn fixture_digests_are_stable_across_generators() {
    assert_eq!(path_digests(CANONICAL_LEVEL), path_digests(CANONICAL_LEVEL));
    assert_ne!(path_digests(CANONICAL_LEVEL).1, path_digests(CANONICAL_LEVEL - 1).1);
}

#[test]
fn ordinal_drives_weight_and_timestamp() {
    let mut generator = Generator::new();
    let folds = interpret(generator.generate(6).unwrap(), 1.0, 500.0);
    for (ordinal, fold) in (0u32..).zip(&folds) {
        assert_eq!(fold.level, ordinal);
        assert_eq!(fold.weight.to_bits(), fold_weight(ordinal).to_bits());
        let expected = 500.0 + f64::from(ordinal) * HARMONIC_PERIOD_MS;
        assert!((fold.timestamp_ms - expected).abs() < 1e-9);
    }
}

#[test]
fn last_fold_is_forward_convergence() {
    let mut generator = Generator::new();
    for level in 0..=8 {
        let folds = interpret(generator.generate(level).unwrap(), 1.0, 0.0);
        let last = folds.last().unwrap();
        assert_eq!(last.direction, Direction::Forward);
        assert_eq!(last.regime, Regime::Convergence);
        let interior_forward = folds[..folds.len() - 1]
            .iter()
            .filter(|f| f.direction == Direction::Forward)
            .count();
        assert_eq!(interior_forward, 0, "level {level}");
    }
}

#[test]
fn regime_follows_direction() {
    let mut generator = Generator::new();
    let folds = interpret(generator.generate(9).unwrap(), 1.0, 0.0);
    for fold in &folds {
        assert_eq!(fold.regime, Regime::from(fold.direction));
    }
}
