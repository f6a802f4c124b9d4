//! Canonical hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_bytes || data`. Floats are committed by
//! their IEEE-754 bit patterns, so two digests agree only when the inputs
//! are bit-identical.

use sha2::{Digest, Sha256};

use super::hash_domain::HashDomain;
use crate::grammar::symbol::Symbol;
use crate::path::fold::{Direction, Fold, Regime};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon,
    /// empty algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex_digest}");
    ContentHash { colon: 6, full }
}

/// Digest of a symbol string (one canonical character per symbol, UTF-8).
#[must_use]
pub fn symbol_string_digest(symbols: &[Symbol]) -> ContentHash {
    let mut data = String::with_capacity(symbols.len());
    data.extend(symbols.iter().map(|s| s.as_char()));
    canonical_hash(HashDomain::SymbolString, data.as_bytes())
}

/// Digest of a fold sequence, committing every field bit-for-bit.
#[must_use]
pub fn fold_path_digest(folds: &[Fold]) -> ContentHash {
    let mut data = Vec::with_capacity(folds.len() * FOLD_RECORD_LEN);
    for fold in folds {
        encode_fold(&mut data, fold);
    }
    canonical_hash(HashDomain::FoldPath, &data)
}

const FOLD_RECORD_LEN: usize = 4 + 1 + 8 + 8 + 2 + 8 + 1 + 8;

fn encode_fold(buf: &mut Vec<u8>, fold: &Fold) {
    buf.extend_from_slice(&fold.level.to_le_bytes());
    buf.push(direction_tag(fold.direction));
    buf.extend_from_slice(&fold.position.x.to_bits().to_le_bytes());
    buf.extend_from_slice(&fold.position.y.to_bits().to_le_bytes());
    buf.extend_from_slice(&fold.heading.degrees().to_le_bytes());
    buf.extend_from_slice(&fold.weight.to_bits().to_le_bytes());
    buf.push(regime_tag(fold.regime));
    buf.extend_from_slice(&fold.timestamp_ms.to_bits().to_le_bytes());
}

const fn direction_tag(direction: Direction) -> u8 {
    match direction {
        Direction::Left => b'L',
        Direction::Right => b'R',
        Direction::Forward => b'F',
    }
}

const fn regime_tag(regime: Regime) -> u8 {
    match regime {
        Regime::Exploration => b'E',
        Regime::Stabilization => b'S',
        Regime::Convergence => b'C',
    }
}
