//! Grammar layer: dragon-curve symbols, rewriting, and the per-level memo.
//!
//! Depends on nothing internal. `path` consumes the symbol strings produced here.

pub mod error;
pub mod generator;
pub mod symbol;
