//! Dragonfold Kernel: the deterministic core of the boundary explorer.
//!
//! # API Surface
//!
//! - [`grammar::generator::Generator::generate`] -- expand the dragon grammar to a level
//! - [`path::interpret`] -- walk a symbol string, producing one [`path::Fold`] per move
//! - [`diagnostics`] -- fractal-dimension estimate, regime deviation, harmonic delays
//! - [`proof::hash::fold_path_digest`] -- bit-level fingerprint of a fold sequence
//!
//! # Module Dependency Direction
//!
//! `grammar` ← `path` ← `diagnostics`, `proof`
//!
//! One-way only. No cycles. `grammar` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostics;
pub mod grammar;
pub mod path;
pub mod proof;
