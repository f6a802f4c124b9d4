//! Dragonfold Harness: domain worlds driven through the boundary explorer.
//!
//! Each world supplies a [`dragonfold_search::FoldStrategy`] and folds the
//! explorer's edges into a domain report:
//!
//! - [`worlds::state_machine`]: impossible transitions and contract-test
//!   descriptors for a declared state machine
//! - [`worlds::team_baselines`]: pairwise drift across team metric
//!   baselines and a conditional consensus
//!
//! Worlds never mutate caller-owned inputs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod harmonize;
pub mod policy;
pub mod report;
pub mod worlds;
