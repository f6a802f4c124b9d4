//! World implementations for the boundary explorer.

pub mod state_machine;
pub mod team_baselines;
