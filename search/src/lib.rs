//! Dragonfold Search: generic fold-guided boundary exploration.
//!
//! Depends only on `dragonfold_kernel`. Domain worlds live in
//! `dragonfold_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! dragonfold_kernel  ←  dragonfold_search  ←  dragonfold_harness
//! (grammar, path)       (strategy, explorer)   (state machine, baselines)
//! ```
//!
//! # Key types
//!
//! - [`FoldStrategy`]: fold function plus impossibility predicate
//! - [`FnStrategy`]: adapts a plain closure into a strategy
//! - [`BoundaryEdge`]: one non-null fold result
//! - [`BoundaryExplorer`]: owns the grammar memo and runs [`BoundaryExplorer::explore`]
//! - [`ExplorePolicy`]: pre-flight level and cost budget

#![forbid(unsafe_code)]

pub mod contract;
pub mod edge;
pub mod error;
pub mod explorer;
pub mod policy;

pub use contract::{FnStrategy, FoldStrategy};
pub use edge::BoundaryEdge;
pub use error::ExploreError;
pub use explorer::{BoundaryExplorer, Exploration};
pub use policy::ExplorePolicy;
