//! Path layer: fold records and the turtle interpreter.
//!
//! Depends on `grammar` only.

pub mod fold;
pub mod interpret;

pub use fold::{Direction, Fold, Heading, Point, Regime, RegimeCounts};
pub use interpret::interpret;
