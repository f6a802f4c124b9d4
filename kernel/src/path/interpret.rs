//! Turtle interpretation of a symbol string into folds.
//!
//! Two passes: [`trace_moves`] walks the string accumulating heading,
//! position and the logical clock, recording for each move the turn run
//! that follows it; [`interpret`] then classifies each move from that
//! lookahead. No already-built fold is ever rewritten.

use crate::grammar::symbol::{Symbol, Turn};

use super::fold::{fold_weight, Direction, Fold, Heading, Point, Regime, HARMONIC_PERIOD_MS};

/// A move as traced, before classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracedMove {
    /// 0-based move ordinal.
    pub ordinal: u32,
    /// Position after the move.
    pub position: Point,
    /// Heading during the move.
    pub heading: Heading,
    /// Logical timestamp (ms).
    pub timestamp_ms: f64,
    /// Last turn in the run of turns immediately following this move.
    pub following: Option<Turn>,
}

/// Walk `symbols`, producing one [`TracedMove`] per move symbol.
///
/// Turns before the first move rotate the heading but classify nothing.
#[must_use]
pub fn trace_moves(symbols: &[Symbol], scale: f64, start_time_ms: f64) -> Vec<TracedMove> {
    let mut moves = Vec::with_capacity(symbols.len() / 2 + 1);
    let mut heading = Heading::East;
    let mut position = Point::default();
    let mut ordinal: u32 = 0;

    for (index, symbol) in symbols.iter().enumerate() {
        if let Some(turn) = symbol.turn() {
            heading = heading.turned(turn);
            continue;
        }
        let (dx, dy) = heading.unit();
        position = Point {
            x: position.x + scale * dx,
            y: position.y + scale * dy,
        };
        let following = symbols[index + 1..]
            .iter()
            .map_while(|s| s.turn())
            .last();
        moves.push(TracedMove {
            ordinal,
            position,
            heading,
            timestamp_ms: start_time_ms + f64::from(ordinal) * HARMONIC_PERIOD_MS,
            following,
        });
        ordinal = ordinal.saturating_add(1);
    }
    moves
}

/// Interpret `symbols` as a dragon path.
///
/// Each move yields a fold whose direction and regime describe the turn
/// taken after arriving: left → {Left, Exploration}, right → {Right,
/// Stabilization}, no turn → {Forward, Convergence}.
#[must_use]
pub fn interpret(symbols: &[Symbol], scale: f64, start_time_ms: f64) -> Vec<Fold> {
    trace_moves(symbols, scale, start_time_ms)
        .into_iter()
        .map(|m| {
            let direction = m.following.map_or(Direction::Forward, Direction::from);
            Fold {
                level: m.ordinal,
                direction,
                position: m.position,
                heading: m.heading,
                weight: fold_weight(m.ordinal),
                regime: Regime::from(direction),
                timestamp_ms: m.timestamp_ms,
            }
        })
        .collect()
}
