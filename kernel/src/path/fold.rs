//! Fold records and their classification enums.

use crate::grammar::symbol::Turn;

/// Golden ratio, base of the fold weight.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Harmonic frequency of the logical clock (Hz).
pub const HARMONIC_FREQUENCY_HZ: f64 = 4.909;

/// Harmonic period (ms): the logical-clock step per move and the base of
/// the backoff schedule. ≈ 203.7 ms.
pub const HARMONIC_PERIOD_MS: f64 = 1000.0 / HARMONIC_FREQUENCY_HZ;

/// Divisor applied to the ordinal before exponentiation, keeping
/// `PHI^ordinal` finite at level 12.
pub const WEIGHT_ORDINAL_DIVISOR: f64 = 10.0;

/// Relative-importance weight of the fold at `ordinal`.
///
/// Strictly increasing in `ordinal` and always positive.
#[must_use]
pub fn fold_weight(ordinal: u32) -> f64 {
    PHI.powf(f64::from(ordinal) / WEIGHT_ORDINAL_DIVISOR)
}

/// What the path does after arriving at a fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Left,
    Right,
    Forward,
}

/// Reporting label derived from [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Regime {
    Exploration,
    Stabilization,
    Convergence,
}

impl Regime {
    /// All regimes in reporting order.
    pub const ALL: [Regime; 3] = [
        Regime::Exploration,
        Regime::Stabilization,
        Regime::Convergence,
    ];

    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exploration => "exploration",
            Self::Stabilization => "stabilization",
            Self::Convergence => "convergence",
        }
    }
}

impl From<Direction> for Regime {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::Exploration,
            Direction::Right => Self::Stabilization,
            Direction::Forward => Self::Convergence,
        }
    }
}

impl From<Turn> for Direction {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Left => Self::Left,
            Turn::Right => Self::Right,
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned heading. Starts at [`Heading::East`] (0°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    East,
    North,
    West,
    South,
}

impl Heading {
    /// Heading in degrees, in `{0, 90, 180, 270}`.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::East => 0,
            Self::North => 90,
            Self::West => 180,
            Self::South => 270,
        }
    }

    /// Heading after a quarter turn, wrapped to `[0, 360)`.
    #[must_use]
    pub const fn turned(self, turn: Turn) -> Self {
        match (self, turn) {
            (Self::East, Turn::Left) | (Self::West, Turn::Right) => Self::North,
            (Self::North, Turn::Left) | (Self::South, Turn::Right) => Self::West,
            (Self::West, Turn::Left) | (Self::East, Turn::Right) => Self::South,
            (Self::South, Turn::Left) | (Self::North, Turn::Right) => Self::East,
        }
    }

    /// Exact unit step `(dx, dy)` along this heading.
    #[must_use]
    pub const fn unit(self) -> (f64, f64) {
        match self {
            Self::East => (1.0, 0.0),
            Self::North => (0.0, 1.0),
            Self::West => (-1.0, 0.0),
            Self::South => (0.0, -1.0),
        }
    }
}

/// Accumulated 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One step of a generated path. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    /// 0-based ordinal of the move in the path.
    pub level: u32,
    /// Turn taken after arriving here (`Forward` when none follows).
    pub direction: Direction,
    /// Position after the move.
    pub position: Point,
    /// Heading during the move.
    pub heading: Heading,
    /// `PHI^(level / 10)`.
    pub weight: f64,
    /// Always `Regime::from(direction)`.
    pub regime: Regime,
    /// Logical clock (ms): `start + level × HARMONIC_PERIOD_MS`.
    pub timestamp_ms: f64,
}

/// Per-regime fold counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegimeCounts {
    pub exploration: usize,
    pub stabilization: usize,
    pub convergence: usize,
}

impl RegimeCounts {
    /// Tally the regimes of `folds`.
    #[must_use]
    pub fn from_folds(folds: &[Fold]) -> Self {
        let mut counts = Self::default();
        for fold in folds {
            counts.record(fold.regime);
        }
        counts
    }

    /// Add one observation of `regime`.
    pub fn record(&mut self, regime: Regime) {
        match regime {
            Regime::Exploration => self.exploration += 1,
            Regime::Stabilization => self.stabilization += 1,
            Regime::Convergence => self.convergence += 1,
        }
    }

    /// Count for `regime`.
    #[must_use]
    pub fn get(&self, regime: Regime) -> usize {
        match regime {
            Regime::Exploration => self.exploration,
            Regime::Stabilization => self.stabilization,
            Regime::Convergence => self.convergence,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.exploration + self.stabilization + self.convergence
    }

    /// Fraction of the total per regime, in `Regime::ALL` order.
    /// All zero when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fractions(&self) -> [f64; 3] {
        let total = self.total();
        if total == 0 {
            return [0.0; 3];
        }
        Regime::ALL.map(|r| self.get(r) as f64 / total as f64)
    }
}
