//! Grid coordinates and the four movement directions.

use core::fmt;
use core::str::FromStr;

use crate::error::PlanError;

/// Integer grid coordinate. `x` grows to the east, `y` grows to the north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates a continuous position toward zero.
    ///
    /// Adversaries move in half steps, so the environment may report them
    /// between two cells; the planner always reasons about the cell they
    /// are leaving. Non-finite or out-of-range coordinates are rejected.
    pub fn from_continuous(x: f64, y: f64) -> Result<Self, PlanError> {
        fn truncate(value: f64) -> Option<i32> {
            let truncated = value.trunc();
            (truncated >= i32::MIN as f64 && truncated <= i32::MAX as f64)
                .then_some(truncated as i32)
        }

        match (truncate(x), truncate(y)) {
            (Some(cx), Some(cy)) => Ok(Self::new(cx, cy)),
            _ => Err(PlanError::InvalidPosition { x, y }),
        }
    }

    /// Cell one step away in `direction`, without any obstacle check.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four cardinal moves available to the agent.
///
/// Waiting in place is never a candidate action, so there is no `Stop`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    West,
    North,
    East,
    South,
}

impl Direction {
    /// Exploration order used for graph construction and MEU evaluation.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::South,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Direction after a 90° counter-clockwise turn.
    pub const fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Direction after a 90° clockwise turn.
    pub const fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Direction that leads from `from` to the orthogonally adjacent `to`.
    pub fn between(from: Cell, to: Cell) -> Result<Self, PlanError> {
        match (to.x - from.x, to.y - from.y) {
            (1, 0) => Ok(Direction::East),
            (-1, 0) => Ok(Direction::West),
            (0, 1) => Ok(Direction::North),
            (0, -1) => Ok(Direction::South),
            _ => Err(PlanError::NotAdjacent { from, to }),
        }
    }

    /// Parses a direction name such as `"North"` or `"west"`.
    pub fn parse(name: &str) -> Result<Self, PlanError> {
        Self::from_str(name).map_err(|_| PlanError::UnknownDirection(name.to_owned()))
    }
}
