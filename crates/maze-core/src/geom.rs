//! Geometry primitives: [`Position`] and [`Direction`].
//!
//! Y grows upward: [`Direction::Top`] moves to `y + 1`, [`Direction::Bottom`]
//! to `y - 1`.

use std::fmt;

use crate::error::MazeError;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves, or [`Direction::None`].
///
/// `None` has a zero offset and is never a valid move. It exists so that
/// "no direction" can be represented without an `Option` at call sites that
/// mirror wall indices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    None,
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// The four moves in the fixed enumeration order used everywhere:
    /// Top, Right, Bottom, Left (clockwise from Top).
    pub const CARDINALS: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Integer offset `(dx, dy)` of one step in this direction.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, 1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, -1),
            Direction::Left => (-1, 0),
            Direction::None => (0, 0),
        }
    }

    /// Wall slot of this direction in [`CARDINALS`](Self::CARDINALS) order.
    /// `None` has no slot.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            Direction::Top => Some(0),
            Direction::Right => Some(1),
            Direction::Bottom => Some(2),
            Direction::Left => Some(3),
            Direction::None => None,
        }
    }

    /// The opposite direction: Top↔Bottom, Right↔Left.
    pub fn reverse(self) -> Result<Direction, MazeError> {
        match self {
            Direction::Top => Ok(Direction::Bottom),
            Direction::Right => Ok(Direction::Left),
            Direction::Bottom => Ok(Direction::Top),
            Direction::Left => Ok(Direction::Right),
            Direction::None => Err(MazeError::InvalidDirection(self)),
        }
    }

    /// Quarter turn clockwise. `None` stays `None`.
    #[inline]
    pub const fn clockwise(self) -> Direction {
        match self {
            Direction::Top => Direction::Right,
            Direction::Right => Direction::Bottom,
            Direction::Bottom => Direction::Left,
            Direction::Left => Direction::Top,
            Direction::None => Direction::None,
        }
    }

    /// Quarter turn counter-clockwise. `None` stays `None`.
    #[inline]
    pub const fn counter_clockwise(self) -> Direction {
        match self {
            Direction::Top => Direction::Left,
            Direction::Left => Direction::Bottom,
            Direction::Bottom => Direction::Right,
            Direction::Right => Direction::Top,
            Direction::None => Direction::None,
        }
    }

    /// The move that takes `from` to the grid-adjacent `to`.
    ///
    /// Fails with [`MazeError::InvalidDirection`] when the two positions are
    /// not exactly one cardinal step apart.
    pub fn between(from: Position, to: Position) -> Result<Direction, MazeError> {
        Direction::CARDINALS
            .into_iter()
            .find(|&d| from.step(d) == to)
            .ok_or(MazeError::InvalidDirection(Direction::None))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::None => "none",
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell address on a board.
///
/// Positions handed to a board are validated against its bounds; a position
/// computed by [`step`](Self::step) may fall outside and is then rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a position shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring position one step in `dir`. `Direction::None`
    /// returns `self`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        self.shift(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
