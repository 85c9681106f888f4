//! The [`MazeError`] type shared by board construction, generation and
//! solving.

use thiserror::Error;

use crate::geom::{Direction, Position};

/// Structural errors. A missing path is not an error: solvers report it as
/// `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Board width or height below 1.
    #[error("invalid board dimension {width}x{height}: both must be at least 1")]
    InvalidDimension { width: i32, height: i32 },

    /// A position outside `[0, width) x [0, height)`.
    #[error("position {pos} is outside the {width}x{height} board")]
    OutOfBounds {
        pos: Position,
        width: i32,
        height: i32,
    },

    /// `Direction::None`, or two cells that are not adjacent, where a
    /// concrete move is required.
    #[error("invalid direction {0} where a move is required")]
    InvalidDirection(Direction),

    /// A loaded board whose cells do not describe a consistent grid.
    #[error("inconsistent board: {0}")]
    InconsistentBoard(&'static str),
}
