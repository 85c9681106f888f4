use maze_core::{Board, Cell, Direction, MazeError, Position};

use crate::solve::Solve;

/// Availability policy: which directions are candidates for leaving a cell.
pub trait Availability {
    /// Append the candidate directions of `cell` into `buf`, in the order
    /// they should be offered. The caller clears `buf` before calling.
    fn available(&self, cell: &Cell, buf: &mut Vec<Direction>);
}

/// Selection policy: which of the remaining candidates to try next.
pub trait Selection {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// A pathfinding strategy connecting two cells through open walls.
///
/// Solvers never mutate the board. `Ok(None)` means no path exists; errors
/// are reserved for out-of-bounds endpoints and broken invariants.
pub trait Solver {
    fn solve(
        &self,
        board: &Board,
        start: Position,
        target: Position,
    ) -> Result<Option<Solve>, MazeError>;
}
