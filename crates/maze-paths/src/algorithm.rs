use std::fmt;

use maze_core::{Board, MazeError, Position};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::solve::Solve;
use crate::traits::Solver;
use crate::wall_follow::WallFollower;

/// The closed set of solving strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Bfs,
    WallFollow { left_handed: bool },
}

impl Algorithm {
    /// Whether the strategy always returns a shortest path.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::WallFollow { .. })
    }
}

impl Solver for Algorithm {
    fn solve(
        &self,
        board: &Board,
        start: Position,
        target: Position,
    ) -> Result<Option<Solve>, MazeError> {
        match *self {
            Algorithm::AStar => AStar.solve(board, start, target),
            Algorithm::Bfs => Bfs.solve(board, start, target),
            Algorithm::WallFollow { left_handed } => {
                WallFollower::new(left_handed).solve(board, start, target)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::AStar => f.write_str("A*"),
            Algorithm::Bfs => f.write_str("BFS"),
            Algorithm::WallFollow { left_handed: true } => f.write_str("left-hand wall follower"),
            Algorithm::WallFollow { left_handed: false } => {
                f.write_str("right-hand wall follower")
            }
        }
    }
}

/// Connect `start` to `target` on `board` with `algorithm`.
///
/// Returns `Ok(None)` when no path exists. Fails with
/// [`MazeError::OutOfBounds`] if either endpoint is off the board.
pub fn solve(
    board: &Board,
    start: Position,
    target: Position,
    algorithm: Algorithm,
) -> Result<Option<Solve>, MazeError> {
    algorithm.solve(board, start, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Direction;

    const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::WallFollow { left_handed: true },
        Algorithm::WallFollow { left_handed: false },
    ];

    #[test]
    fn every_algorithm_solves_a_corridor() {
        let mut b = Board::new(4, 1).unwrap();
        for x in 0..3 {
            b.connect(Position::new(x, 0), Direction::Right).unwrap();
        }
        for algo in ALL {
            let s = solve(&b, Position::new(3, 0), Position::new(0, 0), algo)
                .unwrap()
                .unwrap();
            assert_eq!(s.steps(), [Direction::Left; 3], "{algo}");
            assert_eq!(s.start(), Position::new(3, 0));
            assert_eq!(s.target(), Position::new(0, 0));
        }
    }

    #[test]
    fn every_algorithm_reports_no_path() {
        let b = Board::new(3, 3).unwrap();
        for algo in ALL {
            assert_eq!(
                solve(&b, Position::new(0, 0), Position::new(2, 2), algo),
                Ok(None),
                "{algo}"
            );
        }
    }

    #[test]
    fn display_and_optimality() {
        assert_eq!(Algorithm::default(), Algorithm::AStar);
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
        assert!(Algorithm::AStar.is_optimal());
        assert!(!Algorithm::WallFollow { left_handed: true }.is_optimal());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        let a = Algorithm::WallFollow { left_handed: true };
        let json = serde_json::to_string(&a).unwrap();
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
