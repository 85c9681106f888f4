//! "Hand on wall" traversal.
//!
//! The walker keeps one hand on the wall: from each cell it takes the first
//! unvisited opening on its hand side ([`RightHandStrategy`] or
//! [`LeftHandStrategy`]), and backs up one step at dead ends. It finds a
//! path on any tree maze but not necessarily the shortest. On boards with
//! loops the `visited` bookkeeping decides which branches are explored;
//! prefer [`AStar`](crate::AStar) or [`Bfs`](crate::Bfs) there.

use maze_core::{Board, Direction, MazeError, Position};

use crate::neighbors::{
    FirstNextStrategy, LeftHandStrategy, RightHandStrategy, available_directions,
};
use crate::solve::{History, Solve, checked_index};
use crate::traits::Solver;

/// Heading of the walker before its first move.
const INITIAL_HEADING: Direction = Direction::Top;

/// Wall-following solver with fixed handedness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallFollower {
    left_handed: bool,
}

impl WallFollower {
    pub fn new(left_handed: bool) -> Self {
        Self { left_handed }
    }

    pub fn left_hand() -> Self {
        Self::new(true)
    }

    pub fn right_hand() -> Self {
        Self::new(false)
    }

    pub fn is_left_handed(&self) -> bool {
        self.left_handed
    }

    fn hand(&self) -> &'static str {
        if self.left_handed { "left" } else { "right" }
    }

    /// First unvisited neighbour in hand order, if any.
    fn next_move(
        &self,
        board: &Board,
        at: Position,
        heading: Direction,
        visited: &[bool],
    ) -> Result<Option<(Direction, Position)>, MazeError> {
        let cell = board.cell(at)?;
        let unvisited = |&(_, p): &(Direction, Position)| {
            board.index_of(p).is_some_and(|i| !visited[i])
        };
        let found = if self.left_handed {
            available_directions(
                board,
                cell,
                &LeftHandStrategy::new(heading),
                FirstNextStrategy,
            )
            .find(unvisited)
        } else {
            available_directions(
                board,
                cell,
                &RightHandStrategy::new(heading),
                FirstNextStrategy,
            )
            .find(unvisited)
        };
        Ok(found)
    }
}

impl Solver for WallFollower {
    fn solve(
        &self,
        board: &Board,
        start: Position,
        target: Position,
    ) -> Result<Option<Solve>, MazeError> {
        let start_idx = checked_index(board, start)?;
        checked_index(board, target)?;

        let mut visited = vec![false; board.len()];
        visited[start_idx] = true;
        let mut walk = vec![start];
        let mut moves: Vec<Direction> = Vec::new();
        let mut heading = INITIAL_HEADING;
        let mut history = History::default();

        while let Some(&current) = walk.last() {
            history.record(current, 0);

            if current == target {
                log::debug!(
                    "wall follower ({}): {} -> {} in {} steps, {} cells processed",
                    self.hand(),
                    start,
                    target,
                    moves.len(),
                    history.processed()
                );
                return Ok(Some(history.finish(moves, start, target)));
            }

            match self.next_move(board, current, heading, &visited)? {
                Some((dir, next)) => {
                    visited[checked_index(board, next)?] = true;
                    walk.push(next);
                    moves.push(dir);
                    heading = dir;
                }
                None => {
                    walk.pop();
                    if let Some(dir) = moves.pop() {
                        // Walking back out of the dead end.
                        heading = dir.reverse()?;
                    }
                    log::trace!("wall follower: dead end at {}", current);
                }
            }
        }

        log::debug!(
            "wall follower ({}): no path from {} to {}, {} cells processed",
            self.hand(),
            start,
            target,
            history.processed()
        );
        Ok(None)
    }
}
