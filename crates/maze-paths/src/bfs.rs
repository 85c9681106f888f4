use std::collections::VecDeque;

use maze_core::{Board, MazeError, Position};

use crate::neighbors::{FirstNextStrategy, NoWallStrategy, available_directions};
use crate::solve::{History, Solve, checked_index, path_to_steps};
use crate::traits::Solver;

/// Breadth-first search over partial paths.
///
/// The queue holds whole paths rather than single cells; the first path
/// whose last cell is the target is a shortest one. Each cell is processed
/// once, with its depth (steps from `start`) as the recorded value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Solver for Bfs {
    fn solve(
        &self,
        board: &Board,
        start: Position,
        target: Position,
    ) -> Result<Option<Solve>, MazeError> {
        checked_index(board, start)?;
        checked_index(board, target)?;

        let mut processed = vec![false; board.len()];
        let mut history = History::default();
        let mut queue: VecDeque<Vec<Position>> = VecDeque::new();
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            let Some(&current) = path.last() else {
                continue;
            };
            let ci = checked_index(board, current)?;
            if processed[ci] {
                continue;
            }
            processed[ci] = true;
            history.record(current, (path.len() - 1) as i32);

            if current == target {
                let steps = path_to_steps(&path)?;
                log::debug!(
                    "bfs: {} -> {} in {} steps, {} cells processed",
                    start,
                    target,
                    steps.len(),
                    history.processed()
                );
                return Ok(Some(history.finish(steps, start, target)));
            }

            let cell = board.cell(current)?;
            for (_, np) in available_directions(board, cell, &NoWallStrategy, FirstNextStrategy) {
                let ni = checked_index(board, np)?;
                // A processed cell would be skipped when dequeued anyway.
                if processed[ni] || path.contains(&np) {
                    continue;
                }
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(np);
                queue.push_back(next);
            }
        }

        log::debug!(
            "bfs: no path from {} to {}, {} cells processed",
            start,
            target,
            history.processed()
        );
        Ok(None)
    }
}
