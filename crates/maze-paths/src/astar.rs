use std::cmp::Ordering;
use std::collections::BinaryHeap;

use maze_core::{Board, MazeError, Position};

use crate::distance::manhattan;
use crate::neighbors::{FirstNextStrategy, NoWallStrategy, available_directions};
use crate::solve::{History, Solve, checked_index, path_to_steps};
use crate::traits::Solver;

/// Sentinel g-score of a cell not reached yet.
const UNREACHABLE: i32 = i32::MAX;

/// Best-first search with the Manhattan heuristic.
///
/// Edges have unit cost, so the returned path is a shortest one. Among open
/// cells with the same f-score, the one pushed first is expanded first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

#[derive(Clone)]
struct Node {
    g: i32,
    parent: Option<usize>,
    open: bool,
    // Sequence number of the live heap entry for this node.
    seq: u64,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: None,
            open: false,
            seq: 0,
        }
    }
}

/// Heap entry ordered by `(f, seq)`, smallest first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    idx: usize,
    f: i32,
    seq: u64,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Solver for AStar {
    fn solve(
        &self,
        board: &Board,
        start: Position,
        target: Position,
    ) -> Result<Option<Solve>, MazeError> {
        let start_idx = checked_index(board, start)?;
        let goal_idx = checked_index(board, target)?;

        let mut nodes = vec![Node::default(); board.len()];
        let mut history = History::default();
        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        let mut seq = 0u64;

        nodes[start_idx].g = 0;
        nodes[start_idx].open = true;
        open.push(OpenRef {
            idx: start_idx,
            f: manhattan(start, target),
            seq,
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip entries superseded by a later improvement.
            if !nodes[ci].open || nodes[ci].seq != current.seq {
                continue;
            }
            nodes[ci].open = false;

            let cp = board.position_of(ci);
            let current_g = nodes[ci].g;
            history.record(cp, current_g);

            if ci == goal_idx {
                let path = reconstruct(board, &nodes, goal_idx);
                let steps = path_to_steps(&path)?;
                log::debug!(
                    "astar: {} -> {} in {} steps, {} cells processed",
                    start,
                    target,
                    steps.len(),
                    history.processed()
                );
                return Ok(Some(history.finish(steps, start, target)));
            }

            let cell = board.cell(cp)?;
            for (_, np) in available_directions(board, cell, &NoWallStrategy, FirstNextStrategy) {
                let ni = checked_index(board, np)?;
                let tentative_g = current_g + 1;
                if tentative_g >= nodes[ni].g {
                    continue;
                }

                seq += 1;
                let n = &mut nodes[ni];
                n.g = tentative_g;
                n.parent = Some(ci);
                n.open = true;
                n.seq = seq;
                open.push(OpenRef {
                    idx: ni,
                    f: tentative_g + manhattan(np, target),
                    seq,
                });
            }
        }

        log::debug!(
            "astar: no path from {} to {}, {} cells processed",
            start,
            target,
            history.processed()
        );
        Ok(None)
    }
}

/// Walk the parent chain back from `goal` and return the path start-first.
fn reconstruct(board: &Board, nodes: &[Node], goal: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut ci = Some(goal);
    while let Some(i) = ci {
        path.push(board.position_of(i));
        ci = nodes[i].parent;
    }
    path.reverse();
    path
}
