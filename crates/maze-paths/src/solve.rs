use std::collections::{HashMap, VecDeque};

use maze_core::{Board, Direction, MazeError, Position};

/// A position with an associated cost, as recorded by a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Position,
    pub cost: i32,
}

/// The outcome of a successful solve.
///
/// `steps` leads from `start` to `target`. `processing_order` and the
/// per-cell values record how the solver got there and exist for progress
/// display only: A* stores the g-score of each finalized cell, BFS its
/// depth, and the wall follower a constant 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solve {
    steps: Vec<Direction>,
    start: Position,
    target: Position,
    processing_order: VecDeque<Position>,
    #[cfg_attr(feature = "serde", serde(with = "cell_value_serde"))]
    cell_value: HashMap<Position, i32>,
}

impl Solve {
    /// Moves from `start` to `target`. Empty when they coincide.
    #[inline]
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Position {
        self.target
    }

    /// Cells in the order the solver examined them, oldest first.
    #[inline]
    pub fn processing_order(&self) -> &VecDeque<Position> {
        &self.processing_order
    }

    /// Value recorded for `pos`, or `None` if the solver never examined it.
    #[inline]
    pub fn cell_value(&self, pos: Position) -> Option<i32> {
        self.cell_value.get(&pos).copied()
    }

    /// All recorded values, in no particular order.
    pub fn cell_values(&self) -> impl Iterator<Item = PathNode> + '_ {
        self.cell_value
            .iter()
            .map(|(&pos, &cost)| PathNode { pos, cost })
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every position on the path, `start` and `target` included.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.start).chain(self.steps.iter().scan(self.start, |p, &d| {
            *p = p.step(d);
            Some(*p)
        }))
    }
}

/// Processing history accumulated while a solver runs.
#[derive(Debug, Default)]
pub(crate) struct History {
    order: VecDeque<Position>,
    values: HashMap<Position, i32>,
}

impl History {
    pub(crate) fn record(&mut self, pos: Position, value: i32) {
        self.order.push_back(pos);
        self.values.insert(pos, value);
    }

    pub(crate) fn processed(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn finish(self, steps: Vec<Direction>, start: Position, target: Position) -> Solve {
        Solve {
            steps,
            start,
            target,
            processing_order: self.order,
            cell_value: self.values,
        }
    }
}

/// Convert consecutive cells into the moves joining them.
pub(crate) fn path_to_steps(path: &[Position]) -> Result<Vec<Direction>, MazeError> {
    path.windows(2)
        .map(|w| Direction::between(w[0], w[1]))
        .collect()
}

/// Flat index of `pos` on `board`, or [`MazeError::OutOfBounds`].
pub(crate) fn checked_index(board: &Board, pos: Position) -> Result<usize, MazeError> {
    board.index_of(pos).ok_or(MazeError::OutOfBounds {
        pos,
        width: board.width(),
        height: board.height(),
    })
}

#[cfg(feature = "serde")]
mod cell_value_serde {
    use std::collections::HashMap;

    use maze_core::Position;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::PathNode;

    // JSON object keys must be strings, so the map travels as a list of
    // nodes.
    pub fn serialize<S: Serializer>(
        map: &HashMap<Position, i32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(map.iter().map(|(&pos, &cost)| PathNode { pos, cost }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<Position, i32>, D::Error> {
        let nodes = Vec::<PathNode>::deserialize(deserializer)?;
        Ok(nodes.into_iter().map(|n| (n.pos, n.cost)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Solve {
        let mut h = History::default();
        h.record(Position::new(0, 0), 0);
        h.record(Position::new(0, 1), 1);
        h.record(Position::new(1, 1), 2);
        h.finish(
            vec![Direction::Top, Direction::Right],
            Position::new(0, 0),
            Position::new(1, 1),
        )
    }

    #[test]
    fn positions_replay_steps() {
        let s = sample();
        assert_eq!(s.len(), 2);
        assert_eq!(
            s.positions().collect::<Vec<_>>(),
            [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn history_is_kept() {
        let s = sample();
        assert_eq!(s.processing_order().len(), 3);
        assert_eq!(s.processing_order().front(), Some(&Position::new(0, 0)));
        assert_eq!(s.cell_value(Position::new(1, 1)), Some(2));
        assert_eq!(s.cell_value(Position::new(5, 5)), None);
        assert_eq!(s.cell_values().count(), 3);
    }

    #[test]
    fn path_to_steps_checks_adjacency() {
        let path = [Position::new(0, 0), Position::new(1, 0), Position::new(1, -1)];
        assert_eq!(
            path_to_steps(&path),
            Ok(vec![Direction::Right, Direction::Bottom])
        );
        assert_eq!(path_to_steps(&[Position::new(3, 3)]), Ok(vec![]));
        assert_eq!(
            path_to_steps(&[Position::new(0, 0), Position::new(2, 0)]),
            Err(MazeError::InvalidDirection(Direction::None))
        );
    }
}
