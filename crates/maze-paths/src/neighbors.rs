//! Neighbor strategies.
//!
//! An [`Availability`] policy lists candidate directions out of a cell and a
//! [`Selection`] policy decides the order in which they are tried.
//! [`available_directions`] combines the two into a lazy sequence of
//! in-bounds `(direction, neighbour)` pairs.

use maze_core::{Board, Cell, Direction, Position};
use rand::{Rng, RngExt};

use crate::traits::{Availability, Selection};

// ---------------------------------------------------------------------------
// Availability policies
// ---------------------------------------------------------------------------

/// Directions in which the cell still has a standing wall (carving
/// candidates), in Top, Right, Bottom, Left order.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallStrategy;

impl Availability for WallStrategy {
    fn available(&self, cell: &Cell, buf: &mut Vec<Direction>) {
        buf.extend(Direction::CARDINALS.into_iter().filter(|&d| cell.has_wall(d)));
    }
}

/// Directions in which the wall is open (traversal candidates), in Top,
/// Right, Bottom, Left order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWallStrategy;

impl Availability for NoWallStrategy {
    fn available(&self, cell: &Cell, buf: &mut Vec<Direction>) {
        buf.extend(cell.open_directions());
    }
}

/// Open directions for a walker keeping its right hand on the wall.
///
/// Relative to the current heading the probe order is right, ahead, left,
/// back: a direction is offered first only when every direction closer to
/// the hand side is walled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightHandStrategy {
    heading: Direction,
}

impl RightHandStrategy {
    /// Strategy for a walker facing `heading`. `Direction::None` is taken
    /// as `Top`.
    pub fn new(heading: Direction) -> Self {
        Self {
            heading: normalize(heading),
        }
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }
}

impl Availability for RightHandStrategy {
    fn available(&self, cell: &Cell, buf: &mut Vec<Direction>) {
        hand_order(cell, self.heading, Direction::clockwise, buf);
    }
}

/// Mirror of [`RightHandStrategy`]: probe order left, ahead, right, back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftHandStrategy {
    heading: Direction,
}

impl LeftHandStrategy {
    /// Strategy for a walker facing `heading`. `Direction::None` is taken
    /// as `Top`.
    pub fn new(heading: Direction) -> Self {
        Self {
            heading: normalize(heading),
        }
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }
}

impl Availability for LeftHandStrategy {
    fn available(&self, cell: &Cell, buf: &mut Vec<Direction>) {
        hand_order(cell, self.heading, Direction::counter_clockwise, buf);
    }
}

fn normalize(heading: Direction) -> Direction {
    match heading {
        Direction::None => Direction::Top,
        d => d,
    }
}

/// Push the open directions of `cell` starting from the hand side of
/// `heading` and sweeping away from it.
fn hand_order(
    cell: &Cell,
    heading: Direction,
    toward_hand: fn(Direction) -> Direction,
    buf: &mut Vec<Direction>,
) {
    let hand = toward_hand(heading);
    let back = toward_hand(hand);
    let away = toward_hand(back);
    for d in [hand, heading, away, back] {
        if !cell.has_wall(d) {
            buf.push(d);
        }
    }
}

// ---------------------------------------------------------------------------
// Selection policies
// ---------------------------------------------------------------------------

/// Always takes the first remaining candidate, preserving the
/// availability order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstNextStrategy;

impl Selection for FirstNextStrategy {
    #[inline]
    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Picks a uniformly random remaining candidate from a borrowed seeded
/// generator.
#[derive(Debug)]
pub struct RandomNextStrategy<'a, R> {
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomNextStrategy<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Selection for RandomNextStrategy<'_, R> {
    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

// ---------------------------------------------------------------------------
// AvailableDirections
// ---------------------------------------------------------------------------

/// Lazy sequence of `(direction, neighbour)` pairs produced by
/// [`available_directions`].
///
/// Candidates are drawn without replacement, so no direction is yielded
/// twice. Candidates leading off the board are dropped silently.
pub struct AvailableDirections<'a, S> {
    board: &'a Board,
    from: Position,
    candidates: Vec<Direction>,
    selection: S,
}

impl<S: Selection> Iterator for AvailableDirections<'_, S> {
    type Item = (Direction, Position);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.candidates.is_empty() {
            let i = self.selection.next_index(self.candidates.len());
            let dir = self.candidates.remove(i);
            let next = self.from.step(dir);
            if self.board.contains(next) {
                return Some((dir, next));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len()))
    }
}

/// Reachable neighbours of `cell`: the candidate set is computed once from
/// `availability`, then drained in the order chosen by `selection`.
pub fn available_directions<'a, A, S>(
    board: &'a Board,
    cell: &Cell,
    availability: &A,
    selection: S,
) -> AvailableDirections<'a, S>
where
    A: Availability + ?Sized,
    S: Selection,
{
    let mut candidates = Vec::with_capacity(4);
    availability.available(cell, &mut candidates);
    AvailableDirections {
        board,
        from: cell.position(),
        candidates,
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dirs<A: Availability>(a: &A, cell: &Cell) -> Vec<Direction> {
        let mut buf = Vec::new();
        a.available(cell, &mut buf);
        buf
    }

    #[test]
    fn wall_and_no_wall_partition() {
        let mut b = Board::new(3, 3).unwrap();
        let c = Position::new(1, 1);
        b.connect(c, Direction::Right).unwrap();
        b.connect(c, Direction::Left).unwrap();
        let cell = b.cell(c).unwrap();
        assert_eq!(dirs(&WallStrategy, cell), [Direction::Top, Direction::Bottom]);
        assert_eq!(dirs(&NoWallStrategy, cell), [Direction::Right, Direction::Left]);
    }

    #[test]
    fn first_next_keeps_order_and_drops_out_of_bounds() {
        let b = Board::new(2, 2).unwrap();
        // Corner (0, 0): Bottom and Left lead off the board.
        let got: Vec<_> =
            available_directions(&b, &b[Position::ZERO], &WallStrategy, FirstNextStrategy)
                .collect();
        assert_eq!(
            got,
            [
                (Direction::Top, Position::new(0, 1)),
                (Direction::Right, Position::new(1, 0)),
            ]
        );
    }

    #[test]
    fn random_next_yields_each_direction_once() {
        let b = Board::new(3, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let got: Vec<_> = available_directions(
                &b,
                &b[Position::new(1, 1)],
                &WallStrategy,
                RandomNextStrategy::new(&mut rng),
            )
            .map(|(d, _)| d)
            .collect();
            assert_eq!(got.len(), 4);
            for d in Direction::CARDINALS {
                assert!(got.contains(&d));
            }
        }
    }

    #[test]
    fn random_next_is_reproducible() {
        let b = Board::new(3, 3).unwrap();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            available_directions(
                &b,
                &b[Position::new(1, 1)],
                &WallStrategy,
                RandomNextStrategy::new(&mut rng),
            )
            .collect::<Vec<_>>()
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn hand_strategies_probe_hand_side_first() {
        let mut b = Board::new(3, 3).unwrap();
        let c = Position::new(1, 1);
        for d in Direction::CARDINALS {
            b.connect(c, d).unwrap();
        }
        let cell = b.cell(c).unwrap();
        assert_eq!(
            dirs(&RightHandStrategy::new(Direction::Top), cell),
            [Direction::Right, Direction::Top, Direction::Left, Direction::Bottom]
        );
        assert_eq!(
            dirs(&LeftHandStrategy::new(Direction::Top), cell),
            [Direction::Left, Direction::Top, Direction::Right, Direction::Bottom]
        );
        assert_eq!(
            dirs(&RightHandStrategy::new(Direction::Left), cell),
            [Direction::Top, Direction::Left, Direction::Bottom, Direction::Right]
        );
    }

    #[test]
    fn hand_strategies_skip_walls() {
        let mut b = Board::new(3, 3).unwrap();
        let c = Position::new(1, 1);
        b.connect(c, Direction::Top).unwrap();
        b.connect(c, Direction::Bottom).unwrap();
        let cell = b.cell(c).unwrap();
        // Facing right with the right hand on the wall: right turn is
        // Bottom, then straight (walled), then left turn Top.
        assert_eq!(
            dirs(&RightHandStrategy::new(Direction::Right), cell),
            [Direction::Bottom, Direction::Top]
        );
        assert_eq!(
            dirs(&LeftHandStrategy::new(Direction::None), cell),
            [Direction::Top, Direction::Bottom]
        );
    }

    #[test]
    fn hand_strategies_default_to_facing_top() {
        assert_eq!(RightHandStrategy::new(Direction::None).heading(), Direction::Top);
        assert_eq!(LeftHandStrategy::new(Direction::None).heading(), Direction::Top);
        assert_eq!(RightHandStrategy::new(Direction::Left).heading(), Direction::Left);
        assert_eq!(
            LeftHandStrategy::new(Direction::Bottom).heading(),
            Direction::Bottom
        );
    }
}
