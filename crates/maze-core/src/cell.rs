//! The [`Cell`] type: one grid unit with four walls.

use crate::geom::{Direction, Position};

/// A grid cell at a fixed position, with one wall flag per cardinal
/// direction (`true` = wall standing).
///
/// Walls are only changed through [`Board::connect`](crate::Board::connect),
/// which keeps both sides of a shared wall in sync.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Position,
    walls: [bool; 4],
}

impl Cell {
    /// A fully enclosed cell at `pos`.
    #[inline]
    pub(crate) const fn new(pos: Position) -> Self {
        Self {
            pos,
            walls: [true; 4],
        }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.pos
    }

    /// Whether the wall in `dir` is standing. `Direction::None` always
    /// reports a wall, so it is never treated as passable.
    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        match dir.index() {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    /// Wall flags in Top, Right, Bottom, Left order.
    #[inline]
    pub const fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Directions whose wall is open, in Top, Right, Bottom, Left order.
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::CARDINALS
            .into_iter()
            .filter(|&d| !self.has_wall(d))
    }

    /// Whether all four walls are standing.
    #[inline]
    pub fn is_enclosed(&self) -> bool {
        self.walls.iter().all(|&w| w)
    }

    /// Knock down the wall in `dir`. No-op for `Direction::None`.
    #[inline]
    pub(crate) fn open(&mut self, dir: Direction) {
        if let Some(i) = dir.index() {
            self.walls[i] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_enclosed() {
        let c = Cell::new(Position::new(1, 2));
        assert!(c.is_enclosed());
        assert_eq!(c.x(), 1);
        assert_eq!(c.y(), 2);
        assert_eq!(c.open_directions().count(), 0);
    }

    #[test]
    fn open_single_wall() {
        let mut c = Cell::new(Position::ZERO);
        c.open(Direction::Right);
        assert!(!c.has_wall(Direction::Right));
        assert!(c.has_wall(Direction::Top));
        assert_eq!(c.walls(), [true, false, true, true]);
        assert_eq!(c.open_directions().collect::<Vec<_>>(), [Direction::Right]);
    }

    #[test]
    fn none_is_always_walled() {
        let mut c = Cell::new(Position::ZERO);
        c.open(Direction::None);
        assert!(c.has_wall(Direction::None));
        assert!(c.is_enclosed());
    }
}
