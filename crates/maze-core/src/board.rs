//! The [`Board`] type: a fixed-size matrix of walled [`Cell`]s.
//!
//! Cells are stored column-major (all `y` for `x = 0`, then `x = 1`, …),
//! which is also the enumeration order of [`Board::iter`].

use std::ops::Index;

use crate::cell::Cell;
use crate::error::MazeError;
use crate::geom::{Direction, Position};

/// A `width` x `height` grid of cells that owns every cell.
///
/// A new board has every wall standing. The only mutation is
/// [`connect`](Self::connect), which opens a wall on both sides at once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoardRepr"))]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a fully enclosed board. Both dimensions must be at least 1.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::new(Position::new(x, y)));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a board has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Flat index of `pos`, or `None` if out of bounds.
    ///
    /// Indices run `0..len()` in enumeration order, so solvers can keep
    /// per-cell state in plain vectors.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.x as usize * self.height as usize + pos.y as usize)
    }

    /// Position stored at flat index `idx`. `idx` must be below `len()`.
    #[inline]
    pub fn position_of(&self, idx: usize) -> Position {
        let h = self.height as usize;
        Position::new((idx / h) as i32, (idx % h) as i32)
    }

    /// Checked cell lookup.
    pub fn cell(&self, pos: Position) -> Result<&Cell, MazeError> {
        self.index_of(pos)
            .map(|i| &self.cells[i])
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Open the wall between `pos` and its neighbour in `dir`, on both
    /// cells. Idempotent if the wall is already open.
    ///
    /// Returns the neighbour's position. Fails with
    /// [`MazeError::InvalidDirection`] for `Direction::None` and with
    /// [`MazeError::OutOfBounds`] if either cell is off the board.
    pub fn connect(&mut self, pos: Position, dir: Direction) -> Result<Position, MazeError> {
        let back = dir.reverse()?;
        let from = self.index_of(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        let next = pos.step(dir);
        let to = self.index_of(next).ok_or_else(|| self.out_of_bounds(next))?;
        self.cells[from].open(dir);
        self.cells[to].open(back);
        Ok(next)
    }

    /// Column-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Column-major iterator over all positions.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Position::new(x, y)))
    }

    /// Number of open passages between pairs of cells.
    ///
    /// A single-path maze has exactly `len() - 1`.
    pub fn open_connections(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                usize::from(!c.has_wall(Direction::Top)) + usize::from(!c.has_wall(Direction::Right))
            })
            .sum()
    }

    /// Whether every shared wall agrees on both sides and every border
    /// wall is standing.
    pub fn has_symmetric_walls(&self) -> bool {
        self.cells.iter().all(|c| {
            Direction::CARDINALS.into_iter().all(|d| {
                let next = c.position().step(d);
                match (self.index_of(next), d.reverse()) {
                    (Some(i), Ok(back)) => c.has_wall(d) == self.cells[i].has_wall(back),
                    _ => c.has_wall(d),
                }
            })
        })
    }

    fn out_of_bounds(&self, pos: Position) -> MazeError {
        MazeError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        }
    }
}

/// Unchecked wire form of a [`Board`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardRepr {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRepr> for Board {
    type Error = MazeError;

    fn try_from(repr: BoardRepr) -> Result<Self, MazeError> {
        let BoardRepr {
            width,
            height,
            cells,
        } = repr;
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        if cells.len() != width as usize * height as usize {
            return Err(MazeError::InconsistentBoard(
                "cell count does not match the dimensions",
            ));
        }
        let board = Self {
            width,
            height,
            cells,
        };
        let misplaced = board
            .cells
            .iter()
            .enumerate()
            .any(|(i, c)| c.position() != board.position_of(i));
        if misplaced {
            return Err(MazeError::InconsistentBoard(
                "cell positions are out of column-major order",
            ));
        }
        if !board.has_symmetric_walls() {
            return Err(MazeError::InconsistentBoard(
                "walls are not symmetric or the border is open",
            ));
        }
        Ok(board)
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    /// Unchecked lookup. Panics if `pos` is out of bounds; use
    /// [`Board::cell`] for a checked lookup.
    fn index(&self, pos: Position) -> &Cell {
        match self.index_of(pos) {
            Some(i) => &self.cells[i],
            None => panic!("{}", self.out_of_bounds(pos)),
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let mut b = Board::new(3, 2).unwrap();
        b.connect(Position::new(1, 0), Direction::Right).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    fn load(value: serde_json::Value) -> Result<Board, String> {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    fn valid_json() -> serde_json::Value {
        let mut b = Board::new(2, 2).unwrap();
        b.connect(Position::ZERO, Direction::Right).unwrap();
        serde_json::to_value(&b).unwrap()
    }

    #[test]
    fn rejects_bad_dimensions() {
        let mut v = valid_json();
        v["width"] = 0.into();
        let err = load(v).unwrap_err();
        assert!(err.contains("invalid board dimension"), "{err}");
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let err = load(serde_json::json!({"width": 3, "height": 3, "cells": []})).unwrap_err();
        assert!(err.contains("cell count"), "{err}");

        let mut v = valid_json();
        v["cells"].as_array_mut().unwrap().pop();
        assert!(load(v).is_err());
    }

    #[test]
    fn rejects_misplaced_cells() {
        let mut v = valid_json();
        v["cells"].as_array_mut().unwrap().swap(0, 1);
        let err = load(v).unwrap_err();
        assert!(err.contains("column-major"), "{err}");
    }

    #[test]
    fn rejects_one_sided_wall() {
        let mut v = valid_json();
        // Open Top of (0,0) without opening Bottom of (0,1).
        v["cells"][0]["walls"][0] = false.into();
        let err = load(v).unwrap_err();
        assert!(err.contains("not symmetric"), "{err}");
    }

    #[test]
    fn rejects_open_border() {
        let b = Board::new(2, 1).unwrap();
        let mut v = serde_json::to_value(&b).unwrap();
        // Left wall of (0,0) faces off the board.
        v["cells"][0]["walls"][3] = false.into();
        let err = load(v).unwrap_err();
        assert!(err.contains("border is open"), "{err}");
    }
}
