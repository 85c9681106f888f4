//! **maze-core**: the grid model shared by maze generation and solving.
//!
//! This crate provides the addressable grid ([`Board`]) of walled
//! [`Cell`]s, the [`Position`] and [`Direction`] primitives, and the
//! [`MazeError`] taxonomy. A board starts fully enclosed; passages are
//! opened only through [`Board::connect`], which keeps walls symmetric
//! between neighbours.

pub mod board;
pub mod cell;
pub mod error;
pub mod geom;

pub use board::Board;
pub use cell::Cell;
pub use error::MazeError;
pub use geom::{Direction, Position};
