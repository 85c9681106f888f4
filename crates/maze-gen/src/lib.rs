//! Seeded maze generation.
//!
//! [`generate_maze`] carves a spanning-tree maze over a fresh
//! [`Board`](maze_core::Board) with an iterative depth-first walk, then
//! optionally adds random extra passages to create loops. [`MazeGen`]
//! exposes the two steps separately.

pub mod config;
pub mod mazegen;

pub use config::MazeConfig;
pub use mazegen::{MazeGen, generate, generate_maze};
