//! Maze carving.
//!
//! The carve is an iterative depth-first walk from a start cell: the top of
//! an explicit stack picks a random neighbour behind a standing wall that
//! has not been visited, opens the wall and pushes it; a cell with no such
//! neighbour is collapsed and popped. When the stack empties every cell has
//! been reached exactly once, so the open passages form a spanning tree.

use maze_core::{Board, Direction, MazeError, Position};
use maze_paths::{RandomNextStrategy, WallStrategy, available_directions};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::config::MazeConfig;

/// Maze generator operating on a [`Board`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub board: Board,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator that carves into `board`.
    pub fn with_board(board: Board, rng: R) -> Self {
        Self { rng, board }
    }

    /// Carve a spanning tree over the whole board starting at `start`.
    ///
    /// Fails with [`MazeError::OutOfBounds`] if `start` is off the board.
    pub fn carve_from(&mut self, start: Position) -> Result<(), MazeError> {
        let len = self.board.len();
        let mut visited = vec![false; len];
        let mut collapsed = vec![false; len];
        let mut track = vec![start];
        visited[self.index(start)?] = true;

        while let Some(&current) = track.last() {
            let ci = self.index(current)?;
            visited[ci] = true;

            let cell = self.board.cell(current)?;
            let next = available_directions(
                &self.board,
                cell,
                &WallStrategy,
                RandomNextStrategy::new(&mut self.rng),
            )
            .find(|&(_, p)| {
                self.board
                    .index_of(p)
                    .is_some_and(|i| !visited[i] && !collapsed[i])
            });

            match next {
                Some((dir, _)) => {
                    let np = self.board.connect(current, dir)?;
                    track.push(np);
                }
                None => {
                    collapsed[ci] = true;
                    track.pop();
                }
            }
        }
        Ok(())
    }

    /// Make `attempts` random connections between a random cell and its
    /// neighbour in a random direction, skipping picks that lead off the
    /// board. Already open walls stay open.
    ///
    /// Returns the number of connections made.
    pub fn add_loops(&mut self, attempts: usize) -> Result<usize, MazeError> {
        let len = self.board.len();
        let mut made = 0;
        for _ in 0..attempts {
            let pos = self.board.position_of(self.rng.random_range(0..len));
            let dir = Direction::CARDINALS[self.rng.random_range(0..Direction::CARDINALS.len())];
            if !self.board.contains(pos.step(dir)) {
                continue;
            }
            self.board.connect(pos, dir)?;
            made += 1;
        }
        Ok(made)
    }

    /// Consume the generator and return the carved board.
    pub fn into_board(self) -> Board {
        self.board
    }

    fn index(&self, pos: Position) -> Result<usize, MazeError> {
        self.board.index_of(pos).ok_or(MazeError::OutOfBounds {
            pos,
            width: self.board.width(),
            height: self.board.height(),
        })
    }
}

/// Generate a maze from `config`.
///
/// Carves from (0, 0) with a generator seeded once from `config.seed`; with
/// `multi_path` set, `cells / 5` extra connections are attempted afterwards.
/// Fails with [`MazeError::InvalidDimension`] for non-positive dimensions.
pub fn generate_maze(config: &MazeConfig) -> Result<Board, MazeError> {
    let board = Board::new(config.width, config.height)?;
    let mut mg = MazeGen::with_board(board, StdRng::seed_from_u64(config.seed));
    mg.carve_from(Position::ZERO)?;

    let loops = if config.multi_path {
        mg.add_loops(mg.board.len() / 5)?
    } else {
        0
    };

    log::debug!(
        "generated {}x{} maze (seed {}, multi-path {}, {} extra connections)",
        config.width,
        config.height,
        config.seed,
        config.multi_path,
        loops
    );
    Ok(mg.into_board())
}

/// Flat-argument form of [`generate_maze`].
pub fn generate(width: i32, height: i32, seed: u64, multi_path: bool) -> Result<Board, MazeError> {
    generate_maze(
        &MazeConfig::new(width, height)
            .with_seed(seed)
            .with_multi_path(multi_path),
    )
}
