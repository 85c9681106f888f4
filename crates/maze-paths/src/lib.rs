//! Neighbor strategies and pathfinding solvers for walled maze grids.
//!
//! Two small policies decide how a search leaves a cell:
//!
//! | Policy | Implementations |
//! |---|---|
//! | [`Availability`] (which directions) | [`WallStrategy`], [`NoWallStrategy`], [`RightHandStrategy`], [`LeftHandStrategy`] |
//! | [`Selection`] (in which order) | [`FirstNextStrategy`], [`RandomNextStrategy`] |
//!
//! [`available_directions`] composes them into the sequence of reachable
//! neighbours. The generator carves through walls with it; the solvers walk
//! through openings with it.
//!
//! Solvers implement [`Solver`] and are selected through [`Algorithm`]:
//!
//! - **A\*** shortest-path search ([`AStar`])
//! - **BFS** over partial paths ([`Bfs`])
//! - **Wall following**, left- or right-handed ([`WallFollower`])
//!
//! Every solver returns a [`Solve`] with the moves plus the order in which
//! cells were examined, or `None` when the target is unreachable.

mod algorithm;
mod astar;
mod bfs;
mod distance;
mod neighbors;
mod solve;
mod traits;
mod wall_follow;

pub use algorithm::{Algorithm, solve};
pub use astar::AStar;
pub use bfs::Bfs;
pub use distance::manhattan;
pub use neighbors::{
    AvailableDirections, FirstNextStrategy, LeftHandStrategy, NoWallStrategy, RandomNextStrategy,
    RightHandStrategy, WallStrategy, available_directions,
};
pub use solve::{PathNode, Solve};
pub use traits::{Availability, Selection, Solver};
pub use wall_follow::WallFollower;
