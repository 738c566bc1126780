//! Shortest paths on 8-connected tile grids.
//!
//! Movement between adjacent tiles costs [`LINEAR_COST`] for axis-aligned
//! steps and [`DIAGONAL_COST`] for diagonal ones. Two interchangeable
//! searches are provided:
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra_path`], [`dijkstra`])
//! - **A\*** guided by the Manhattan distance ([`astar_path`], [`a_star`])
//!
//! Both return the tiles visited after leaving the origin, ending at the
//! destination, or `None` when the destination cannot be reached. All search
//! state lives in the call, so a grid can back any number of searches.
//!
//! # Grid access
//!
//! | Entry point | Grid supplied as |
//! |---|---|
//! | [`dijkstra_path`], [`astar_path`], [`Algorithm::find_path`] | any [`TileGrid`] |
//! | [`dijkstra`], [`a_star`] | `is_walkable` and `inside_limits` closures |

mod algorithm;
mod astar;
mod cost;
mod dijkstra;
mod distance;
mod frontier;
mod neighbors;
mod traits;
mod validate;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::{a_star, astar_path};
pub use cost::{DIAGONAL_COST, LINEAR_COST, Path, path_cost, step_cost};
pub use dijkstra::{dijkstra, dijkstra_path};
pub use distance::{chebyshev, manhattan};
pub use frontier::UNREACHABLE;
pub use neighbors::{Neighbor, OFFSETS, neighbors};
pub use traits::{FnGrid, TileGrid};
pub use validate::is_valid;
