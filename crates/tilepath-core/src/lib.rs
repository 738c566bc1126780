//! **tilepath-core** — core types for tile grid pathfinding.
//!
//! This crate provides the foundational types shared across the *tilepath*
//! workspace: integer geometry primitives and the walkable/blocked
//! [`TileMap`] together with its text format loader.

pub mod geom;
pub mod map;

pub use geom::{ParsePointError, Point, Range};
pub use map::{MapError, Tile, TileMap};
