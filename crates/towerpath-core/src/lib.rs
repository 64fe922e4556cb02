//! **towerpath-core** — Grid pathfinding engine (core types).
//!
//! This crate provides the foundational value types used across the
//! *towerpath* crates: the [`Point`] grid coordinate, the [`Range`]
//! cell rectangle, and the [`Vec2`] world position.

pub mod geom;
pub mod world;

pub use geom::{Point, Range};
pub use world::Vec2;
