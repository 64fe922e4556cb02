//! Concrete grid collaborators for the towerpath engine.
//!
//! [`TileMap`] is a rectangular walkability grid parsed from ASCII rows,
//! with a grid→world mapping that places each cell's world position at its
//! center. [`Level`] wires a `TileMap` to a
//! [`PathFinder`](towerpath_paths::PathFinder) and a pair of spawn cells,
//! caching the full route and validating obstacle placement by trial
//! search.

pub mod level;
pub mod tilemap;

pub use level::{Level, PlaceError};
pub use tilemap::{MapError, TileMap};
