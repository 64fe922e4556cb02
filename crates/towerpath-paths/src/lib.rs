//! Route search for grid-based tower-defense games.
//!
//! This crate computes lowest-cost routes between two cells of a
//! rectangular walkability grid, using 8-directional movement with
//! corner-cutting prevention:
//!
//! - **A\*** shortest-path search ([`PathFinder::find_path`])
//! - axial steps cost 10, diagonal steps cost 14
//! - a diagonal move is rejected when an in-bounds flank cell is blocked
//!
//! The grid itself is an external collaborator reached through the
//! [`TileGrid`] trait; [`PathFinder`] owns a node graph derived from it,
//! built lazily on first use and reused across searches. Searches return a
//! [`Route`] of [`Waypoint`]s carrying both grid coordinates and world
//! positions, drained in start→goal order. "No path" is a routine outcome
//! (`Ok(None)`), distinct from the [`PathError`] raised for endpoints
//! outside the grid.

mod distance;
mod error;
mod finder;
mod grid;
mod node;
mod route;

pub use distance::{chebyshev, manhattan};
pub use error::PathError;
pub use finder::{COST_AXIAL, COST_DIAGONAL, PathFinder};
pub use grid::TileGrid;
pub use route::{Route, Waypoint};
