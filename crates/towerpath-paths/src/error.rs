use std::fmt;

use towerpath_core::Point;

/// Error raised for caller contract violations.
///
/// "No path exists" is **not** an error;
/// [`PathFinder::find_path`](crate::PathFinder::find_path) reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A search endpoint lies outside the node graph's bounds.
    OutOfBounds(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid bounds"),
        }
    }
}

impl std::error::Error for PathError {}
