use towerpath_core::{Point, Range, Vec2};

/// Capability contract the engine requires from the walkability grid.
///
/// The grid is read-only for the whole duration of a search. Walkability is
/// queried live on every neighbor visit, so callers may toggle cells between
/// searches (placing or removing an obstacle) without rebuilding the node
/// graph; only a change to the cell set itself (a new bounds rectangle)
/// requires [`PathFinder::invalidate`](crate::PathFinder::invalidate).
pub trait TileGrid {
    /// The rectangle of cells the grid consists of. Enumerated once, in
    /// row-major order, when the node graph is built.
    fn bounds(&self) -> Range;

    /// Whether the cell at `p` can be traversed. Only meaningful for
    /// in-bounds points.
    fn is_walkable(&self, p: Point) -> bool;

    /// The world-space position of the cell at `p`. Opaque to the engine;
    /// cached on the node graph and passed through on waypoints.
    fn world_position(&self, p: Point) -> Vec2;

    /// Whether `p` lies within [`bounds`](Self::bounds).
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}
