use std::collections::{BinaryHeap, VecDeque};

use log::{debug, trace};
use towerpath_core::{Point, Range};

use crate::distance::manhattan;
use crate::error::PathError;
use crate::grid::TileGrid;
use crate::node::{Node, NodeRef};
use crate::route::{Route, Waypoint};

/// Cost of a horizontal or vertical step.
pub const COST_AXIAL: i32 = 10;
/// Cost of a diagonal step (√2 ≈ 1.4, scaled ×10 to stay integral).
pub const COST_DIAGONAL: i32 = 14;

/// Heuristic scale: Manhattan distance to the goal, ×10.
///
/// Deliberately overestimates under the diagonal cost model. Combined with
/// the closed-set-never-reopened rule this can, in adversarial layouts,
/// return a slightly non-optimal route; the behavior is kept as is.
const HEURISTIC_WEIGHT: i32 = 10;

/// A* route search over a [`TileGrid`].
///
/// Owns a node graph mirroring the grid's cell set, built lazily on the
/// first [`find_path`](Self::find_path) and kept across searches; call
/// [`invalidate`](Self::invalidate) after the cell set changes (level
/// load). Toggling walkability of existing cells needs no invalidation —
/// walkability is read live from the grid during each search.
///
/// Searches mutate the shared node graph, so `find_path` takes `&mut self`;
/// concurrent searches need one `PathFinder` per caller.
#[derive(Debug)]
pub struct PathFinder {
    bounds: Range,
    width: usize,
    nodes: Vec<Node>,
    generation: u32,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a finder with no node graph; the graph is derived from the
    /// grid passed to the first search.
    pub fn new() -> Self {
        Self {
            bounds: Range::default(),
            width: 0,
            nodes: Vec::new(),
            generation: 0,
        }
    }

    /// Whether the node graph has been built.
    pub fn is_built(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Drop the node graph so the next search rebuilds it.
    ///
    /// Required after the grid's cell set changes; the finder has no way to
    /// detect that on its own.
    pub fn invalidate(&mut self) {
        self.nodes.clear();
        self.bounds = Range::default();
        self.width = 0;
    }

    /// Compute the lowest-cost route from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when no 8-connected walkable route exists — a
    /// routine outcome, expected to be probed frequently (e.g. validating
    /// an obstacle placement by trial search). Endpoints outside the grid
    /// fail fast with [`PathError::OutOfBounds`]. `start == goal` yields an
    /// empty route.
    ///
    /// The returned route excludes the start cell and ends at the goal
    /// cell. Ties between equal-`f` frontier nodes are broken arbitrarily,
    /// so the exact cells of the route may vary between layouts of equal
    /// cost, but the total cost is deterministic for a fixed grid and
    /// endpoint pair.
    pub fn find_path<G: TileGrid>(
        &mut self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Result<Option<Route>, PathError> {
        self.ensure_graph(grid);

        let start_idx = self.idx(start).ok_or(PathError::OutOfBounds(start))?;
        let goal_idx = self.idx(goal).ok_or(PathError::OutOfBounds(goal))?;

        if start_idx == goal_idx {
            return Ok(Some(Route::default()));
        }

        // Bump the generation to lazily reset every node's transient state.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = manhattan(start, goal) * HEURISTIC_WEIGHT;
            node.f = node.h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip closed nodes and stale duplicates left by relaxation.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            for np in cp.neighbors_8() {
                if !grid.in_bounds(np) || np == start || !grid.is_walkable(np) {
                    continue;
                }

                let d = np - cp;
                let step = if d.x == 0 || d.y == 0 {
                    COST_AXIAL
                } else {
                    if !self.diagonal_open(grid, cp, np) {
                        continue;
                    }
                    COST_DIAGONAL
                };

                let Some(ni) = self.idx(np) else {
                    continue;
                };

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Closed nodes are never re-examined, even if a cheaper
                    // path to them shows up later.
                    if !n.open {
                        continue;
                    }
                    // Frontier node: relax only on strict improvement.
                    if current_g + step >= n.g {
                        continue;
                    }
                }

                n.generation = cur_gen;
                n.g = current_g + step;
                n.h = manhattan(np, goal) * HEURISTIC_WEIGHT;
                n.f = n.g + n.h;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        if !found {
            trace!("no route from {start} to {goal}");
            return Ok(None);
        }

        // Walk the predecessor chain back to the start, then flip it into
        // traversal order. The start cell itself stays out of the route.
        let mut waypoints = VecDeque::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            waypoints.push_front(Waypoint {
                coord: self.point(ci),
                world: self.nodes[ci].world,
            });
            ci = self.nodes[ci].parent;
        }

        let cost = self.nodes[goal_idx].g;
        trace!(
            "route from {start} to {goal}: {} waypoints, cost {cost}",
            waypoints.len()
        );
        Ok(Some(Route::new(waypoints, cost)))
    }

    /// Build the node graph from the grid if it is not already built.
    ///
    /// Pure with respect to the grid; caches one node per cell (blocked
    /// cells included) holding its world position.
    fn ensure_graph<G: TileGrid>(&mut self, grid: &G) {
        if self.is_built() {
            return;
        }
        let bounds = grid.bounds();
        self.bounds = bounds;
        self.width = bounds.width().max(0) as usize;
        self.generation = 0;
        self.nodes = Vec::with_capacity(bounds.len());
        for p in bounds.iter() {
            self.nodes.push(Node {
                world: grid.world_position(p),
                ..Node::default()
            });
        }
        debug!("node graph built: {} cells over {bounds}", self.nodes.len());
    }

    /// Whether the diagonal move from `current` to `neighbor` cuts a
    /// blocked corner.
    ///
    /// The two flank cells are the orthogonal cells adjacent to both ends
    /// of the move. The move is rejected as soon as one in-bounds flank is
    /// blocked; an out-of-bounds flank never blocks.
    fn diagonal_open<G: TileGrid>(&self, grid: &G, current: Point, neighbor: Point) -> bool {
        let first = Point::new(neighbor.x, current.y);
        let second = Point::new(current.x, neighbor.y);
        if grid.in_bounds(first) && !grid.is_walkable(first) {
            return false;
        }
        if grid.in_bounds(second) && !grid.is_walkable(second) {
            return false;
        }
        true
    }

    /// Convert a `Point` to a flat node index. `None` if outside the graph.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat node index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }
}
