use towerpath_core::Vec2;

/// One node per grid cell, mutated in place during searches.
///
/// `g`/`h`/`f`/`parent` are transient: they are only valid while
/// `generation` matches the current search's generation, which makes the
/// per-search "reset every node" step O(1). `parent` is a flat index into
/// the node array and always points toward the start of the search, so the
/// predecessor chain is a tree with no cycles. Blocked cells get nodes too;
/// they are just never expanded while blocked.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// World position cached from the grid adapter at graph-build time.
    pub(crate) world: Vec2,
    /// Cost of the best known path from the start to this node.
    pub(crate) g: i32,
    /// Heuristic estimate of the remaining cost to the goal.
    pub(crate) h: i32,
    /// `g + h`, the sole expansion-order key.
    pub(crate) f: i32,
    /// Predecessor index on the best path found so far.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Stamped and open = frontier; stamped and not open = expanded.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            world: Vec2::ZERO,
            g: 0,
            h: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
