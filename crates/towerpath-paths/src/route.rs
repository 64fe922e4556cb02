use std::collections::VecDeque;

use towerpath_core::{Point, Vec2};

/// A single step of a computed route.
///
/// Carries everything a movement consumer needs to drive an entity one cell
/// forward: the grid coordinate (for sorting-order and occupancy decisions)
/// and the cell's world position (for steering and animation).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub coord: Point,
    pub world: Vec2,
}

/// An ordered sequence of waypoints from just after the start cell up to and
/// including the goal cell.
///
/// [`pop`](Self::pop) drains waypoints in start→goal traversal order, so a
/// consumer can pull one waypoint at a time as its entity advances. The
/// start cell itself is never part of the route; a search where start equals
/// goal yields an empty route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    waypoints: VecDeque<Waypoint>,
    cost: i32,
}

impl Route {
    pub(crate) fn new(waypoints: VecDeque<Waypoint>, cost: i32) -> Self {
        Self { waypoints, cost }
    }

    /// Remove and return the next waypoint in traversal order.
    pub fn pop(&mut self) -> Option<Waypoint> {
        self.waypoints.pop_front()
    }

    /// The next waypoint in traversal order, without removing it.
    pub fn peek(&self) -> Option<&Waypoint> {
        self.waypoints.front()
    }

    /// The final waypoint (the goal cell), if any remain.
    pub fn goal(&self) -> Option<&Waypoint> {
        self.waypoints.back()
    }

    /// Number of waypoints remaining.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether no waypoints remain.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Total cost of the route as computed by the search (10 per axial
    /// step, 14 per diagonal step). Unaffected by [`pop`](Self::pop).
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Iterate over the remaining waypoints in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }
}

impl IntoIterator for Route {
    type Item = Waypoint;
    type IntoIter = std::collections::vec_deque::IntoIter<Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn waypoint_round_trip() {
        let w = Waypoint {
            coord: Point::new(3, 7),
            world: Vec2::new(3.5, -7.5),
        };
        let json = serde_json::to_string(&w).unwrap();
        let back: Waypoint = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
