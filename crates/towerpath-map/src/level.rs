//! Level plumbing: spawn pair, cached route, validated obstacle placement.

use std::fmt;

use log::debug;
use towerpath_core::Point;
use towerpath_paths::{PathError, PathFinder, Route, TileGrid};

use crate::tilemap::TileMap;

/// A playable level: a walkability map, an entry→exit spawn pair, and a
/// pathfinder serving route queries against it.
///
/// The full entry→exit route is cached and regenerated only after an
/// obstacle changes; obstacle placement is validated by a trial search so
/// the route can never be severed. "Would sever the route" is a routine,
/// frequently probed outcome, not a failure of the level.
#[derive(Debug)]
pub struct Level {
    map: TileMap,
    finder: PathFinder,
    entry: Point,
    exit: Point,
    route: Option<Route>,
}

impl Level {
    /// Create a level over `map` with the given spawn cells.
    ///
    /// Fails fast if either spawn lies outside the map.
    pub fn new(map: TileMap, entry: Point, exit: Point) -> Result<Self, PathError> {
        let bounds = map.bounds();
        for p in [entry, exit] {
            if !bounds.contains(p) {
                return Err(PathError::OutOfBounds(p));
            }
        }
        Ok(Self {
            map,
            finder: PathFinder::new(),
            entry,
            exit,
            route: None,
        })
    }

    /// The underlying walkability map.
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// The cell monsters spawn at.
    pub fn entry(&self) -> Point {
        self.entry
    }

    /// The cell monsters walk toward.
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// The full entry→exit route, recomputed if an obstacle changed since
    /// the last call.
    ///
    /// Returns a copy each caller can drain independently; `None` if no
    /// route exists (possible only when the initial map already has none,
    /// since placement is validated).
    pub fn route(&mut self) -> Option<Route> {
        if self.route.is_none() {
            self.route = self.search(self.entry, self.exit);
        }
        self.route.clone()
    }

    /// Whether an obstacle may be placed at `p` without severing the
    /// route. Cheap and side-effect-free; meant to be probed on every
    /// placement attempt.
    pub fn can_place(&mut self, p: Point) -> bool {
        self.check_placement(p).is_ok()
    }

    /// Place an obstacle at `p`, validated by a trial search.
    pub fn place_obstacle(&mut self, p: Point) -> Result<(), PlaceError> {
        self.check_placement(p)?;
        self.map.set_walkable(p, false);
        self.route = None;
        Ok(())
    }

    /// Remove a previously placed obstacle at `p`.
    pub fn remove_obstacle(&mut self, p: Point) -> Result<(), PlaceError> {
        if !self.map.bounds().contains(p) {
            return Err(PlaceError::OutOfBounds(p));
        }
        if self.map.is_walkable(p) {
            return Err(PlaceError::NotOccupied(p));
        }
        self.map.set_walkable(p, true);
        self.route = None;
        Ok(())
    }

    /// Trial-search placement check: block the cell, probe, restore.
    ///
    /// The probe runs exit→entry. A blocked entry is then a blocked *goal*
    /// and fails the search naturally; the exit needs the explicit check
    /// because a search never verifies its own start cell.
    fn check_placement(&mut self, p: Point) -> Result<(), PlaceError> {
        if !self.map.bounds().contains(p) {
            return Err(PlaceError::OutOfBounds(p));
        }
        if p == self.exit {
            return Err(PlaceError::ExitSpawn(p));
        }
        if !self.map.is_walkable(p) {
            return Err(PlaceError::Occupied(p));
        }

        self.map.set_walkable(p, false);
        let still_connected = self.search(self.exit, self.entry).is_some();
        self.map.set_walkable(p, true);

        if !still_connected {
            debug!("placement at {p} rejected: would sever the route");
            return Err(PlaceError::Severs(p));
        }
        Ok(())
    }

    fn search(&mut self, from: Point, to: Point) -> Option<Route> {
        // Both spawns were bounds-checked at construction and the map's
        // cell set never changes, so the search cannot report an invalid
        // endpoint.
        self.finder.find_path(&self.map, from, to).unwrap_or(None)
    }
}

/// Reasons an obstacle placement or removal is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The cell lies outside the map.
    OutOfBounds(Point),
    /// The cell already holds an obstacle.
    Occupied(Point),
    /// The cell is the exit spawn.
    ExitSpawn(Point),
    /// Blocking the cell would leave no entry→exit route.
    Severs(Point),
    /// Removal target holds no obstacle.
    NotOccupied(Point),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the map"),
            Self::Occupied(p) => write!(f, "cell {p} already holds an obstacle"),
            Self::ExitSpawn(p) => write!(f, "cell {p} is the exit spawn"),
            Self::Severs(p) => write!(f, "blocking {p} would sever the route"),
            Self::NotOccupied(p) => write!(f, "cell {p} holds no obstacle"),
        }
    }
}

impl std::error::Error for PlaceError {}
