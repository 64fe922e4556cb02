//! Walkability maps built from text.
//!
//! A [`TileMap`] parses an ASCII description into a rectangular grid of
//! walkable/blocked cells and maps each cell to the world position of its
//! center, on a y-down layout (rows extend downward in world space).

use std::fmt;

use towerpath_core::{Point, Range, Vec2};
use towerpath_paths::TileGrid;

/// A rectangular walkability grid with a grid→world mapping.
///
/// Cells toggle between walkable and blocked over the map's lifetime
/// (placing and removing obstacles); the cell set itself is fixed at
/// construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    bounds: Range,
    walkable: Vec<bool>,
    tile_size: f32,
    /// World position of the top-left corner of cell (0, 0).
    world_start: Vec2,
}

impl TileMap {
    /// Create a map of the given size with every cell walkable.
    pub fn new(width: i32, height: i32, tile_size: f32, world_start: Vec2) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            walkable: vec![true; bounds.len()],
            bounds,
            tile_size,
            world_start,
        }
    }

    /// Parse a map from ASCII text.
    ///
    /// Lines are separated by `'\n'` and must all have the same width;
    /// leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. `'.'` and `'0'` mark walkable cells, `'#'`
    /// and `'1'` blocked ones (level files commonly use the digit form).
    pub fn parse(s: &str, tile_size: f32, world_start: Vec2) -> Result<Self, MapError> {
        let s = s.trim();
        let mut walkable = Vec::new();
        let mut width: i32 = -1;
        let mut height: i32 = 0;

        for line in s.lines() {
            let mut w: i32 = 0;
            for ch in line.chars() {
                match ch {
                    '.' | '0' => walkable.push(true),
                    '#' | '1' => walkable.push(false),
                    _ => {
                        return Err(MapError::InvalidGlyph {
                            ch,
                            pos: Point::new(w, height),
                        });
                    }
                }
                w += 1;
            }
            if width >= 0 && w != width {
                return Err(MapError::InconsistentWidth(s.to_string()));
            }
            width = w;
            height += 1;
        }

        if walkable.is_empty() {
            return Err(MapError::Empty);
        }

        Ok(Self {
            bounds: Range::new(0, 0, width, height),
            walkable,
            tile_size,
            world_start,
        })
    }

    /// The rectangle of cells the map consists of.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Side length of a cell in world units.
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Set the walkability of the cell at `p`.
    ///
    /// Returns the previous value, or `None` if `p` is out of bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Option<bool> {
        let i = self.idx(p)?;
        let prev = self.walkable[i];
        self.walkable[i] = walkable;
        Some(prev)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }
}

impl TileGrid for TileMap {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn is_walkable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.walkable[i])
    }

    /// World position of the center of the cell at `p`, y-down: columns
    /// extend toward +x, rows toward -y.
    fn world_position(&self, p: Point) -> Vec2 {
        let half = self.tile_size / 2.0;
        self.world_start
            + Vec2::new(
                self.tile_size * p.x as f32 + half,
                -self.tile_size * p.y as f32 - half,
            )
    }
}

/// Errors from [`TileMap::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// The input contained no cells.
    Empty,
    /// Lines have inconsistent widths.
    InconsistentWidth(String),
    /// A character outside the map alphabet was found.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty input"),
            Self::InconsistentWidth(s) => write!(f, "map: inconsistent line widths:\n{s}"),
            Self::InvalidGlyph { ch, pos } => {
                write!(
                    f,
                    "map contains invalid glyph \u{201c}{ch}\u{201d} at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for MapError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tilemap_round_trip() {
        let mut map = TileMap::new(2, 2, 1.5, Vec2::new(0.5, 0.5));
        map.set_walkable(Point::new(1, 0), false);
        let json = serde_json::to_string(&map).unwrap();
        let back: TileMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bounds(), map.bounds());
        assert!(!back.is_walkable(Point::new(1, 0)));
        assert_eq!(
            back.world_position(Point::new(0, 1)),
            map.world_position(Point::new(0, 1))
        );
    }
}
