//! Tile geometry: points, building footprints, and footprint distance.
//!
//! Coordinates are integer tile positions.  A `Rect` is **inclusive** on all
//! four sides, so a 2×2 footprint at `(4, 4)` covers tiles `(4..=5, 4..=5)`.

use std::fmt;

// ── Point ─────────────────────────────────────────────────────────────────────

/// A single tile position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned block of tiles, inclusive on every side.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left:   i32,
    pub top:    i32,
    pub right:  i32,
    pub bottom: i32,
}

impl Rect {
    /// Footprint with its top-left tile at `origin`.
    ///
    /// A zero `width` or `height` is treated as 1: every footprint covers at
    /// least one tile.
    pub fn new(origin: Point, width: u32, height: u32) -> Self {
        let w = width.max(1) as i32;
        let h = height.max(1) as i32;
        Self {
            left:   origin.x,
            top:    origin.y,
            right:  origin.x + w - 1,
            bottom: origin.y + h - 1,
        }
    }

    /// The 1×1 footprint of a single tile.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self { left: p.x, top: p.y, right: p.x, bottom: p.y }
    }

    /// Top-left tile.  Paths to a building end here.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        (self.right - self.left + 1) as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1) as u32
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.left..=self.right).contains(&p.x) && (self.top..=self.bottom).contains(&p.y)
    }

    /// Euclidean gap between the closest tiles of `self` and `other`.
    ///
    /// Zero when the rectangles share at least one tile.  Neighbouring tiles
    /// are 1.0 apart, diagonal neighbours √2.
    pub fn distance(&self, other: &Rect) -> f64 {
        let dx = (other.left - self.right).max(self.left - other.right).max(0) as f64;
        let dy = (other.top - self.bottom).max(self.top - other.bottom).max(0) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// [`distance`](Self::distance) to a single tile.
    #[inline]
    pub fn distance_to_point(&self, p: Point) -> f64 {
        self.distance(&Rect::from_point(p))
    }

    /// Iterator over every tile inside the rectangle, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Point> + '_ {
        (self.top..=self.bottom)
            .flat_map(move |y| (self.left..=self.right).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} .. {}, {}]", self.left, self.top, self.right, self.bottom)
    }
}
