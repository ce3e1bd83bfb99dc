//! Tile map representation.
//!
//! # Data layout
//!
//! Tiles are stored row-major in a single `Vec<TileKind>`:
//!
//! ```text
//! tiles[ y * width + x ]
//! ```
//!
//! Buildings are not obstacles: units walk into footprints to load and
//! unload, so placing a building only re-labels its tiles as
//! [`TileKind::Building`].

use sl_core::{Point, Rect};

// ── TileKind ──────────────────────────────────────────────────────────────────

/// Terrain class of one tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Grass,
    Road,
    Building,
    Water,
}

impl TileKind {
    /// `false` only for tiles no unit can enter.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, TileKind::Water)
    }

    /// `true` for tiles a road-bound unit may enter.
    #[inline]
    pub fn is_road_connected(self) -> bool {
        matches!(self, TileKind::Road | TileKind::Building)
    }

    /// Cost of stepping onto this tile.  Roads and building floors are
    /// twice as fast as open ground.
    #[inline]
    pub fn step_cost(self) -> u32 {
        match self {
            TileKind::Road | TileKind::Building => 1,
            TileKind::Grass                     => 2,
            TileKind::Water                     => u32::MAX,
        }
    }
}

// ── TileMap ───────────────────────────────────────────────────────────────────

/// Rectangular grid of tiles starting at `(0, 0)`.
#[derive(Clone, Debug)]
pub struct TileMap {
    width:  u32,
    height: u32,
    tiles:  Vec<TileKind>,
}

impl TileMap {
    /// All-grass map of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Grass; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Terrain at `p`, or `None` outside the map.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<TileKind> {
        self.in_bounds(p).then(|| self.tiles[self.index(p)])
    }

    /// Overwrite one tile.  Returns `false` (and does nothing) outside the map.
    pub fn set(&mut self, p: Point, kind: TileKind) -> bool {
        if !self.in_bounds(p) {
            return false;
        }
        let i = self.index(p);
        self.tiles[i] = kind;
        true
    }

    /// Overwrite every in-bounds tile of `area`.
    pub fn fill(&mut self, area: Rect, kind: TileKind) {
        for p in area.tiles() {
            self.set(p, kind);
        }
    }

    /// Lay an L-shaped road from `from` to `to`: horizontal leg first, then
    /// vertical.  Building tiles along the way are left untouched.
    pub fn lay_road(&mut self, from: Point, to: Point) {
        let step_x = (to.x - from.x).signum();
        let step_y = (to.y - from.y).signum();
        let mut cur = from;
        loop {
            if self.tile(cur) != Some(TileKind::Building) {
                self.set(cur, TileKind::Road);
            }
            if cur.x != to.x {
                cur = cur.offset(step_x, 0);
            } else if cur.y != to.y {
                cur = cur.offset(0, step_y);
            } else {
                break;
            }
        }
    }

    /// In-bounds 4-neighbours of `p` in a fixed order (W, E, N, S).
    pub fn neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        [p.offset(-1, 0), p.offset(1, 0), p.offset(0, -1), p.offset(0, 1)]
            .into_iter()
            .filter(move |&n| self.in_bounds(n))
    }
}
