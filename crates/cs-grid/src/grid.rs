//! Rectangular tile grid with optional toroidal wrapping.
//!
//! # Layout
//!
//! Tiles are stored in a single `Vec<Tile>`, row-major:
//!
//!   index = y * width + x
//!
//! The environment hands boards over column-major (`columns[x][y]`);
//! [`Grid::from_columns`] transposes once at construction so every lookup
//! afterwards is a bounds-free multiply-add.
//!
//! # Wrapping
//!
//! On a toroidal grid every coordinate is reduced modulo width/height before
//! use, so lookups never fail.  On a bounded grid off-grid coordinates simply
//! do not exist: [`Grid::tile_at`] returns `None` and [`Grid::neighbors4`]
//! omits them.

use cs_core::{Direction, Position, Tile};

use crate::{GridError, GridResult};

/// A `width × height` board of [`Tile`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:    i32,
    height:   i32,
    toroidal: bool,
    tiles:    Vec<Tile>,
}

impl Grid {
    // ── Construction ──────────────────────────────────────────────────────

    /// A grid with every tile set to `fill`.
    pub fn new(width: i32, height: i32, fill: Tile, toroidal: bool) -> GridResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions {
                width:  width as i64,
                height: height as i64,
            });
        }
        let area = width as usize * height as usize;
        Ok(Self { width, height, toroidal, tiles: vec![fill; area] })
    }

    /// Build from the environment's column-major tag matrix: `columns.len()`
    /// is the width and every column must hold exactly `height` tags.
    pub fn from_columns<C: AsRef<[i32]>>(columns: &[C], toroidal: bool) -> GridResult<Self> {
        let height = columns.first().map_or(0, |c| c.as_ref().len());
        if columns.is_empty() || height == 0 {
            return Err(GridError::EmptyBoard);
        }
        for (column, c) in columns.iter().enumerate() {
            let got = c.as_ref().len();
            if got != height {
                return Err(GridError::Ragged { column, expected: height, got });
            }
        }

        let invalid = || GridError::InvalidDimensions {
            width:  columns.len() as i64,
            height: height as i64,
        };
        let w = i32::try_from(columns.len()).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;

        let mut grid = Grid::new(w, h, Tile::Empty, toroidal)?;
        for (x, column) in columns.iter().enumerate() {
            for (y, &tag) in column.as_ref().iter().enumerate() {
                grid.tiles[y * columns.len() + x] = Tile::from_tag(tag);
            }
        }
        Ok(grid)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total tile count, `width × height`.
    #[inline]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// The canonical on-grid form of `pos`: wrapped on a torus, or `None` if
    /// it lies off a bounded grid.
    #[inline]
    pub fn canonical(&self, pos: Position) -> Option<Position> {
        if self.toroidal {
            Some(pos.wrapped(self.width, self.height))
        } else if (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y) {
            Some(pos)
        } else {
            None
        }
    }

    /// Flat storage index for `pos`, after canonicalization.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.canonical(pos)
            .map(|p| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Storage index of an already-canonical position.
    #[inline]
    pub(crate) fn canonical_index(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Inverse of [`index_of`][Self::index_of] for an in-range index.
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        let w = self.width as usize;
        Position::new((index % w) as i32, (index / w) as i32)
    }

    // ── Tiles ─────────────────────────────────────────────────────────────

    /// The tile at `pos`.  Never `None` on a toroidal grid.
    #[inline]
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.index_of(pos).map(|i| self.tiles[i])
    }

    #[inline]
    pub(crate) fn tile_at_index(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    /// Overwrite the tile at `pos` (e.g. a consumed goal becoming empty).
    /// Returns the previous tile, or `None` if `pos` is off-grid.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> Option<Tile> {
        let i = self.index_of(pos)?;
        Some(std::mem::replace(&mut self.tiles[i], tile))
    }

    /// `true` if `pos` exists and holds a wall.  Off-grid counts as a wall.
    #[inline]
    pub fn is_wall(&self, pos: Position) -> bool {
        self.tile_at(pos).is_none_or(Tile::is_wall)
    }

    /// Iterate `(position, tile)` over the whole board in storage order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (self.position_of(i), t))
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// The orthogonal neighbors of `pos` in [`Direction::MOVES`] order,
    /// paired with the direction that reaches them.  Wrapped on a torus;
    /// off-grid neighbors are skipped on a bounded grid.
    pub fn neighbors4(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::MOVES
            .into_iter()
            .filter_map(move |dir| self.canonical(pos.step(dir)).map(|p| (dir, p)))
    }

    /// Per-axis wrapped Manhattan distance between `a` and `b`.
    ///
    /// This is the torus metric regardless of the grid's own mode; the
    /// tactical layer uses it as its only notion of distance.
    #[inline]
    pub fn toroidal_distance(&self, a: Position, b: Position) -> u32 {
        a.torus_distance(b, self.width, self.height)
    }
}
