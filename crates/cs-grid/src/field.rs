//! Breadth-first distance fields.

use cs_core::Position;

use crate::Grid;

/// BFS depth from a single source for every tile of a grid.
///
/// Unreached tiles (obstacles, or tiles cut off from the source) hold the
/// [`UNREACHED`][Self::UNREACHED] sentinel internally and read back as
/// `None` through [`get`][Self::get].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    width:    i32,
    height:   i32,
    toroidal: bool,
    depths:   Vec<u32>,
}

impl DistanceField {
    pub const UNREACHED: u32 = u32::MAX;

    /// A field over `grid` with every tile unreached.
    pub(crate) fn unreached(grid: &Grid) -> Self {
        Self {
            width:    grid.width(),
            height:   grid.height(),
            toroidal: grid.is_toroidal(),
            depths:   vec![Self::UNREACHED; grid.area()],
        }
    }

    #[inline]
    pub(crate) fn raw(&self, index: usize) -> u32 {
        self.depths[index]
    }

    #[inline]
    pub(crate) fn set_raw(&mut self, index: usize, depth: u32) {
        self.depths[index] = depth;
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Depth at `pos`, or `None` if unreached or outside the field.
    /// Wraps `pos` when the source grid is toroidal, like [`Grid::tile_at`].
    pub fn get(&self, pos: Position) -> Option<u32> {
        let pos = if self.toroidal { pos.wrapped(self.width, self.height) } else { pos };
        if !(0..self.width).contains(&pos.x) || !(0..self.height).contains(&pos.y) {
            return None;
        }
        let d = self.depths[pos.y as usize * self.width as usize + pos.x as usize];
        (d != Self::UNREACHED).then_some(d)
    }

    #[inline]
    pub fn is_reached(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Number of tiles the search reached, source included.
    pub fn reached_count(&self) -> usize {
        self.depths.iter().filter(|&&d| d != Self::UNREACHED).count()
    }

    /// Largest finite depth, or `None` if nothing was reached.
    pub fn max_depth(&self) -> Option<u32> {
        self.depths.iter().copied().filter(|&d| d != Self::UNREACHED).max()
    }
}
