//! Tile grid - splits a sprite sheet into equal cols × rows cells.

use crate::{Result, SpriteToolsError};
use serde::{Deserialize, Serialize};

/// Zero-based (column, row) index into a tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((col, row): (u32, u32)) -> Self {
        Self { col, row }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.col, cell.row)
    }
}

/// Pixel rectangle in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cols: u32,
    rows: u32,
    tile_w: u32,
    tile_h: u32,
}

impl TileGrid {
    /// Tile size is the truncating division of the image size; the remainder
    /// on the right and bottom edges belongs to no tile.
    pub fn new(width: u32, height: u32, cols: u32, rows: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self { width, height, cols, rows, tile_w: width / cols, tile_h: height / rows }
    }

    /// Like `new`, but refuses images that leave a remainder.
    pub fn strict(width: u32, height: u32, cols: u32, rows: u32) -> Result<Self> {
        let grid = Self::new(width, height, cols, rows);
        if !grid.is_exact() {
            return Err(SpriteToolsError::Indivisible { width, height, cols: grid.cols, rows: grid.rows });
        }
        Ok(grid)
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_w, self.tile_h)
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixels dropped from the right and bottom edges.
    pub fn remainder(&self) -> (u32, u32) {
        (self.width % self.cols, self.height % self.rows)
    }

    pub fn is_exact(&self) -> bool {
        self.remainder() == (0, 0)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    /// Pixel rectangle covered by `cell`.
    pub fn rect(&self, cell: Cell) -> Result<Rect> {
        if !self.contains(cell) {
            return Err(SpriteToolsError::CellOutOfBounds {
                col: cell.col,
                row: cell.row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(self.place(cell))
    }

    /// Rectangle for `cell` at this grid's tile size, without bounds checks.
    /// Used for target sheets whose extent comes from the mapping table.
    /// Offsets saturate at `u32::MAX`.
    pub fn place(&self, cell: Cell) -> Rect {
        Rect {
            x: cell.col.saturating_mul(self.tile_w),
            y: cell.row.saturating_mul(self.tile_h),
            width: self.tile_w,
            height: self.tile_h,
        }
    }
}
