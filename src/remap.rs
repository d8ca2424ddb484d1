//! Tile remapping - crops cells out of a source sheet and pastes them into a
//! new, smaller sheet.

use crate::grid::TileGrid;
use crate::mapping::MappingTable;
use crate::{Result, SpriteToolsError};
use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Fill for target cells no mapping entry writes.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub const DEFAULT_GRID: (u32, u32) = (4, 4);

/// Largest target sheet, in pixels, the remapper will allocate (16384²).
pub const MAX_TARGET_PIXELS: u64 = 1 << 28;

pub struct Remapper {
    table: MappingTable,
    cols: u32,
    rows: u32,
    strict: bool,
}

impl Remapper {
    pub fn new(table: MappingTable) -> Self {
        Self { table, cols: DEFAULT_GRID.0, rows: DEFAULT_GRID.1, strict: false }
    }

    pub fn with_grid(mut self, cols: u32, rows: u32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Reject sources with a truncated remainder and colliding destinations.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Source grid for an image of this size, with the table checked against
    /// it. No pixels are touched.
    pub fn plan(&self, width: u32, height: u32) -> Result<TileGrid> {
        let grid = if self.strict {
            TileGrid::strict(width, height, self.cols, self.rows)?
        } else {
            TileGrid::new(width, height, self.cols, self.rows)
        };

        let (tile_w, tile_h) = grid.tile_size();
        if tile_w == 0 || tile_h == 0 {
            return Err(SpriteToolsError::EmptyImage { width, height });
        }

        let (rem_w, rem_h) = grid.remainder();
        if rem_w != 0 || rem_h != 0 {
            log::warn!(
                "{}x{} leaves {}px on the right and {}px at the bottom outside every tile",
                width, height, rem_w, rem_h
            );
        }

        self.table.validate(&grid, self.strict)?;
        self.target_size(&grid)?;
        Ok(grid)
    }

    /// Pixel size of the target sheet for tiles cut from `grid`.
    pub fn target_size(&self, grid: &TileGrid) -> Result<(u32, u32)> {
        let (cols, rows) = self.table.target_dims()?;
        let (tile_w, tile_h) = grid.tile_size();
        let too_large = || SpriteToolsError::TargetTooLarge {
            width: u64::from(cols) * u64::from(tile_w),
            height: u64::from(rows) * u64::from(tile_h),
        };

        let width = cols.checked_mul(tile_w).ok_or_else(too_large)?;
        let height = rows.checked_mul(tile_h).ok_or_else(too_large)?;
        if u64::from(width) * u64::from(height) > MAX_TARGET_PIXELS {
            return Err(too_large());
        }
        Ok((width, height))
    }

    pub fn remap(&self, source: &DynamicImage) -> Result<Remapped> {
        let source = source.to_rgba8();
        let grid = self.plan(source.width(), source.height())?;

        let (width, height) = self.target_size(&grid)?;
        let mut target = RgbaImage::from_pixel(width, height, BACKGROUND);

        for m in self.table.moves() {
            let from = grid.rect(m.src)?;
            let to = grid.place(m.dst);
            let tile = imageops::crop_imm(&source, from.x, from.y, from.width, from.height).to_image();
            // replace overwrites alpha too; overlay would blend
            imageops::replace(&mut target, &tile, to.x as i64, to.y as i64);
            log::debug!(
                "({}, {}) -> ({}, {}) at {},{}",
                m.src.col, m.src.row, m.dst.col, m.dst.row, to.x, to.y
            );
        }

        Ok(Remapped { image: target, grid })
    }
}

impl Default for Remapper {
    fn default() -> Self {
        Self::new(MappingTable::road_tiles())
    }
}

pub struct Remapped {
    pub image: RgbaImage,
    pub grid: TileGrid,
}

impl Remapped {
    /// Writes PNG, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

pub fn load_source(path: impl AsRef<Path>) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}
