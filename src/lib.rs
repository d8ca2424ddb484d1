//! Offline sprite sheet tools: corner color inspection and tile remapping.

pub mod grid;
pub mod inspect;
pub mod mapping;
pub mod remap;

pub use grid::{Cell, Rect, TileGrid};
pub use inspect::{ColorReading, ColorReport};
pub use mapping::{MappingTable, TileMove};
pub use remap::{Remapped, Remapper};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriteToolsError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Mapping error: {0}")]
    Mapping(String),
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} source grid")]
    CellOutOfBounds { col: u32, row: u32, cols: u32, rows: u32 },
    #[error("destination ({col}, {row}) is targeted by entries {first} and {second}")]
    DuplicateDestination { col: u32, row: u32, first: usize, second: usize },
    #[error("destination ({col}, {row}) is past the last addressable cell")]
    DestinationOverflow { col: u32, row: u32 },
    #[error("target sheet of {width}x{height} pixels is too large")]
    TargetTooLarge { width: u64, height: u64 },
    #[error("mapping table has no entries")]
    EmptyMapping,
    #[error("image of {width}x{height} has no pixels to sample")]
    EmptyImage { width: u32, height: u32 },
    #[error("{width}x{height} is not divisible into a {cols}x{rows} grid")]
    Indivisible { width: u32, height: u32, cols: u32, rows: u32 },
}

pub type Result<T> = std::result::Result<T, SpriteToolsError>;
