//! Mapping table: which source cell lands in which destination cell.

use crate::grid::{Cell, TileGrid};
use crate::{Result, SpriteToolsError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMove {
    pub src: Cell,
    pub dst: Cell,
}

impl TileMove {
    pub const fn new(src: (u32, u32), dst: (u32, u32)) -> Self {
        Self { src: Cell::new(src.0, src.1), dst: Cell::new(dst.0, dst.1) }
    }
}

/// Road sheet layout: 4×4 source variants packed into a 3×2 sheet.
const ROAD_TILES: [TileMove; 6] = [
    TileMove::new((0, 0), (0, 0)), // isolated
    TileMove::new((0, 1), (1, 0)), // end
    TileMove::new((1, 0), (2, 0)), // straight
    TileMove::new((2, 1), (0, 1)), // corner
    TileMove::new((3, 1), (1, 1)), // t-junction
    TileMove::new((3, 3), (2, 1)), // cross
];

/// Ordered moves, applied first to last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable {
    moves: Vec<TileMove>,
}

impl MappingTable {
    pub fn new(moves: Vec<TileMove>) -> Self {
        Self { moves }
    }

    pub fn road_tiles() -> Self {
        Self::new(ROAD_TILES.to_vec())
    }

    /// Parse a JSON array of `{ "src": [col, row], "dst": [col, row] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SpriteToolsError::Mapping(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn moves(&self) -> &[TileMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Destination grid extent: (max dst col + 1, max dst row + 1).
    pub fn target_dims(&self) -> Result<(u32, u32)> {
        let mut dims = (0, 0);
        for m in &self.moves {
            let (col, row) = match (m.dst.col.checked_add(1), m.dst.row.checked_add(1)) {
                (Some(col), Some(row)) => (col, row),
                _ => {
                    return Err(SpriteToolsError::DestinationOverflow { col: m.dst.col, row: m.dst.row })
                }
            };
            dims = (dims.0.max(col), dims.1.max(row));
        }
        Ok(dims)
    }

    /// Pairs of entry indices that write the same destination cell.
    pub fn duplicate_destinations(&self) -> Vec<(Cell, usize, usize)> {
        let mut seen: HashMap<Cell, usize> = HashMap::new();
        let mut dups = Vec::new();
        for (i, m) in self.moves.iter().enumerate() {
            if let Some(prev) = seen.insert(m.dst, i) {
                dups.push((m.dst, prev, i));
            }
        }
        dups
    }

    /// Checks the table against a source grid. With `strict`, colliding
    /// destinations are an error; otherwise the later entry wins.
    pub fn validate(&self, grid: &TileGrid, strict: bool) -> Result<()> {
        if self.is_empty() {
            return Err(SpriteToolsError::EmptyMapping);
        }
        for m in &self.moves {
            grid.rect(m.src)?;
        }
        self.target_dims()?;
        for (cell, first, second) in self.duplicate_destinations() {
            if strict {
                return Err(SpriteToolsError::DuplicateDestination {
                    col: cell.col,
                    row: cell.row,
                    first,
                    second,
                });
            }
            log::warn!(
                "entries {} and {} both target ({}, {}); entry {} wins",
                first, second, cell.col, cell.row, second
            );
        }
        Ok(())
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::road_tiles()
    }
}
