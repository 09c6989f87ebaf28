//! Layout emission: the hand-off from the level pipeline to a renderer
//!
//! A [`LevelLayout`] lists one [`LayoutEntry`] per drawable level cell, in
//! row-major order, together with the level dimensions a camera needs to frame
//! it. Consumers must not rely on entry order.

use serde::Serialize;
use std::path::Path;

use crate::algorithm::mirror::MirroredLevel;
use crate::algorithm::transform::resolve_all;
use crate::io::configuration::CELL_CENTER_OFFSET;
use crate::io::error::{LevelError, Result, WithPath};
use crate::math::rotation::{Mirror, Rotation};
use crate::spatial::tiles::TileCategory;

/// A single tile to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutEntry {
    /// Tile category, which selects the sprite
    pub category: TileCategory,
    /// Level row, counted from the top
    pub row: usize,
    /// Level column, counted from the left
    pub col: usize,
    /// Cell centre in world units, y pointing up
    pub position: [f32; 2],
    /// Counter-clockwise sprite rotation
    pub rotation: Rotation,
    /// Sprite scale signs
    pub mirror: Mirror,
}

/// Every drawable tile of a level plus the level dimensions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelLayout {
    /// Level height in cells
    pub rows: usize,
    /// Level width in cells
    pub cols: usize,
    /// Tiles in row-major order
    pub entries: Vec<LayoutEntry>,
}

/// World position of the centre of level cell `(row, col)`
///
/// Grid rows grow downwards while world y grows upwards.
pub fn world_position(row: usize, col: usize) -> [f32; 2] {
    [
        col as f32 + CELL_CENTER_OFFSET,
        -(row as f32) - CELL_CENTER_OFFSET,
    ]
}

/// Resolve every cell of a mirrored level and list the non-empty ones
pub fn emit(level: &MirroredLevel) -> LevelLayout {
    let (rows, cols) = level.dimensions();
    let transforms = resolve_all(level);

    let entries = level
        .tiles()
        .iter()
        .filter(|&(_, category)| category != TileCategory::Empty)
        .map(|((row, col), category)| {
            let transform = transforms.get(row, col).unwrap_or_default();
            LayoutEntry {
                category,
                row,
                col,
                position: world_position(row, col),
                rotation: transform.rotation,
                mirror: transform.mirror,
            }
        })
        .collect();

    LevelLayout {
        rows,
        cols,
        entries,
    }
}

impl LevelLayout {
    /// Level dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry emitted for level cell `(row, col)`, if the cell is drawable
    pub fn entry_at(&self, row: usize, col: usize) -> Option<&LayoutEntry> {
        self.entries
            .iter()
            .find(|entry| entry.row == row && entry.col == col)
    }

    /// Number of entries of the given category
    pub fn count(&self, category: TileCategory) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }

    /// Pretty-printed JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the layout as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - Serialization or writing the file fails
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| LevelError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let json = self.to_json().with_path(path)?;
        std::fs::write(path, json).map_err(|e| LevelError::FileSystem {
            path: path.to_path_buf(),
            operation: "write layout",
            source: e,
        })
    }
}
