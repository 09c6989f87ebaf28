//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The tile catalog and orientation tags
//! - Rectangular grids with boundary-aware neighbor lookup

/// Grid storage and neighbor lookup
pub mod grid;
/// Tile categories, shapes and orientation tags
pub mod tiles;

pub use grid::{OrientationGrid, Probe, QuadrantGrid, Side, TileGrid};
pub use tiles::{OrientationTag, TileCategory, TileShape};
