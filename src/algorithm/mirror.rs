//! Quadrant-to-level mirroring
//!
//! The authored quadrant is the top-left corner of a level that is symmetric
//! under left-right and top-bottom reflection. The quadrant's bottom row is
//! the horizontal axis and appears once in the level. Its right edge is not an
//! axis: every column is duplicated, so a `h x w` quadrant produces a
//! `(2h - 1) x 2w` level.

use tracing::debug;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{OrientationGrid, QuadrantGrid};
use crate::spatial::tiles::{OrientationTag, TileCategory};

/// Full level categories with their matching orientation tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredLevel {
    tiles: QuadrantGrid,
    orientation: OrientationGrid,
}

impl MirroredLevel {
    /// Full level tile categories
    pub const fn tiles(&self) -> &QuadrantGrid {
        &self.tiles
    }

    /// Full level orientation tags
    pub const fn orientation(&self) -> &OrientationGrid {
        &self.orientation
    }

    /// Level dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.tiles.dimensions()
    }

    /// Category and tag of a level cell
    pub fn cell(&self, row: usize, col: usize) -> Option<(TileCategory, OrientationTag)> {
        Some((self.tiles.get(row, col)?, self.orientation.get(row, col)?))
    }
}

/// Dimensions of the level mirrored from a quadrant of the given dimensions
pub const fn full_dimensions(quadrant: (usize, usize)) -> (usize, usize) {
    let (height, width) = quadrant;
    ((2 * height).saturating_sub(1), 2 * width)
}

/// Level cells that receive a copy of quadrant cell `(row, col)`
///
/// Yields the top-left and top-right images, plus the bottom-left and
/// bottom-right images unless `row` is the shared axis row.
pub fn mirror_images(
    row: usize,
    col: usize,
    quadrant: (usize, usize),
) -> impl Iterator<Item = (usize, usize)> {
    let (height, width) = quadrant;
    let mirrored_col = (2 * width).saturating_sub(col + 1);
    let mirrored_row = (row + 1 < height).then(|| (2 * height).saturating_sub(row + 2));

    [(row, col), (row, mirrored_col)].into_iter().chain(
        mirrored_row
            .into_iter()
            .flat_map(move |mirrored| [(mirrored, col), (mirrored, mirrored_col)]),
    )
}

/// Quadrant cell a level cell was copied from
pub const fn quadrant_source(row: usize, col: usize, quadrant: (usize, usize)) -> (usize, usize) {
    let (height, width) = quadrant;
    let source_row = if row < height {
        row
    } else {
        (2 * height).saturating_sub(row + 2)
    };
    let source_col = if col < width {
        col
    } else {
        (2 * width).saturating_sub(col + 1)
    };
    (source_row, source_col)
}

/// Mirror a quadrant and its orientation tags into the full level
///
/// Category and tag travel together so the two level grids always agree.
///
/// # Errors
///
/// Returns an error if the orientation grid does not match the quadrant shape
pub fn expand(quadrant: &QuadrantGrid, orientation: &OrientationGrid) -> Result<MirroredLevel> {
    let dims = quadrant.dimensions();
    if orientation.dimensions() != dims {
        return Err(invalid_parameter(
            "orientation",
            &format!("{:?}", orientation.dimensions()),
            &format!("must match quadrant dimensions {dims:?}"),
        ));
    }

    let (rows, cols) = full_dimensions(dims);
    let mut tiles = QuadrantGrid::filled(rows, cols, TileCategory::Empty);
    let mut tags = OrientationGrid::filled(rows, cols, OrientationTag::NotApplicable);

    for ((row, col), category) in quadrant.iter() {
        let tag = orientation.get(row, col).unwrap_or_default();
        for (target_row, target_col) in mirror_images(row, col, dims) {
            tiles.set(target_row, target_col, category);
            tags.set(target_row, target_col, tag);
        }
    }

    debug!(
        quadrant_rows = dims.0,
        quadrant_cols = dims.1,
        rows,
        cols,
        "mirrored quadrant into level"
    );

    Ok(MirroredLevel {
        tiles,
        orientation: tags,
    })
}
