//! Orientation classification of quadrant cells
//!
//! Corners and junctions anchor the maze's wall runs. Each straight wall is
//! tagged vertical when it continues a run from a neighbor above or below,
//! and horizontal otherwise. Pellets, empty space and the ghost gate carry no
//! orientation.

use tracing::debug;

use crate::spatial::grid::{OrientationGrid, Probe, QuadrantGrid, Side};
use crate::spatial::tiles::{OrientationTag, TileCategory};

/// Tag every quadrant cell in a single raster pass
///
/// Walls read the tags already written for their up and down neighbors. The
/// row below is still unwritten when a wall is visited, so only the row above
/// can start a vertical run; the boundary never does.
pub fn classify(quadrant: &QuadrantGrid) -> OrientationGrid {
    let (rows, cols) = quadrant.dimensions();
    let mut tags = OrientationGrid::filled(rows, cols, OrientationTag::NotApplicable);

    for ((row, col), category) in quadrant.iter() {
        let tag = intrinsic_tag(category).unwrap_or_else(|| wall_run_tag(&tags, row, col));
        tags.set(row, col, tag);
    }

    debug!(rows, cols, "classified quadrant orientation");
    tags
}

/// Run direction of a straight wall given the tags written so far
pub fn wall_run_tag(tags: &OrientationGrid, row: usize, col: usize) -> OrientationTag {
    let continues = |side| match tags.neighbor(row, col, side) {
        Probe::Cell(tag) => OrientationTag::continues_vertical_run(tag),
        Probe::Boundary => false,
    };

    if continues(Side::Up) || continues(Side::Down) {
        OrientationTag::Vertical
    } else {
        OrientationTag::Horizontal
    }
}

/// Tag of a single category that needs no neighbor context, if any
///
/// Straight walls return `None` because their tag depends on their neighbors.
pub const fn intrinsic_tag(category: TileCategory) -> Option<OrientationTag> {
    if category.is_anchor() {
        Some(OrientationTag::Corner)
    } else if category.is_wall_run() {
        None
    } else {
        Some(OrientationTag::NotApplicable)
    }
}
