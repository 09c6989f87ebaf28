//! Level build orchestration: classify, mirror, resolve, emit
//!
//! The pipeline runs once per level. Every stage consumes the finished output
//! of the previous one and nothing is shared between builds.

use tracing::{debug, info, info_span};

use crate::algorithm::classify::classify;
use crate::algorithm::mirror::{MirroredLevel, expand};
use crate::io::error::Result;
use crate::io::layout::{LevelLayout, emit};
use crate::spatial::grid::{OrientationGrid, QuadrantGrid};
use crate::spatial::tiles::TileCategory;

/// Every intermediate and final product of one level build
#[derive(Debug, Clone)]
pub struct BuiltLevel {
    quadrant: QuadrantGrid,
    quadrant_orientation: OrientationGrid,
    level: MirroredLevel,
    layout: LevelLayout,
}

impl BuiltLevel {
    /// The authored quadrant
    pub const fn quadrant(&self) -> &QuadrantGrid {
        &self.quadrant
    }

    /// Orientation tags inferred for the quadrant
    pub const fn quadrant_orientation(&self) -> &OrientationGrid {
        &self.quadrant_orientation
    }

    /// The mirrored level
    pub const fn level(&self) -> &MirroredLevel {
        &self.level
    }

    /// The emitted tile layout
    pub const fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    /// Take ownership of the emitted layout
    pub fn into_layout(self) -> LevelLayout {
        self.layout
    }
}

/// Build a level from its authored quadrant
///
/// # Errors
///
/// Returns an error if the mirroring stage rejects the classified grids
pub fn build_level(quadrant: &QuadrantGrid) -> Result<BuiltLevel> {
    let (quadrant_rows, quadrant_cols) = quadrant.dimensions();
    let span = info_span!("build_level", quadrant_rows, quadrant_cols);
    let _entered = span.enter();

    let quadrant_orientation = classify(quadrant);
    debug!("orientation map:\n{quadrant_orientation}");

    let level = expand(quadrant, &quadrant_orientation)?;
    let layout = emit(&level);

    let (rows, cols) = layout.dimensions();
    info!(
        rows,
        cols,
        tiles = layout.entries.len(),
        pellets = layout.count(TileCategory::StandardPellet)
            + layout.count(TileCategory::PowerPellet),
        "level built"
    );

    Ok(BuiltLevel {
        quadrant: quadrant.clone(),
        quadrant_orientation,
        level,
        layout,
    })
}
