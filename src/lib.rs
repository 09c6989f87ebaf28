//! Compile a hand-authored maze quadrant into a fully oriented tile layout
//!
//! The authored quadrant is mirrored into a symmetric level. Every wall,
//! corner and junction then gets a rotation or mirror derived purely from its
//! neighbors, so levels are authored as plain tile codes with no per-cell
//! orientation data.

#![forbid(unsafe_code)]

/// Classification, mirroring and transform resolution
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Rotation and mirroring arithmetic
pub mod math;
/// Tile catalog and grid storage
pub mod spatial;

pub use algorithm::pipeline::{BuiltLevel, build_level};
pub use io::error::{LevelError, Result};
