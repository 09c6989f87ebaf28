//! Level constants and runtime configuration defaults

/// Authored top-left quadrant of the reference maze, in tile codes
///
/// The bottom row is the horizontal symmetry axis of the full level.
pub const SAMPLE_QUADRANT: [[u8; 14]; 15] = [
    [1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 7],
    [2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4],
    [2, 5, 3, 4, 4, 3, 5, 3, 4, 4, 4, 3, 5, 4],
    [2, 6, 4, 0, 0, 4, 5, 4, 0, 0, 0, 4, 5, 4],
    [2, 5, 3, 4, 4, 3, 5, 3, 4, 4, 4, 3, 5, 3],
    [2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    [2, 5, 3, 4, 4, 3, 5, 3, 3, 5, 3, 4, 4, 4],
    [2, 5, 3, 4, 4, 3, 5, 4, 4, 5, 3, 4, 4, 3],
    [2, 5, 5, 5, 5, 5, 5, 4, 4, 5, 5, 5, 5, 4],
    [1, 2, 2, 2, 2, 1, 5, 4, 3, 4, 4, 3, 0, 4],
    [0, 0, 0, 0, 0, 2, 5, 4, 3, 4, 4, 3, 0, 3],
    [0, 0, 0, 0, 0, 2, 5, 4, 4, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 2, 5, 4, 4, 0, 3, 4, 4, 8],
    [2, 2, 2, 2, 2, 1, 5, 3, 3, 0, 4, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 4, 0, 0, 0],
];

/// Maximum accepted quadrant height or width
pub const MAX_QUADRANT_DIMENSION: usize = 1_024;

/// Offset from a cell's corner to its centre in world units
pub const CELL_CENTER_OFFSET: f32 = 0.5;

// Preview rendering settings
/// Default side length of one tile in the preview image, in pixels
pub const DEFAULT_TILE_PIXELS: u32 = 16;
/// Smallest tile side length that still shows line orientation
pub const MIN_TILE_PIXELS: u32 = 3;
/// Largest tile side length accepted for previews
pub const MAX_TILE_PIXELS: u32 = 64;
/// Largest preview image accepted, in pixels (1 GiB of RGBA)
pub const MAX_PREVIEW_PIXELS: u64 = 1 << 28;

// Logging
/// Environment variable holding the log filter directive
pub const LOG_FILTER_ENV: &str = "QUADMAZE_LOG";
/// Log filter used when the environment variable is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// Output settings
/// Suffix added to layout output filenames
pub const LAYOUT_SUFFIX: &str = "_layout";
/// File stem used for outputs of the built-in sample
pub const SAMPLE_STEM: &str = "sample";
