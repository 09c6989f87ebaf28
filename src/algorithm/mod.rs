/// Orientation tagging of quadrant cells
pub mod classify;
/// Quadrant-to-level mirroring
pub mod mirror;
/// Level build orchestration
pub mod pipeline;
/// Rotation and mirror decision tables
pub mod transform;
