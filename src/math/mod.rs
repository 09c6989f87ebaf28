//! Mathematical utilities for tile transforms

/// Quarter-turn rotations and mirror sign pairs
pub mod rotation;

pub use rotation::{Mirror, Rotation};
