//! Input/output: decoding, layout emission, previews and the CLI

/// Command-line front end
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error taxonomy
pub mod error;
/// PNG preview rendering
pub mod image;
/// Layout entries and JSON export
pub mod layout;
/// Quadrant decoding from codes, text and JSON
pub mod quadrant;
