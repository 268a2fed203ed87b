//! Input/output surfaces around the rendering core

/// Command-line parsing and render jobs
pub mod cli;
/// Named defaults and constants
pub mod configuration;
/// Error types
pub mod error;
/// Texture decoding and raster export
pub mod image;
/// Progress display
pub mod progress;
