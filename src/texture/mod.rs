//! Grayscale textures and noise synthesis

/// Intensity raster type
pub mod grid;
/// Folded-byte noise generation
pub mod noise;

pub use grid::Texture;
