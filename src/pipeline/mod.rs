//! Render parameters and stage orchestration

/// Render parameter value and validation
pub mod params;
/// Stage orchestration
pub mod renderer;

pub use params::RenderParams;
pub use renderer::{LicRenderer, RenderOutput, TextureSource};
