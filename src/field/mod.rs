//! Synthetic flow fields
//!
//! Fields are dense row-major grids with one vector per pixel center.

/// Analytic flow patterns and the field container
pub mod patterns;
/// Vector type and normalization
pub mod vector;

pub use patterns::{FlowPattern, VectorField};
pub use vector::Vec2;
