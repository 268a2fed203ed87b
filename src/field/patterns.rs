//! Closed-form flow patterns sampled on a pixel grid
//!
//! Every pattern places an exact zero vector at the grid center
//! `(width / 2, height / 2)` so the convolution always meets at least one
//! singularity.

use clap::ValueEnum;
use ndarray::Array2;

use crate::field::vector::Vec2;

/// Analytic flow pattern selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FlowPattern {
    /// Hyperbolic flow around a stationary center
    #[default]
    Saddle,
    /// Counter-clockwise rotation about the center
    Vortex,
    /// Radial flow away from the center
    Source,
    /// Radial flow toward the center
    Sink,
    /// Constant diagonal flow around a stagnant circular core
    Uniform,
}

impl FlowPattern {
    /// Vector at offset `(dx, dy)` from the field center
    fn vector_at(self, dx: f32, dy: f32, core_radius: f32) -> Vec2 {
        match self {
            Self::Saddle => Vec2::new(dy, dx),
            Self::Vortex => Vec2::new(-dy, dx),
            Self::Source => Vec2::new(dx, dy),
            Self::Sink => Vec2::new(-dx, -dy),
            Self::Uniform => {
                if dx.hypot(dy) <= core_radius {
                    Vec2::ZERO
                } else {
                    Vec2::new(1.0, 1.0)
                }
            }
        }
    }
}

/// Dense grid of flow vectors, indexed `[row, col]`
#[derive(Debug, Clone)]
pub struct VectorField {
    vectors: Array2<Vec2>,
}

impl VectorField {
    /// Sample a pattern over a `width` x `height` grid
    ///
    /// The vectors are raw pattern values; call [`VectorField::normalize`]
    /// before convolution.
    pub fn generate(width: usize, height: usize, pattern: FlowPattern) -> Self {
        // Integer halves keep the singular cell exactly on the grid
        let center_x = (width / 2) as f32;
        let center_y = (height / 2) as f32;
        let core_radius = (width.min(height) / 16) as f32;

        let vectors = Array2::from_shape_fn((height, width), |(row, col)| {
            pattern.vector_at(col as f32 - center_x, row as f32 - center_y, core_radius)
        });

        Self { vectors }
    }

    /// Build a field from an arbitrary function of `(col, row)`
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Vec2,
    {
        Self {
            vectors: Array2::from_shape_fn((height, width), |(row, col)| f(col, row)),
        }
    }

    /// Rescale every non-zero vector to unit length
    pub fn normalize(&mut self) {
        self.vectors.mapv_inplace(Vec2::normalized);
    }

    /// Consume the field and return it normalized
    #[must_use]
    pub fn into_normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Vector stored at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Vec2> {
        self.vectors.get((y, x)).copied()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.vectors.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.vectors.nrows()
    }

    /// Iterate over all vectors in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.vectors.iter()
    }
}
