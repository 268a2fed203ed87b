//! Single-channel intensity rasters

use ndarray::Array2;
use num_traits::clamp;

use crate::io::error::{LicError, Result};

/// Row-major grid of 8-bit grayscale samples, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pixels: Array2<u8>,
}

impl Texture {
    /// Create a black texture
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::zeros((height, width)),
        }
    }

    /// Create a texture where every sample has the same value
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), value),
        }
    }

    /// Build a texture from a function of `(col, row)`
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> u8,
    {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(row, col)| f(col, row)),
        }
    }

    /// Wrap a row-major sample buffer
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `samples.len() != width * height`
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        let expected = width * height;
        let actual = samples.len();
        let pixels = Array2::from_shape_vec((height, width), samples)
            .map_err(|_shape_error| LicError::DimensionMismatch { expected, actual })?;
        Ok(Self { pixels })
    }

    /// Wrap an existing `(height, width)` array
    pub const fn from_array(pixels: Array2<u8>) -> Self {
        Self { pixels }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Sample at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.pixels.get((y, x)).copied()
    }

    /// Nearest sample to a continuous position
    ///
    /// Coordinates are floored and then clamped into the raster, so positions
    /// past any edge replicate that edge instead of wrapping onto another row.
    pub fn sample_clamped(&self, x: f32, y: f32) -> u8 {
        if self.pixels.is_empty() {
            return 0;
        }
        let max_col = (self.width() - 1) as f32;
        let max_row = (self.height() - 1) as f32;
        let col = clamp(x.floor(), 0.0, max_col) as usize;
        let row = clamp(y.floor(), 0.0, max_row) as usize;
        self.get(col, row).unwrap_or(0)
    }

    /// Underlying sample array
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    /// Mutable access to the underlying sample array
    pub const fn pixels_mut(&mut self) -> &mut Array2<u8> {
        &mut self.pixels
    }

    /// Copy the samples out in row-major order
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }
}
