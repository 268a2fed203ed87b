//! Per-pixel line integral convolution over a whole raster

use ndarray::Axis;
use rayon::prelude::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::convolution::kernel::DirectionalKernels;
use crate::convolution::streamline::{Accumulator, Direction, StreamlineSettings};
use crate::field::patterns::VectorField;
use crate::texture::grid::Texture;

/// Smears an input texture along the streamlines of a flow field
///
/// Rows are evaluated in parallel. Every pixel reads only the shared field and
/// input texture and writes only its own output cell, so the result does not
/// depend on scheduling.
#[derive(Debug, Clone)]
pub struct ConvolutionEngine {
    settings: StreamlineSettings,
    kernels: DirectionalKernels,
}

impl ConvolutionEngine {
    /// Create an engine from integration settings and kernel tables
    pub const fn new(settings: StreamlineSettings, kernels: DirectionalKernels) -> Self {
        Self { settings, kernels }
    }

    /// Integration settings in use
    pub const fn settings(&self) -> &StreamlineSettings {
        &self.settings
    }

    /// Forward and backward kernel tables in use
    pub const fn kernels(&self) -> &DirectionalKernels {
        &self.kernels
    }

    /// Convolve `texture` along `field`
    ///
    /// `field` is expected to be normalized and the same size as `texture`.
    pub fn convolve(&self, field: &VectorField, texture: &Texture) -> Texture {
        self.convolve_with_progress(field, texture, &|| {})
    }

    /// Convolve and call `on_row` once for every finished output row
    pub fn convolve_with_progress(
        &self,
        field: &VectorField,
        texture: &Texture,
        on_row: &(dyn Fn() + Sync),
    ) -> Texture {
        let mut output = Texture::new(field.width(), field.height());

        output
            .pixels_mut()
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut line)| {
                for (col, pixel) in line.iter_mut().enumerate() {
                    *pixel = self.pixel(field, texture, col, row);
                }
                on_row();
            });

        output
    }

    /// Output intensity of pixel `(col, row)`
    pub fn pixel(&self, field: &VectorField, texture: &Texture, col: usize, row: usize) -> u8 {
        let [forward, backward] = Direction::BOTH.map(|direction| {
            let kernel = match direction {
                Direction::Forward => &self.kernels.forward,
                Direction::Backward => &self.kernels.backward,
            };
            self.settings
                .integrate(field, texture, kernel, col, row, direction)
        });
        combine(forward, backward)
    }
}

/// Merge the two streamline halves into one byte
///
/// The weighted mean is clamped to `[0, 255]` and truncated. A zero total
/// weight or a NaN mean yields 0.
pub fn combine(forward: Accumulator, backward: Accumulator) -> u8 {
    let total_weight = forward.weight + backward.weight;
    if total_weight == 0.0 {
        return 0;
    }
    let value = (forward.texture + backward.texture) / total_weight;
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}
