//! Immutable render parameters with documented defaults

use crate::convolution::kernel::DirectionalKernels;
use crate::convolution::streamline::StreamlineSettings;
use crate::field::patterns::FlowPattern;
use crate::io::configuration::{
    DEFAULT_BLUR_RADIUS, DEFAULT_BLUR_SIGMA, DEFAULT_DISCRETE_FILTER_SIZE, DEFAULT_FIELD_SIZE,
    DEFAULT_KERNEL_LENGTH, DEFAULT_LINE_SQUARE_CLIP_MAX, DEFAULT_PATTERN,
    DEFAULT_VECTOR_COMPONENT_MINIMUM, FAST_KERNEL_LENGTH,
};
use crate::io::error::{Result, invalid_parameter};

/// Everything a render needs, fixed before the render starts
///
/// Setters consume and return the value so a configuration reads as a chain
/// but can never be mutated once handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Flow pattern to synthesize
    pub pattern: FlowPattern,
    /// Side length of the square field when no input texture is given
    pub field_size: usize,
    /// Number of entries in each kernel lookup table
    pub discrete_filter_size: usize,
    /// Streamline arc-length integrated in each direction
    pub kernel_length: f32,
    /// Upper bound on a single integration segment
    pub line_square_clip_max: f32,
    /// Components at or below this magnitude never bound a segment
    pub vector_component_minimum: f32,
    /// Radius of the smoothing pass, 0 disables it
    pub blur_radius: usize,
    /// Standard deviation of the smoothing pass
    pub blur_sigma: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN,
            field_size: DEFAULT_FIELD_SIZE,
            discrete_filter_size: DEFAULT_DISCRETE_FILTER_SIZE,
            kernel_length: DEFAULT_KERNEL_LENGTH,
            line_square_clip_max: DEFAULT_LINE_SQUARE_CLIP_MAX,
            vector_component_minimum: DEFAULT_VECTOR_COMPONENT_MINIMUM,
            blur_radius: DEFAULT_BLUR_RADIUS,
            blur_sigma: DEFAULT_BLUR_SIGMA,
        }
    }
}

impl RenderParams {
    /// Defaults with the shorter kernel of the fast preset
    pub fn fast() -> Self {
        Self::default().with_kernel_length(FAST_KERNEL_LENGTH)
    }

    /// Set the flow pattern
    #[must_use]
    pub const fn with_pattern(mut self, pattern: FlowPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the square field size
    #[must_use]
    pub const fn with_field_size(mut self, size: usize) -> Self {
        self.field_size = size;
        self
    }

    /// Set the kernel table resolution
    #[must_use]
    pub const fn with_discrete_filter_size(mut self, size: usize) -> Self {
        self.discrete_filter_size = size;
        self
    }

    /// Set the kernel length
    #[must_use]
    pub const fn with_kernel_length(mut self, length: f32) -> Self {
        self.kernel_length = length;
        self
    }

    /// Set the segment clip bound
    #[must_use]
    pub const fn with_line_square_clip_max(mut self, clip: f32) -> Self {
        self.line_square_clip_max = clip;
        self
    }

    /// Set the minimum component magnitude
    #[must_use]
    pub const fn with_vector_component_minimum(mut self, minimum: f32) -> Self {
        self.vector_component_minimum = minimum;
        self
    }

    /// Set the smoothing radius and sigma
    #[must_use]
    pub const fn with_blur(mut self, radius: usize, sigma: f32) -> Self {
        self.blur_radius = radius;
        self.blur_sigma = sigma;
        self
    }

    /// Check every parameter once before rendering
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `field_size` is zero
    /// - `discrete_filter_size` is below 2
    /// - `kernel_length` or `line_square_clip_max` is not a positive finite number
    /// - `vector_component_minimum` is negative or not finite
    /// - `blur_sigma` is not a positive finite number while blurring is enabled
    pub fn validate(&self) -> Result<()> {
        if self.field_size == 0 {
            return Err(invalid_parameter(
                "field_size",
                &self.field_size,
                &"must be at least 1",
            ));
        }
        if self.discrete_filter_size < 2 {
            return Err(invalid_parameter(
                "discrete_filter_size",
                &self.discrete_filter_size,
                &"kernel table needs at least 2 entries",
            ));
        }
        if !self.kernel_length.is_finite() || self.kernel_length <= 0.0 {
            return Err(invalid_parameter(
                "kernel_length",
                &self.kernel_length,
                &"must be positive and finite",
            ));
        }
        if !self.line_square_clip_max.is_finite() || self.line_square_clip_max <= 0.0 {
            return Err(invalid_parameter(
                "line_square_clip_max",
                &self.line_square_clip_max,
                &"must be positive and finite",
            ));
        }
        if !self.vector_component_minimum.is_finite() || self.vector_component_minimum < 0.0 {
            return Err(invalid_parameter(
                "vector_component_minimum",
                &self.vector_component_minimum,
                &"must be non-negative and finite",
            ));
        }
        if self.blur_radius > 0 && (!self.blur_sigma.is_finite() || self.blur_sigma <= 0.0) {
            return Err(invalid_parameter(
                "blur_sigma",
                &self.blur_sigma,
                &"must be positive and finite",
            ));
        }
        Ok(())
    }

    /// Integration settings derived from these parameters
    pub const fn streamline_settings(&self) -> StreamlineSettings {
        StreamlineSettings {
            kernel_length: self.kernel_length,
            line_square_clip_max: self.line_square_clip_max,
            vector_component_minimum: self.vector_component_minimum,
        }
    }

    /// Box-filter kernel tables for both directions
    pub fn kernels(&self) -> DirectionalKernels {
        DirectionalKernels::box_filter(self.discrete_filter_size, self.kernel_length)
    }
}
