//! Rendering constants and runtime configuration defaults

use crate::field::patterns::FlowPattern;

// Defaults for the render parameters
/// Flow pattern used when none is requested
pub const DEFAULT_PATTERN: FlowPattern = FlowPattern::Saddle;

/// Side length of the square synthetic field
pub const DEFAULT_FIELD_SIZE: usize = 400;

/// Number of entries in each kernel lookup table
pub const DEFAULT_DISCRETE_FILTER_SIZE: usize = 2048;

/// Streamline arc-length integrated in each direction
pub const DEFAULT_KERNEL_LENGTH: f32 = 10.0;

/// Kernel length of the fast preset
pub const FAST_KERNEL_LENGTH: f32 = 8.0;

/// Upper bound on a single integration segment
pub const DEFAULT_LINE_SQUARE_CLIP_MAX: f32 = 100_000.0;

/// Vector components at or below this magnitude never bound a segment
pub const DEFAULT_VECTOR_COMPONENT_MINIMUM: f32 = 0.05;

/// Radius of the smoothing kernel in pixels
pub const DEFAULT_BLUR_RADIUS: usize = 3;

/// Standard deviation of the smoothing kernel
pub const DEFAULT_BLUR_SIGMA: f32 = 1.0;

// Integration constants
/// Added to every segment so streamlines cannot stall on a cell boundary
pub const SEGMENT_EPSILON: f32 = 0.0004;

/// Steps per direction are capped at `kernel_length * STEP_BOUND_FACTOR`
pub const STEP_BOUND_FACTOR: f32 = 3.0;

// Default values for the command line
/// Fixed seed for reproducible noise
pub const DEFAULT_SEED: u64 = 42;

/// Output file written when no path is given
pub const DEFAULT_OUTPUT: &str = "lic.jpg";

/// File name of the synthesized noise artifact, placed beside the output
pub const NOISE_OUTPUT_NAME: &str = "noise.jpg";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
