//! Line integral convolution of synthetic flow fields
//!
//! A noise texture (or a decoded grayscale image) is smeared along the
//! streamlines of an analytic vector field, producing a static image whose
//! streaks trace the flow. Each pixel integrates its streamline forward and
//! backward, weighting texture samples with a cumulative box-filter table,
//! and the result is smoothed with a separable Gaussian.

#![forbid(unsafe_code)]

/// Streamline integration and the per-pixel convolution engine
pub mod convolution;
/// Analytic flow-field generation
pub mod field;
/// Post-processing filters
pub mod filter;
/// Input/output surfaces, configuration and error handling
pub mod io;
/// Render parameters and stage orchestration
pub mod pipeline;
/// Grayscale textures and noise synthesis
pub mod texture;

pub use io::error::{LicError, Result};
