//! Post-processing filters applied to the convolution output

/// Separable Gaussian blur
pub mod gaussian;

pub use gaussian::gaussian_blur;
