//! Line integral convolution
//!
//! The engine traces a streamline forward and backward from every pixel
//! center and averages the input texture along it, weighted by a kernel
//! lookup table.

/// Whole-raster convolution
pub mod engine;
/// Cumulative kernel lookup tables
pub mod kernel;
/// Single-direction streamline integration
pub mod streamline;

pub use engine::ConvolutionEngine;
pub use kernel::{DirectionalKernels, KernelTable};
pub use streamline::{Accumulator, Direction, StreamlineSettings};
