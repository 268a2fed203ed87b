//! Cumulative filter lookup tables
//!
//! A table stores the integral of a low-pass filter from arc-length 0 up to
//! each quantized arc-length in `[0, kernel_length]`. The weight of a
//! streamline segment is then the difference of two lookups.

/// Cumulative weight function of a convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct KernelTable {
    weights: Vec<f32>,
    length_to_index: f32,
}

impl KernelTable {
    /// Box filter table with `size` entries where entry `i` equals `i`
    ///
    /// A linear cumulative ramp gives every unit of arc-length the same weight.
    pub fn box_filter(size: usize, kernel_length: f32) -> Self {
        let weights = (0..size).map(|i| i as f32).collect();
        Self::from_weights(weights, kernel_length)
    }

    /// Table built from arbitrary cumulative weights
    ///
    /// Arc-length `kernel_length` maps to the last entry.
    pub fn from_weights(weights: Vec<f32>, kernel_length: f32) -> Self {
        let last_index = weights.len().saturating_sub(1) as f32;
        Self {
            weights,
            length_to_index: last_index / kernel_length,
        }
    }

    /// Quantized table index for an arc-length
    pub fn quantize(&self, length: f32) -> usize {
        let index = (length * self.length_to_index) as usize;
        index.min(self.weights.len().saturating_sub(1))
    }

    /// Cumulative weight from arc-length 0 to `length`
    pub fn cumulative(&self, length: f32) -> f32 {
        self.weights
            .get(self.quantize(length))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Raw cumulative weights
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

/// Independent tables for the forward and backward halves of a streamline
///
/// The box filter builds both from the same formula, but each direction owns
/// its storage so asymmetric kernels can be dropped in.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalKernels {
    /// Table consulted while integrating along the field
    pub forward: KernelTable,
    /// Table consulted while integrating against the field
    pub backward: KernelTable,
}

impl DirectionalKernels {
    /// Box filter in both directions
    pub fn box_filter(size: usize, kernel_length: f32) -> Self {
        Self {
            forward: KernelTable::box_filter(size, kernel_length),
            backward: KernelTable::box_filter(size, kernel_length),
        }
    }
}
