//! Separable Gaussian smoothing
//!
//! The horizontal pass writes into a scratch raster and the vertical pass
//! reads that scratch raster back into the image, so the passes compose
//! rather than both reading the original.

use ndarray::{Array2, Axis};
use rayon::prelude::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::texture::grid::Texture;

// Absorbs rounding in the weight sums so a flat region keeps its exact value
const TRUNCATION_TOLERANCE: f32 = 1e-3;

/// Normalized 1D Gaussian weights for offsets `-radius..=radius`
pub fn gaussian_kernel(radius: usize, sigma: f32) -> Vec<f32> {
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
    let r = radius as i64;

    let mut kernel: Vec<f32> = (-r..=r)
        .map(|i| {
            let offset = i as f32;
            (-offset * offset * inv_two_sigma_sq).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    if sum > 0.0 {
        for weight in &mut kernel {
            *weight /= sum;
        }
    }

    kernel
}

/// Blur `texture` in place with a separable Gaussian
///
/// Samples beyond an edge replicate the edge pixel.
pub fn gaussian_blur(texture: &mut Texture, radius: usize, sigma: f32) {
    if radius == 0 || texture.pixels().is_empty() {
        return;
    }

    let kernel = gaussian_kernel(radius, sigma);
    let mut scratch = Array2::<u8>::zeros(texture.pixels().raw_dim());

    horizontal_pass(texture.pixels(), &mut scratch, &kernel);
    vertical_pass(&scratch, texture.pixels_mut(), &kernel);
}

fn horizontal_pass(source: &Array2<u8>, target: &mut Array2<u8>, kernel: &[f32]) {
    let radius = (kernel.len() / 2) as isize;
    let max_col = source.ncols() as isize - 1;

    target
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut line)| {
            for (col, pixel) in line.iter_mut().enumerate() {
                let taps = kernel.iter().enumerate().map(|(k, &weight)| {
                    let sx = (col as isize + k as isize - radius).clamp(0, max_col) as usize;
                    (source.get((row, sx)).copied().unwrap_or(0), weight)
                });
                *pixel = weighted_mean(taps);
            }
        });
}

fn vertical_pass(source: &Array2<u8>, target: &mut Array2<u8>, kernel: &[f32]) {
    let radius = (kernel.len() / 2) as isize;
    let max_row = source.nrows() as isize - 1;

    target
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut line)| {
            for (col, pixel) in line.iter_mut().enumerate() {
                let taps = kernel.iter().enumerate().map(|(k, &weight)| {
                    let sy = (row as isize + k as isize - radius).clamp(0, max_row) as usize;
                    (source.get((sy, col)).copied().unwrap_or(0), weight)
                });
                *pixel = weighted_mean(taps);
            }
        });
}

// Accumulates in f32 and truncates once per output pixel
fn weighted_mean(taps: impl Iterator<Item = (u8, f32)>) -> u8 {
    let mut sum = 0.0_f32;
    let mut weight_sum = 0.0_f32;
    for (sample, weight) in taps {
        sum += f32::from(sample) * weight;
        weight_sum += weight;
    }
    if weight_sum == 0.0 {
        return 0;
    }
    (sum / weight_sum + TRUNCATION_TOLERANCE).clamp(0.0, 255.0) as u8
}
