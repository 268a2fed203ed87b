//! Integration of one half of a streamline
//!
//! Each step advances exactly to the edge of the current grid cell (or to the
//! end of the kernel), samples the texture at the segment midpoint and weights
//! it by the growth of the cumulative kernel over that segment.

use crate::convolution::kernel::KernelTable;
use crate::field::patterns::VectorField;
use crate::field::vector::Vec2;
use crate::io::configuration::{SEGMENT_EPSILON, STEP_BOUND_FACTOR};
use crate::texture::grid::Texture;

/// Which way a streamline half follows the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Along the field vectors
    Forward,
    /// Against the field vectors
    Backward,
}

impl Direction {
    /// Both directions in evaluation order
    pub const BOTH: [Self; 2] = [Self::Forward, Self::Backward];

    /// Orient a field vector for this direction
    pub const fn orient(self, vector: Vec2) -> Vec2 {
        match self {
            Self::Forward => vector,
            Self::Backward => vector.reversed(),
        }
    }
}

/// Weighted texture sum collected along one streamline half
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    /// Sum of `sample * weight`
    pub texture: f32,
    /// Cumulative kernel weight reached so far
    pub weight: f32,
    /// Number of segments taken
    pub steps: usize,
}

/// Fixed integration settings shared by every pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamlineSettings {
    /// Arc-length integrated in each direction
    pub kernel_length: f32,
    /// Upper bound on a single segment
    pub line_square_clip_max: f32,
    /// Components at or below this magnitude never bound a segment
    pub vector_component_minimum: f32,
}

impl StreamlineSettings {
    /// Hard cap on segments per direction
    pub fn max_steps(&self) -> usize {
        (self.kernel_length * STEP_BOUND_FACTOR) as usize
    }

    /// Arc-length to the nearest cell edge ahead of `(x, y)` along `v`
    ///
    /// The right and bottom edges are tested against `floor(c + 1.5)`. That
    /// half-cell overshoot shapes the rendered streaks and must stay as is.
    pub fn segment_length(&self, x: f32, y: f32, v: Vec2) -> f32 {
        let minimum = self.vector_component_minimum;
        let mut segment = self.line_square_clip_max;

        if v.x < -minimum {
            segment = segment.min((x.floor() - x) / v.x);
        }
        if v.x > minimum {
            segment = segment.min(((x + 1.5).floor() - x) / v.x);
        }
        if v.y < -minimum {
            segment = segment.min((y.floor() - y) / v.y);
        }
        if v.y > minimum {
            segment = segment.min(((y + 1.5).floor() - y) / v.y);
        }

        segment
    }

    /// Integrate one streamline half starting at the center of pixel `(col, row)`
    ///
    /// Never fails: singular vectors, leaving the field and running out of
    /// steps all stop integration with whatever has been accumulated.
    pub fn integrate(
        &self,
        field: &VectorField,
        texture: &Texture,
        kernel: &KernelTable,
        col: usize,
        row: usize,
        direction: Direction,
    ) -> Accumulator {
        let mut acc = Accumulator::default();
        let max_steps = self.max_steps();
        let width = field.width() as f32;
        let height = field.height() as f32;

        let mut x = col as f32 + 0.5;
        let mut y = row as f32 + 0.5;
        let mut current_length = 0.0_f32;

        while current_length < self.kernel_length && acc.steps < max_steps {
            // Position is inside the field here, so truncation is a floor
            let sampled = field.get(x as usize, y as usize).unwrap_or(Vec2::ZERO);

            if sampled.is_zero() {
                if acc.steps == 0 {
                    acc.texture = 0.0;
                    acc.weight = 1.0;
                }
                break;
            }

            let v = direction.orient(sampled);
            let mut segment = self.segment_length(x, y, v);

            let previous_length = current_length;
            current_length += segment;
            segment += SEGMENT_EPSILON;

            if current_length > self.kernel_length {
                segment = self.kernel_length - previous_length;
                current_length = self.kernel_length;
            }

            let next_x = v.x.mul_add(segment, x);
            let next_y = v.y.mul_add(segment, y);

            let sample = texture.sample_clamped((x + next_x) * 0.5, (y + next_y) * 0.5);

            let cumulative = kernel.cumulative(current_length);
            let sample_weight = cumulative - acc.weight;
            acc.weight = cumulative;
            acc.texture += f32::from(sample) * sample_weight;

            acc.steps += 1;
            x = next_x;
            y = next_y;

            if x < 0.0 || x >= width || y < 0.0 || y >= height {
                break;
            }
        }

        acc
    }
}
