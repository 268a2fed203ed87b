//! Render orchestration: field, texture, kernels, convolution, smoothing

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::convolution::engine::ConvolutionEngine;
use crate::field::patterns::VectorField;
use crate::filter::gaussian::gaussian_blur;
use crate::io::error::Result;
use crate::pipeline::params::RenderParams;
use crate::texture::grid::Texture;
use crate::texture::noise::white_noise;

/// Where the convolved texture comes from
#[derive(Debug, Clone)]
pub enum TextureSource {
    /// Synthesize folded noise at the configured field size
    Noise,
    /// Use a decoded grayscale image; its dimensions set the field size
    Image(Texture),
}

/// Products of a single render
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Smoothed convolution result
    pub image: Texture,
    /// Noise that was convolved, when it was synthesized
    pub noise: Option<Texture>,
}

/// Runs the LIC stages in order for one set of parameters
#[derive(Debug, Clone)]
pub struct LicRenderer {
    params: RenderParams,
    engine: ConvolutionEngine,
}

impl LicRenderer {
    /// Validate parameters and build the kernel tables
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any parameter fails validation
    pub fn new(params: RenderParams) -> Result<Self> {
        params.validate()?;
        let engine = ConvolutionEngine::new(params.streamline_settings(), params.kernels());
        Ok(Self { params, engine })
    }

    /// Parameters this renderer was built with
    pub const fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Convolution engine used for the main stage
    pub const fn engine(&self) -> &ConvolutionEngine {
        &self.engine
    }

    /// Render one image
    pub fn render<R: Rng>(&self, source: TextureSource, rng: &mut R) -> RenderOutput {
        self.render_with_progress(source, rng, &|| {})
    }

    /// Render one image, calling `on_row` after every convolved row
    pub fn render_with_progress<R: Rng>(
        &self,
        source: TextureSource,
        rng: &mut R,
        on_row: &(dyn Fn() + Sync),
    ) -> RenderOutput {
        let (input, noise) = match source {
            TextureSource::Image(texture) => (texture, None),
            TextureSource::Noise => {
                let size = self.params.field_size;
                let noise = white_noise(size, size, rng);
                (noise.clone(), Some(noise))
            }
        };

        let (width, height) = (input.width(), input.height());
        info!(
            width,
            height,
            pattern = ?self.params.pattern,
            kernel_length = self.params.kernel_length,
            "rendering line integral convolution"
        );

        let field = VectorField::generate(width, height, self.params.pattern).into_normalized();

        let start = Instant::now();
        let mut image = self
            .engine
            .convolve_with_progress(&field, &input, on_row);
        debug!(elapsed = ?start.elapsed(), "convolution finished");

        let start = Instant::now();
        gaussian_blur(&mut image, self.params.blur_radius, self.params.blur_sigma);
        debug!(
            radius = self.params.blur_radius,
            sigma = self.params.blur_sigma,
            elapsed = ?start.elapsed(),
            "smoothing finished"
        );

        RenderOutput { image, noise }
    }
}
