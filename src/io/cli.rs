//! Command-line interface for rendering a single LIC image

use crate::field::patterns::FlowPattern;
use crate::io::configuration::{
    DEFAULT_BLUR_RADIUS, DEFAULT_BLUR_SIGMA, DEFAULT_DISCRETE_FILTER_SIZE, DEFAULT_FIELD_SIZE,
    DEFAULT_LINE_SQUARE_CLIP_MAX, DEFAULT_OUTPUT, DEFAULT_PATTERN, DEFAULT_SEED,
    DEFAULT_VECTOR_COMPONENT_MINIMUM, NOISE_OUTPUT_NAME,
};
use crate::io::error::Result;
use crate::io::image::{load_texture, save_texture};
use crate::io::progress::RenderProgress;
use crate::pipeline::params::RenderParams;
use crate::pipeline::renderer::{LicRenderer, TextureSource};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(name = "flowlic")]
#[command(
    author,
    version,
    about = "Render a line integral convolution image of a synthetic flow field"
)]
/// Command-line arguments for the renderer
// Output toggles are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Grayscale-convertible image to convolve instead of synthetic noise
    #[arg(short, long, value_name = "IMAGE")]
    pub input: Option<PathBuf>,

    /// Output image path; the extension selects the encoding
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Flow pattern to visualize
    #[arg(short, long, value_enum, default_value_t = DEFAULT_PATTERN)]
    pub pattern: FlowPattern,

    /// Side length of the square field when synthesizing noise
    #[arg(short = 'n', long, default_value_t = DEFAULT_FIELD_SIZE)]
    pub size: usize,

    /// Number of entries in the kernel lookup tables
    #[arg(long, default_value_t = DEFAULT_DISCRETE_FILTER_SIZE)]
    pub filter_size: usize,

    /// Streamline length integrated in each direction (default depends on --fast)
    #[arg(short, long)]
    pub kernel_length: Option<f32>,

    /// Use the shorter kernel of the fast preset
    #[arg(short, long)]
    pub fast: bool,

    /// Upper bound on a single integration segment
    #[arg(long, default_value_t = DEFAULT_LINE_SQUARE_CLIP_MAX)]
    pub clip_max: f32,

    /// Vector components at or below this magnitude never bound a segment
    #[arg(long, default_value_t = DEFAULT_VECTOR_COMPONENT_MINIMUM)]
    pub min_component: f32,

    /// Radius of the smoothing pass (0 disables smoothing)
    #[arg(long, default_value_t = DEFAULT_BLUR_RADIUS)]
    pub blur_radius: usize,

    /// Standard deviation of the smoothing pass
    #[arg(long, default_value_t = DEFAULT_BLUR_SIGMA)]
    pub blur_sigma: f32,

    /// Random seed for reproducible noise
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Do not write the synthesized noise next to the output
    #[arg(long)]
    pub no_noise_output: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,
}

impl Cli {
    /// Render parameters described by the arguments
    pub fn render_params(&self) -> RenderParams {
        let preset = if self.fast {
            RenderParams::fast()
        } else {
            RenderParams::default()
        };
        let kernel_length = self.kernel_length.unwrap_or(preset.kernel_length);

        preset
            .with_pattern(self.pattern)
            .with_field_size(self.size)
            .with_discrete_filter_size(self.filter_size)
            .with_kernel_length(kernel_length)
            .with_line_square_clip_max(self.clip_max)
            .with_vector_component_minimum(self.min_component)
            .with_blur(self.blur_radius, self.blur_sigma)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Path of the noise artifact, beside the main output
    pub fn noise_output_path(&self) -> PathBuf {
        noise_path_beside(&self.output)
    }
}

fn noise_path_beside(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) => parent.join(NOISE_OUTPUT_NAME),
        None => PathBuf::from(NOISE_OUTPUT_NAME),
    }
}

/// Runs one render described by the command line and writes its files
pub struct RenderJob {
    cli: Cli,
}

impl RenderJob {
    /// Create a job from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load input, render, and write the output files
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A render parameter is invalid
    /// - The input texture is missing or cannot be decoded
    /// - An output file cannot be written
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let renderer = LicRenderer::new(self.cli.render_params())?;

        let source = match &self.cli.input {
            Some(path) => TextureSource::Image(load_texture(path)?),
            None => TextureSource::Noise,
        };
        let rows = match &source {
            TextureSource::Image(texture) => texture.height(),
            TextureSource::Noise => renderer.params().field_size,
        };

        let progress = if self.cli.should_show_progress() {
            RenderProgress::new(rows, "convolving")
        } else {
            RenderProgress::hidden()
        };

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let output = renderer.render_with_progress(source, &mut rng, &|| progress.tick_row());
        progress.finish();

        if let Some(noise) = output.noise.as_ref().filter(|_| !self.cli.no_noise_output) {
            let noise_path = self.cli.noise_output_path();
            save_texture(noise, &noise_path)?;
            info!(path = %noise_path.display(), "wrote noise texture");
        }

        save_texture(&output.image, &self.cli.output)?;
        info!(
            path = %self.cli.output.display(),
            elapsed = ?start_time.elapsed(),
            "wrote rendered image"
        );

        Ok(())
    }
}
