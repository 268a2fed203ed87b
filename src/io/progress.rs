//! Row progress display for the convolution stage

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows ({{eta}})");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting finished output rows
///
/// Safe to tick from worker threads.
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Visible progress bar over `rows` rows
    pub fn new(rows: usize, label: &str) -> Self {
        let bar = ProgressBar::new(rows as u64);
        bar.set_style(ROW_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Progress bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one finished row
    pub fn tick_row(&self) {
        self.bar.inc(1);
    }

    /// Rows recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once the stage is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
