//! Live progress display for the breadth-first search

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EXPANSION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] States: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single bar tracking search expansions against the expansion budget
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Create a bar sized to the expansion budget
    pub fn new(budget: usize) -> Self {
        let bar = ProgressBar::new(budget as u64);
        bar.set_style(EXPANSION_STYLE.clone());
        Self { bar }
    }

    /// Report the current expansion count
    pub fn update(&self, expansions: usize) {
        self.bar.set_position(expansions as u64);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
