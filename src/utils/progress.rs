//! Progress bars for batch operations

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar over a batch of files or URLs
///
/// The batch name is shown as a prefix and the current item as the message.
/// Empty batches draw nothing.
pub struct ProgressTracker {
    bar: ProgressBar,
    label: String,
}

impl ProgressTracker {
    /// Create a tracker for `total` items
    ///
    /// # Arguments
    /// * `total` - Number of items in the batch
    /// * `label` - Batch name shown before the bar
    pub fn new(total: u64, label: &str) -> Self {
        let bar = ProgressBar::new(total);
        if total == 0 {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }

        let style = ProgressStyle::default_bar()
            .template("{prefix} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_prefix(label.to_string());

        ProgressTracker {
            bar,
            label: label.to_string(),
        }
    }

    /// Show the item being processed
    pub fn set_item(&self, item: &str) {
        self.bar.set_message(item.to_string());
    }

    /// Mark items as processed
    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Close the bar with a count of processed items
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{}: {} item(s) done", self.label, self.bar.position()));
    }
}
