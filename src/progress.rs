//! Progress reporting: an optional per-record count bar for the classification pass.

use indicatif::{ProgressBar, ProgressStyle};

const COUNT_TEMPLATE: &str = "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
     rows/s: {per_sec}  elapsed: {elapsed_precise}";

/// Count-style progress bar (rows processed out of total), with an optional label.
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template(COUNT_TEMPLATE) {
        pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
    }
    if !label.is_empty() {
        pb.set_message(label.to_string());
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Thin wrapper so callers can hold an optional bar without `if let` at every tick.
pub struct RowProgress {
    pb: Option<ProgressBar>,
}

impl RowProgress {
    pub fn new(enabled: bool, total: u64, label: Option<&str>) -> Self {
        let pb = enabled.then(|| make_count_progress(total, label.unwrap_or("Sorting posts")));
        Self { pb }
    }
    #[inline]
    pub fn tick(&self) {
        if let Some(pb) = &self.pb { pb.inc(1); }
    }
    pub fn finish(&self, msg: &str) {
        if let Some(pb) = &self.pb { pb.finish_with_message(msg.to_string()); }
    }
}
