//! Download progress bars

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec})";

const SPINNER_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {bytes} ({bytes_per_sec})";

const PB_CHARS: &str = "█▓▒░  ";

/// Build a byte-counting progress bar for a download.
///
/// Uses a bar when the content length is known and a spinner otherwise.
/// Disabled bars are hidden and cost nothing to update.
pub fn download_bar(len: Option<u64>, prefix: &str, enabled: bool) -> ProgressBar {
    let (pb, template) = match len {
        Some(len) => (ProgressBar::new(len), BAR_STYLE),
        None => (ProgressBar::new_spinner(), SPINNER_STYLE),
    };

    let pb = match ProgressStyle::with_template(template) {
        Ok(style) => pb.with_style(style.progress_chars(PB_CHARS)),
        Err(_) => pb,
    };

    if !enabled {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb.set_prefix(prefix.to_string());
    pb
}
