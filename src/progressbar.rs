use indicatif::{MultiProgress, ProgressStyle};

pub fn new() -> MultiProgress {
    MultiProgress::new()
}

pub fn spinner() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
}
