//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - progress lines and rounded tables
    #[default]
    Pretty,
    /// Table format - borderless, one row per entry
    Table,
    /// JSON format - structured for scripts, progress lines suppressed
    Json,
}

impl OutputFormat {
    /// Whether progress lines and bars should be shown
    pub fn is_human(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}
