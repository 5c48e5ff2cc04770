//! Progress lines printed while commands run

use std::fmt::Display;

/// Switchable stdout writer for human-oriented progress lines.
///
/// Disabled consoles swallow everything, which keeps JSON output clean.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    enabled: bool,
}

impl Console {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[cfg(test)]
    pub fn hidden() -> Self {
        Self::new(false)
    }

    pub fn line(&self, message: impl Display) {
        if self.enabled {
            println!("{}", message);
        }
    }

    /// Print a blank line followed by `message`
    pub fn section(&self, message: impl Display) {
        if self.enabled {
            println!("\n{}", message);
        }
    }
}
