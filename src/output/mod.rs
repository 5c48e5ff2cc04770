//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod console;
pub mod json;
pub mod progress;
pub mod table;

pub use console::Console;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        if !output.is_empty() {
            println!("{}", output);
        }
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Pretty => table::format_table(self),
            OutputFormat::Table => table::format_plain(self),
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}
