//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod app;
mod common;
mod summary;

pub use app::AppDisplay;
pub use common::format_bytes;
pub use summary::ItemDisplay;
