//! Output formatting for results.
//!
//! This module handles writing results to any [`std::io::Write`]:
//! - `text` - line oriented text output
//! - `json` - JSON output for analyses

mod json;
mod text;

pub use json::write_analysis_json;
pub use text::{format_label, write_analysis, write_error, write_lines, write_membership};
