//! # Colonia IO
//!
//! Thin I/O layer around the simulation core:
//! - transition tables from CSV
//! - growth field matrices from JSON
//! - population reports to JSON and JSON Lines

/// Error types and result aliases for I/O operations
pub mod error;
/// Growth field matrix loading
pub mod field;
/// Population report output
pub mod report;
/// Transition table loading
pub mod table;

pub use error::{IoError, Result};
pub use field::{load_field_json, parse_field_json};
pub use report::{append_report_jsonl, read_reports_jsonl, write_report_json};
pub use table::{load_table_csv, parse_table_csv};
