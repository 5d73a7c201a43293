//! Growth field loading from JSON.
//!
//! The file holds a JSON array of rows, each an array of numbers. Rows are
//! indexed by `y`, columns by `x`.

use crate::error::{IoError, Result};
use colonia_core::GrowthField;
use std::fs;
use std::path::Path;

/// Parses a JSON matrix into a validated field covering `side_length`.
pub fn parse_field_json(content: &str, side_length: f64) -> Result<GrowthField> {
    if content.trim().is_empty() {
        return Err(IoError::validation("growth field JSON is empty"));
    }
    let matrix: Vec<Vec<f64>> = serde_json::from_str(content)?;
    Ok(GrowthField::with_side_length(matrix, side_length)?)
}

pub fn load_field_json<P: AsRef<Path>>(path: P, side_length: f64) -> Result<GrowthField> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("reading {}", path.display())))?;
    let field = parse_field_json(&content, side_length)
        .map_err(|e| e.with_context(format!("parsing {}", path.display())))?;
    tracing::info!(path = %path.display(), size = field.size(), "Loaded growth field");
    Ok(field)
}
