//! Quadrant decoding from authored tile codes, text and JSON
//!
//! This is the only place integer tile codes are accepted. Everything past
//! [`decode_rows`] works with [`TileCategory`] values.

use std::path::Path;

use crate::io::configuration::{MAX_QUADRANT_DIMENSION, SAMPLE_QUADRANT};
use crate::io::error::{LevelError, Result, WithPath, invalid_parameter};
use crate::spatial::grid::{QuadrantGrid, TileGrid};
use crate::spatial::tiles::TileCategory;

/// Decode rows of raw integer codes into a quadrant grid
///
/// Shape is validated before categories so a ragged grid is reported as such
/// even when it also holds unknown codes.
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty or not rectangular
/// - Either dimension exceeds [`MAX_QUADRANT_DIMENSION`]
/// - Any value is not a known tile code (0-8)
pub fn decode_rows(rows: &[Vec<i64>]) -> Result<QuadrantGrid> {
    let codes = TileGrid::from_rows(rows)?;
    let (height, width) = codes.dimensions();
    check_dimension("height", height)?;
    check_dimension("width", width)?;

    let mut categories = Vec::with_capacity(height);
    for (row_index, row) in rows.iter().enumerate() {
        let mut decoded = Vec::with_capacity(width);
        for (col_index, &value) in row.iter().enumerate() {
            let category = u8::try_from(value)
                .ok()
                .and_then(TileCategory::from_code)
                .ok_or_else(|| LevelError::UnknownCategory {
                    value,
                    row: row_index,
                    col: col_index,
                })?;
            decoded.push(category);
        }
        categories.push(decoded);
    }

    QuadrantGrid::from_rows(&categories)
}

/// Decode a quadrant given as fixed-width rows of tile codes
///
/// # Errors
///
/// Returns an error if any code is unknown or the rows are empty
pub fn from_codes<const W: usize>(rows: &[[u8; W]]) -> Result<QuadrantGrid> {
    let rows: Vec<Vec<i64>> = rows
        .iter()
        .map(|row| row.iter().map(|&code| i64::from(code)).collect())
        .collect();
    decode_rows(&rows)
}

/// The built-in reference quadrant
///
/// # Errors
///
/// Never fails for the shipped constant; the signature mirrors the other loaders
pub fn sample_quadrant() -> Result<QuadrantGrid> {
    from_codes(&SAMPLE_QUADRANT)
}

/// Parse a text quadrant
///
/// One row per non-blank line. Tokens are separated by commas or whitespace;
/// `{`, `}`, `[` and `]` are ignored so literal array syntax pastes in
/// directly. Everything after `#` on a line is a comment.
///
/// # Errors
///
/// Returns an error if a token is not an integer or the decoded grid is invalid
pub fn parse_text(text: &str) -> Result<QuadrantGrid> {
    let mut rows = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or_default();
        let mut row = Vec::new();

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace() || matches!(c, '{' | '}' | '[' | ']'))
            .filter(|token| !token.is_empty())
        {
            let value = token.parse::<i64>().map_err(|_parse_error| LevelError::Parse {
                line: index + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }

        if !row.is_empty() {
            rows.push(row);
        }
    }

    decode_rows(&rows)
}

/// Parse a JSON quadrant: an array of arrays of integer codes
///
/// # Errors
///
/// Returns an error if the document is not an array of integer arrays or the
/// decoded grid is invalid
pub fn parse_json(text: &str) -> Result<QuadrantGrid> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(text)?;
    decode_rows(&rows)
}

/// Load a quadrant file, choosing JSON for `.json` and text otherwise
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are invalid
pub fn load_quadrant(path: &Path) -> Result<QuadrantGrid> {
    let text = std::fs::read_to_string(path).map_err(|e| LevelError::FileSystem {
        path: path.to_path_buf(),
        operation: "read quadrant",
        source: e,
    })?;

    if path.extension().and_then(|s| s.to_str()) == Some("json") {
        parse_json(&text).with_path(path)
    } else {
        parse_text(&text)
    }
}

fn check_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value > MAX_QUADRANT_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_QUADRANT_DIMENSION}"),
        ));
    }
    Ok(())
}
