//! Pattern description parsing
//!
//! A pattern description is a key-value resource whose `[pattern]` section
//! carries identifying metadata and a compact matrix encoding: bracketed
//! groups of base-16 slot indices such as `[0,1,2,3][4,5,6,7]`, one group per
//! matrix row. The scan is a hand-written tokenizer over the string; tokens
//! containing non-hex characters are skipped rather than aborting the parse,
//! matching the catalogs this format was inherited from. Structural problems
//! (no rows at all, rows of different lengths) are hard errors.

use crate::io::configuration::{DEFAULT_NUMBER_OF_TILES, DEFAULT_TILES_PER_ROW};
use crate::io::error::{CanvasError, Result};
use crate::pattern::definition::TilePattern;
use crate::pattern::resource::Resource;

/// Section holding pattern keys in a description resource
const PATTERN_SECTION: &str = "pattern";

/// Parse a full pattern description resource into a validated pattern
///
/// Recognized keys under `[pattern]`: `name`, `description`,
/// `number_of_tile`, `tiles_per_row` and `pattern`. Missing metadata falls
/// back to defaults (empty strings, 16 tiles per block, 16 tiles per row);
/// the `pattern` key itself is required.
///
/// # Errors
///
/// - `MissingField` if the `pattern` key is absent
/// - `InvalidParameter` if an integer key fails to parse
/// - any matrix validation error from [`TilePattern::new`]
pub fn parse(text: &str) -> Result<TilePattern> {
    let resource = Resource::parse(text);

    let name = resource
        .get(PATTERN_SECTION, "name")
        .unwrap_or_default()
        .to_string();
    let description = resource
        .get(PATTERN_SECTION, "description")
        .unwrap_or_default()
        .to_string();
    let number_of_tiles = resource
        .get_integer(PATTERN_SECTION, "number_of_tile")?
        .unwrap_or(DEFAULT_NUMBER_OF_TILES);
    let tiles_per_row = resource
        .get_integer(PATTERN_SECTION, "tiles_per_row")?
        .unwrap_or(DEFAULT_TILES_PER_ROW);

    let pattern_string = resource
        .get(PATTERN_SECTION, "pattern")
        .ok_or(CanvasError::MissingField { field: "pattern" })?;

    let matrix = parse_matrix(pattern_string)?;
    TilePattern::new(name, description, matrix, number_of_tiles, tiles_per_row)
}

/// Parse a bracketed matrix string into rows of slot indices
///
/// Characters outside bracketed groups are ignored. Inside a group, tokens
/// are runs of characters separated by commas or whitespace and parse as
/// base-16 integers; a token with any non-hex character is dropped.
///
/// # Errors
///
/// Returns `EmptyPattern` if the string contains no bracketed groups
pub fn parse_matrix(pattern_string: &str) -> Result<Vec<Vec<usize>>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Option<Vec<usize>> = None;
    let mut token = String::new();
    let mut token_is_hex = true;

    for ch in pattern_string.chars() {
        let Some(row) = current.as_mut() else {
            if ch == '[' {
                current = Some(Vec::new());
            }
            continue;
        };

        match ch {
            ']' => {
                flush_token(&mut token, &mut token_is_hex, row);
                if let Some(finished) = current.take() {
                    rows.push(finished);
                }
            }
            ',' => flush_token(&mut token, &mut token_is_hex, row),
            c if c.is_whitespace() => flush_token(&mut token, &mut token_is_hex, row),
            c if c.is_ascii_hexdigit() => token.push(c),
            c => {
                // Poisons the whole token, including any hex digits after it
                token.push(c);
                token_is_hex = false;
            }
        }
    }

    if rows.is_empty() {
        return Err(CanvasError::EmptyPattern);
    }
    Ok(rows)
}

// Converts the accumulated token to a slot index, silently dropping tokens
// that were marked non-hex or overflow usize
fn flush_token(token: &mut String, token_is_hex: &mut bool, row: &mut Vec<usize>) {
    if !token.is_empty() && *token_is_hex {
        if let Ok(slot) = usize::from_str_radix(token, 16) {
            row.push(slot);
        }
    }
    token.clear();
    *token_is_hex = true;
}
