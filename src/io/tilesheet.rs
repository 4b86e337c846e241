//! Raw tile sheet reading and writing
//!
//! A tile sheet is a flat binary file of fixed-size tiles. The bytes of one
//! tile are opaque; only the framing (tile size in bytes) matters here.

use std::fs;
use std::path::Path;

use log::warn;

use crate::io::error::{Result, file_system_error, invalid_parameter};

/// One tile's raw bytes, never decoded by this crate
pub type RawTile = Vec<u8>;

/// Read a tile sheet, splitting it into tiles of `bytes_per_tile`
///
/// A trailing partial tile is dropped with a warning; the transforms only
/// ever consume whole tiles.
///
/// # Errors
///
/// - `InvalidParameter` if `bytes_per_tile` is zero
/// - `FileSystem` if the file cannot be read
pub fn read_tiles(path: &Path, bytes_per_tile: usize) -> Result<Vec<RawTile>> {
    if bytes_per_tile == 0 {
        return Err(invalid_parameter(
            "bytes_per_tile",
            &bytes_per_tile,
            &"a tile must contain at least one byte",
        ));
    }

    let bytes = fs::read(path).map_err(|err| file_system_error(path, "read tile sheet", err))?;

    let remainder = bytes.len() % bytes_per_tile;
    if remainder != 0 {
        warn!(
            "{}: dropping {remainder} trailing bytes (not a whole {bytes_per_tile}-byte tile)",
            path.display()
        );
    }

    Ok(bytes
        .chunks_exact(bytes_per_tile)
        .map(<[u8]>::to_vec)
        .collect())
}

/// Write a flat tile sequence back to a sheet file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn write_tiles(path: &Path, tiles: &[RawTile]) -> Result<()> {
    let mut bytes = Vec::with_capacity(tiles.iter().map(Vec::len).sum());
    for tile in tiles {
        bytes.extend_from_slice(tile);
    }
    fs::write(path, bytes).map_err(|err| file_system_error(path, "write tile sheet", err))
}
