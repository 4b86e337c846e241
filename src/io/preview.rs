//! Canvas preview export
//!
//! Renders an arranged canvas as a PNG where every tile becomes one solid
//! cell whose shade is a checksum of the tile's bytes. The point is to make
//! the *rearrangement* visible (identical tiles get identical cells) without
//! decoding any pixel format, so the engine's opaque-tile contract holds.
//! Cells no block covered stay transparent.

use std::path::Path;

use image::{ImageBuffer, Rgba};
use ndarray::Array2;

use crate::io::configuration::PREVIEW_CELL_SIZE;
use crate::io::error::{CanvasError, Result};
use crate::io::tilesheet::RawTile;

// Folds tile bytes into a shade; kept away from full black so filled tiles
// stand out against the transparent background
fn tile_shade(tile: &RawTile) -> u8 {
    let hash = tile
        .iter()
        .fold(0u8, |acc, &byte| acc.wrapping_mul(31).wrapping_add(byte));
    64 + hash % 192
}

/// Export an arranged canvas as a PNG preview
///
/// # Errors
///
/// Returns `ImageExport` if the image cannot be saved
pub fn export_canvas_preview(canvas: &Array2<RawTile>, output_path: &Path) -> Result<()> {
    let (rows, cols) = canvas.dim();
    let cell = PREVIEW_CELL_SIZE as u32;
    let mut img = ImageBuffer::new(cols as u32 * cell, rows as u32 * cell);

    for ((row, col), tile) in canvas.indexed_iter() {
        let pixel = if tile.is_empty() {
            Rgba([0, 0, 0, 0])
        } else {
            let shade = tile_shade(tile);
            Rgba([shade, shade, shade, 255])
        };

        for dy in 0..cell {
            for dx in 0..cell {
                img.put_pixel(col as u32 * cell + dx, row as u32 * cell + dy, pixel);
            }
        }
    }

    img.save(output_path).map_err(|err| CanvasError::ImageExport {
        path: output_path.to_path_buf(),
        source: err,
    })
}
