//! Forward and reverse tile layout transforms

use ndarray::Array2;

use crate::io::error::{CanvasError, Result};
use crate::math::rounding::round_half_up;
use crate::pattern::definition::TilePattern;

/// Arrange a flat tile sequence into a 2D canvas according to a pattern
///
/// The pattern's matrix is stamped once per full block of
/// `number_of_tiles` input tiles, left to right across the canvas and
/// wrapping down by the matrix height when a block row fills up. The canvas
/// is always `tiles_per_row` wide; cells no block covers keep `T::default()`,
/// as do canvas cells beyond the last partial block.
///
/// Canvas height is `round(blocks / blocks_per_row)` block rows (see
/// [`round_half_up`]), or a single block row when fewer blocks than fit in
/// one row are available.
///
/// # Errors
///
/// - `TileIndexOutOfRange` if a computed source index exceeds the input
/// - `CanvasOverflow` if the rounded height allocates fewer block rows than
///   placement needs
pub fn layout<T>(tiles: &[T], pattern: &TilePattern) -> Result<Array2<T>>
where
    T: Clone + Default,
{
    let height = pattern.matrix_height();
    let width = pattern.matrix_width();
    let number_of_tiles = pattern.number_of_tiles();
    let tiles_per_row = pattern.tiles_per_row();
    let blocks_per_row = pattern.blocks_per_row();

    let nb_blocks = tiles.len() / number_of_tiles;

    let block_rows = if blocks_per_row > nb_blocks {
        1
    } else {
        round_half_up(nb_blocks as f64 / blocks_per_row as f64)
    };
    let canvas_rows = block_rows * height;
    let mut canvas = Array2::<T>::default((canvas_rows, tiles_per_row));

    let mut offset_x = 0;
    let mut offset_y = 0;
    for block in 0..nb_blocks {
        for (r, matrix_row) in pattern.matrix().iter().enumerate() {
            for (c, &slot) in matrix_row.iter().enumerate() {
                let source = slot + number_of_tiles * block;
                let tile = tiles
                    .get(source)
                    .ok_or(CanvasError::TileIndexOutOfRange {
                        index: source,
                        available: tiles.len(),
                    })?;
                let cell = canvas.get_mut((offset_y + r, offset_x + c)).ok_or(
                    CanvasError::CanvasOverflow {
                        x: offset_x + c,
                        y: offset_y + r,
                        canvas: (canvas_rows, tiles_per_row),
                    },
                )?;
                *cell = tile.clone();
            }
        }

        if offset_x + width == tiles_per_row {
            offset_x = 0;
            offset_y += height;
        } else {
            offset_x += width;
        }
    }

    Ok(canvas)
}

/// Recover storage order from a flattened canvas arrangement
///
/// The input is assumed to be a canvas produced by [`layout`] flattened
/// row-major at width `tiles_per_row`. Each position maps back to its block
/// and slot with pure index arithmetic, so the result of
/// `unlayout(&flatten(&layout(tiles)?), pattern)` equals `tiles` whenever the
/// pattern is a permutation and the tile count is an exact multiple of both
/// `number_of_tiles` and `tiles_per_row`.
///
/// # Errors
///
/// Returns `TileIndexOutOfRange` if a computed destination index exceeds the
/// input length (input shorter than a whole number of canvas lines)
pub fn unlayout<T>(tiles: &[T], pattern: &TilePattern) -> Result<Vec<T>>
where
    T: Clone + Default,
{
    let height = pattern.matrix_height();
    let width = pattern.matrix_width();
    let number_of_tiles = pattern.number_of_tiles();
    let tiles_per_row = pattern.tiles_per_row();
    let blocks_per_row = pattern.blocks_per_row();
    let tiles_per_block_row = blocks_per_row * number_of_tiles;

    let mut restored = vec![T::default(); tiles.len()];

    for (i, tile) in tiles.iter().enumerate() {
        let line = i / tiles_per_row;
        let row_in_matrix = line % height;
        let col_in_matrix = i % width;
        // row_in_matrix < H and col_in_matrix < W hold by construction, so
        // the lookup cannot miss; the fallback only satisfies the checker
        let slot = pattern
            .matrix()
            .get(row_in_matrix)
            .and_then(|row| row.get(col_in_matrix))
            .copied()
            .unwrap_or_default();

        // Each canvas row of blocks consumes blocks_per_row whole blocks, so
        // the block-row index scales by blocks_per_row before the in-row
        // block index is added
        let line_block = i / tiles_per_block_row;
        let block_in_row = (i % tiles_per_block_row % tiles_per_row) / width;
        let destination =
            slot + (line_block * blocks_per_row + block_in_row) * number_of_tiles;

        let cell = restored
            .get_mut(destination)
            .ok_or(CanvasError::TileIndexOutOfRange {
                index: destination,
                available: tiles.len(),
            })?;
        *cell = tile.clone();
    }

    Ok(restored)
}

/// Flatten a canvas row-major into the sequence [`unlayout`] expects
pub fn flatten<T: Clone>(canvas: &Array2<T>) -> Vec<T> {
    canvas.iter().cloned().collect()
}
