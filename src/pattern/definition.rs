//! Validated tile pattern values
//!
//! A [`TilePattern`] is immutable after construction; every invariant the
//! layout engine relies on is checked here so the transforms themselves never
//! have to re-validate matrix shape or slot ranges.

use bitvec::prelude::{BitVec, bitvec};

use crate::io::error::{CanvasError, Result, invalid_parameter};

/// Immutable layout pattern: slot matrix plus canvas metadata
///
/// The matrix is a rectangular H×W array of tile-slot indices describing how
/// the `number_of_tiles` tiles of one block map onto a rectangular canvas
/// region. The same matrix is stamped repeatedly across a canvas
/// `tiles_per_row` wide.
#[derive(Debug, Clone)]
pub struct TilePattern {
    name: String,
    description: String,
    matrix: Vec<Vec<usize>>,
    number_of_tiles: usize,
    tiles_per_row: usize,
}

impl TilePattern {
    /// Construct a pattern, validating all layout invariants
    ///
    /// # Errors
    ///
    /// - `EmptyPattern` if the matrix has no rows or an empty first row
    /// - `IrregularMatrix` if rows differ in length
    /// - `SlotOutOfRange` if an entry is not below `number_of_tiles`
    /// - `InvalidParameter` if `number_of_tiles` or `tiles_per_row` is zero,
    ///   or the matrix width does not divide `tiles_per_row` evenly
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        matrix: Vec<Vec<usize>>,
        number_of_tiles: usize,
        tiles_per_row: usize,
    ) -> Result<Self> {
        if number_of_tiles == 0 {
            return Err(invalid_parameter(
                "number_of_tiles",
                &number_of_tiles,
                &"a block must contain at least one tile",
            ));
        }
        if tiles_per_row == 0 {
            return Err(invalid_parameter(
                "tiles_per_row",
                &tiles_per_row,
                &"the canvas must be at least one tile wide",
            ));
        }

        let width = matrix.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(CanvasError::EmptyPattern);
        }
        for (row_index, row) in matrix.iter().enumerate() {
            if row.len() != width {
                return Err(CanvasError::IrregularMatrix {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }
            for &slot in row {
                if slot >= number_of_tiles {
                    return Err(CanvasError::SlotOutOfRange {
                        slot,
                        number_of_tiles,
                    });
                }
            }
        }

        // Block tiling assumes an exact fit across the canvas; the original
        // silently truncated blocks_per_row and scrambled the output instead
        if tiles_per_row % width != 0 {
            return Err(invalid_parameter(
                "tiles_per_row",
                &tiles_per_row,
                &format!("matrix width {width} must divide the canvas width evenly"),
            ));
        }

        Ok(Self {
            name: name.into(),
            description: description.into(),
            matrix,
            number_of_tiles,
            tiles_per_row,
        })
    }

    /// Pattern name used as the catalog key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description, unused by the transforms
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The slot matrix, guaranteed rectangular and non-empty
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Matrix height H
    pub fn matrix_height(&self) -> usize {
        self.matrix.len()
    }

    /// Matrix width W
    pub fn matrix_width(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }

    /// Number of tiles forming one block
    pub const fn number_of_tiles(&self) -> usize {
        self.number_of_tiles
    }

    /// Canvas width in tiles
    pub const fn tiles_per_row(&self) -> usize {
        self.tiles_per_row
    }

    /// How many pattern-width blocks fit across one canvas row
    ///
    /// Always at least 1: construction guarantees the matrix width divides
    /// the canvas width evenly.
    pub fn blocks_per_row(&self) -> usize {
        self.tiles_per_row / self.matrix_width()
    }

    /// Whether the matrix uses every slot of one block exactly once
    ///
    /// Only permutation matrices are losslessly reversible; catalog loading
    /// warns about patterns where this does not hold.
    pub fn is_permutation(&self) -> bool {
        if self.matrix_height() * self.matrix_width() != self.number_of_tiles {
            return false;
        }

        let mut seen: BitVec = bitvec![0; self.number_of_tiles];
        for row in &self.matrix {
            for &slot in row {
                if seen.get(slot).is_some_and(|bit| *bit) {
                    return false;
                }
                seen.set(slot, true);
            }
        }
        true
    }
}
