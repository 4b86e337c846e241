//! Defaults and runtime constants

// Pattern metadata fallbacks when a description omits the keys
/// Default number of tiles forming one block
pub const DEFAULT_NUMBER_OF_TILES: usize = 16;
/// Default canvas width in tiles
pub const DEFAULT_TILES_PER_ROW: usize = 16;

// Tile sheet framing for the CLI; 32 bytes is one 8x8 tile at 4 bits per pixel
/// Default tile size in bytes when splitting a raw sheet
pub const DEFAULT_BYTES_PER_TILE: usize = 32;

// Output settings
/// Suffix added to reordered sheet filenames
pub const OUTPUT_SUFFIX: &str = "_reordered";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Edge length in pixels of one tile cell in preview images
pub const PREVIEW_CELL_SIZE: usize = 8;

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: usize = 40;
