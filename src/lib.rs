//! Tile sheet rearrangement between storage order and canvas layout
//!
//! Graphic formats such as console ROM tile sheets store tile blocks in an
//! order that differs from the order needed for visual composition. This crate
//! parses named layout patterns (small permutation matrices plus layout
//! metadata), stamps them repeatedly across a fixed-width canvas, and inverts
//! the arrangement losslessly to recover storage order. Tiles are opaque
//! values; their pixel contents are never decoded.

#![forbid(unsafe_code)]

/// Pattern catalogs, presets, tile sheet I/O and error handling
pub mod io;
/// Forward and reverse canvas layout transforms
pub mod layout;
/// Rounding helpers shared by the layout engine
pub mod math;
/// Pattern definitions and the pattern description parser
pub mod pattern;

pub use io::error::{CanvasError, Result};
pub use pattern::TilePattern;
