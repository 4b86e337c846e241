//! Canvas layout transforms
//!
//! The engine stamps a pattern's slot matrix repeatedly across a fixed-width
//! canvas (forward) and inverts the arrangement with pure index arithmetic
//! (reverse). Tiles are opaque to the engine: any `Clone + Default` type
//! works, and contents are never inspected.

/// Forward and reverse transform implementations
pub mod engine;

pub use engine::{flatten, layout, unlayout};
