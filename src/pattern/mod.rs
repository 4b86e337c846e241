//! Pattern definitions and parsing
//!
//! A pattern is a small rectangular matrix of tile-slot indices plus layout
//! metadata. Patterns are described in textual key-value resources and parsed
//! once into immutable [`TilePattern`] values.

/// The validated pattern value type
pub mod definition;
/// Pattern description parsing
pub mod parser;
/// Key-value resource framing shared with presets
pub mod resource;

pub use definition::TilePattern;
