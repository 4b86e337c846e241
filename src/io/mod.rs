//! Input/output operations: catalogs, presets, tile sheets and errors

/// Caller-owned pattern catalog with directory bulk loading
pub mod catalog;
/// Command-line interface and batch file processing
pub mod cli;
/// Defaults and constants
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// ROM extraction preset load/save
pub mod preset;
/// Canvas preview export
pub mod preview;
/// Batch progress display
pub mod progress;
/// Raw tile sheet reading and writing
pub mod tilesheet;

pub use catalog::PatternCatalog;
