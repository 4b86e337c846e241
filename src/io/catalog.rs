//! Caller-owned pattern catalog
//!
//! Maps pattern names to parsed [`TilePattern`] values. The catalog is an
//! explicit object handed to whatever needs lookups; there is no process-wide
//! registry. Bulk loading reads every file in a directory once, after which
//! lookups are read-only borrows.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use ndarray::Array2;

use crate::io::error::{CanvasError, Result, file_system_error};
use crate::layout::engine;
use crate::pattern::definition::TilePattern;
use crate::pattern::parser;

/// Name-keyed collection of parsed patterns
#[derive(Debug, Default)]
pub struct PatternCatalog {
    patterns: HashMap<String, TilePattern>,
}

impl PatternCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pattern under its own name, returning any replaced entry
    pub fn insert(&mut self, pattern: TilePattern) -> Option<TilePattern> {
        self.patterns.insert(pattern.name().to_string(), pattern)
    }

    /// Load every pattern description file in a directory
    ///
    /// Files are parsed in directory order; a pattern whose description
    /// carries no name is keyed by its file stem. Returns the number of
    /// patterns loaded. Non-permutation matrices load fine but log a warning,
    /// since only permutations reverse losslessly.
    ///
    /// # Errors
    ///
    /// - `FileSystem` if the directory or a file cannot be read
    /// - `PatternFile` if any file fails to parse; the catalog keeps the
    ///   entries loaded before the failure
    pub fn load_directory(&mut self, directory: &Path) -> Result<usize> {
        let entries = fs::read_dir(directory)
            .map_err(|err| file_system_error(directory, "read pattern directory", err))?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry
                .map_err(|err| file_system_error(directory, "read pattern directory", err))?
                .path();
            if !path.is_file() {
                continue;
            }

            let text = fs::read_to_string(&path)
                .map_err(|err| file_system_error(&path, "read pattern file", err))?;
            let pattern = parser::parse(&text).map_err(|err| CanvasError::PatternFile {
                path: path.clone(),
                reason: err.to_string(),
            })?;

            let key = if pattern.name().is_empty() {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default()
            } else {
                pattern.name().to_string()
            };

            debug!(
                "loaded pattern '{}' ({}x{} matrix) from {}",
                key,
                pattern.matrix_height(),
                pattern.matrix_width(),
                path.display()
            );
            if !pattern.is_permutation() {
                warn!("pattern '{key}' is not a permutation; reverse transform will lose tiles");
            }

            self.patterns.insert(key, pattern);
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Look up a pattern by name
    pub fn get(&self, name: &str) -> Option<&TilePattern> {
        self.patterns.get(name)
    }

    /// Look up a pattern by name, failing when absent
    ///
    /// # Errors
    ///
    /// Returns `PatternNotFound` if no pattern carries the name
    pub fn lookup(&self, name: &str) -> Result<&TilePattern> {
        self.patterns
            .get(name)
            .ok_or_else(|| CanvasError::PatternNotFound {
                name: name.to_string(),
            })
    }

    /// Arrange tiles with the named pattern
    ///
    /// Thin wrapper over [`engine::layout`] plus a lookup.
    ///
    /// # Errors
    ///
    /// Returns `PatternNotFound` for unknown names and any layout error
    pub fn layout<T>(&self, name: &str, tiles: &[T]) -> Result<Array2<T>>
    where
        T: Clone + Default,
    {
        engine::layout(tiles, self.lookup(name)?)
    }

    /// Recover storage order with the named pattern
    ///
    /// # Errors
    ///
    /// Returns `PatternNotFound` for unknown names and any transform error
    pub fn unlayout<T>(&self, name: &str, tiles: &[T]) -> Result<Vec<T>>
    where
        T: Clone + Default,
    {
        engine::unlayout(tiles, self.lookup(name)?)
    }

    /// Iterate over the catalog's pattern names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Number of patterns in the catalog
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the catalog holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
