//! Command-line interface for batch reordering of raw tile sheets

use clap::Parser;
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::io::catalog::PatternCatalog;
use crate::io::configuration::{DEFAULT_BYTES_PER_TILE, OUTPUT_SUFFIX, PREVIEW_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::preview::export_canvas_preview;
use crate::io::progress::ProgressManager;
use crate::io::tilesheet::{read_tiles, write_tiles};
use crate::layout::engine;

/// File extensions recognized as raw tile sheets
const SHEET_EXTENSIONS: [&str; 2] = ["bin", "chr"];

#[derive(Parser)]
#[command(name = "tilecanvas")]
#[command(
    author,
    version,
    about = "Rearrange raw tile sheets with named layout patterns"
)]
/// Command-line arguments for the tile sheet reordering tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input tile sheet (.bin or .chr) or directory of sheets
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory containing pattern description files
    #[arg(short = 'd', long = "patterns", value_name = "DIR")]
    pub patterns: PathBuf,

    /// Name of the pattern to apply
    #[arg(short = 'n', long = "name", value_name = "PATTERN")]
    pub pattern: String,

    /// Recover storage order from canvas order instead of arranging
    #[arg(short, long)]
    pub reverse: bool,

    /// Tile size in bytes when splitting the sheet
    #[arg(short = 'b', long, default_value_t = DEFAULT_BYTES_PER_TILE)]
    pub bytes_per_tile: usize,

    /// Write a PNG preview of the arranged canvas next to the output
    #[arg(short = 'v', long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch reordering of tile sheets with progress tracking
pub struct FileProcessor {
    cli: Cli,
    catalog: PatternCatalog,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            catalog: PatternCatalog::new(),
        }
    }

    /// Load the pattern catalog and process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fails to load, the named pattern is
    /// missing, or any sheet fails to read, transform or write
    pub fn process(&mut self) -> Result<()> {
        let loaded = self.catalog.load_directory(&self.cli.patterns)?;
        debug!("{loaded} patterns available");

        // Fail on unknown pattern names before touching any sheet
        self.catalog.lookup(&self.cli.pattern)?;

        if self.cli.preview && self.cli.reverse {
            warn!("preview shows the arranged canvas; ignored with --reverse");
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(files.len()));

        for file in &files {
            if let Some(ref pm) = progress {
                pm.start_file(file);
            }
            self.process_file(file)?;
            if let Some(ref pm) = progress {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_sheet_extension(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a .bin or .chr tile sheet",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if has_sheet_extension(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a tile sheet or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let tiles = read_tiles(input_path, self.cli.bytes_per_tile)?;
        let pattern = self.catalog.lookup(&self.cli.pattern)?;
        let output_path = get_output_path(input_path);

        if self.cli.reverse {
            let restored = engine::unlayout(&tiles, pattern)?;
            write_tiles(&output_path, &restored)?;
        } else {
            let canvas = engine::layout(&tiles, pattern)?;
            if self.cli.preview {
                export_canvas_preview(&canvas, &get_preview_path(input_path))?;
            }
            write_tiles(&output_path, &engine::flatten(&canvas))?;
        }

        debug!(
            "{} -> {} ({} tiles, pattern '{}')",
            input_path.display(),
            output_path.display(),
            tiles.len(),
            pattern.name()
        );
        Ok(())
    }
}

fn has_sheet_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SHEET_EXTENSIONS.contains(&ext))
}

fn get_output_path(input_path: &Path) -> PathBuf {
    suffixed_path(input_path, OUTPUT_SUFFIX, None)
}

fn get_preview_path(input_path: &Path) -> PathBuf {
    suffixed_path(input_path, PREVIEW_SUFFIX, Some("png"))
}

// Builds "<stem><suffix>.<ext>" next to the input
fn suffixed_path(input_path: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let stem = input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let ext = extension
        .map(String::from)
        .or_else(|| {
            input_path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
        })
        .unwrap_or_default();

    let mut file_name = format!("{stem}{suffix}");
    if !ext.is_empty() {
        file_name.push('.');
        file_name.push_str(&ext);
    }
    input_path.with_file_name(file_name)
}
