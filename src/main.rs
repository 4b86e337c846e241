//! CLI entry point for tile sheet reordering

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use tilecanvas::io::cli::{Cli, FileProcessor};

fn main() -> tilecanvas::Result<()> {
    let cli = Cli::parse();

    // The catalog and processor trace at debug level; quiet keeps errors only
    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Debug
    };
    // A logging failure should never block sheet processing
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
