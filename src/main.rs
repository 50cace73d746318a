//! mview
//!
//! Prints a human-readable, color-coded summary of the container and stream
//! metadata of one or more media files, as reported by ffprobe.
//!
//! # Usage
//!
//! ```bash
//! mview movie.mkv episode01.mp4
//! ```

use std::process;

use clap::Parser;

use mview::cli::{self, Cli};
use mview::utils::logging::LoggingSystem;

/// Main entry point for mview
#[tokio::main]
async fn main() {
    LoggingSystem::default().initialize();

    let args = Cli::parse();
    if let Err(err) = cli::commands::inspect(args).await {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
