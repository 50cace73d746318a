//! CLI module for mview
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;

/// mview media inspector
///
/// Prints a colorized summary of each media file's duration, size, bit rate,
/// chapters and streams, as reported by ffprobe.
///
/// Every argument is a file path, including ones that start with `-`, so
/// clap's `--help` and `--version` flags are turned off.
#[derive(Parser, Debug)]
#[command(name = "mview")]
#[command(about = "Print a colorized summary of media file metadata")]
#[command(version)]
#[command(long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Media files to inspect, in order
    #[arg(
        value_name = "FILE",
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub files: Vec<PathBuf>,
}
