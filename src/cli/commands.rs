//! Command implementations

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::adapters::{FFprobeAdapter, ProbeConfig};
use crate::app::InspectInteractor;
use crate::cli::Cli;
use crate::output::Renderer;

/// Inspect every file named on the command line
pub async fn inspect(cli: Cli) -> Result<()> {
    let config = ProbeConfig::default();
    info!(
        program = %config.program,
        timeout_secs = config.timeout.as_secs(),
        "Inspecting {} file(s)",
        cli.files.len()
    );

    let interactor = InspectInteractor::new(Arc::new(FFprobeAdapter::new(config)));
    let mut renderer = Renderer::new(io::stdout());
    interactor.execute(&cli.files, &mut renderer).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    fn parse(args: &[&str]) -> Vec<String> {
        Cli::try_parse_from(args)
            .unwrap()
            .files
            .iter()
            .map(|f| f.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_files_in_order() {
        let cli = Cli::try_parse_from(["mview", "b.mkv", "a.mp4"]).unwrap();
        let files: Vec<_> = cli.files.iter().map(|f| f.to_string_lossy().into_owned()).collect();
        assert_eq!(files, vec!["b.mkv", "a.mp4"]);
    }

    #[test]
    fn test_parse_hyphenated_file_names() {
        assert_eq!(parse(&["mview", "-clip.mkv"]), vec!["-clip.mkv"]);
        assert_eq!(parse(&["mview", "a.mkv", "--b.mkv"]), vec!["a.mkv", "--b.mkv"]);
    }

    #[test]
    fn test_flag_lookalikes_are_files() {
        assert_eq!(parse(&["mview", "-V"]), vec!["-V"]);
        assert_eq!(
            parse(&["mview", "--help", "-h", "--version"]),
            vec!["--help", "-h", "--version"]
        );
    }

    #[test]
    fn test_parse_without_files() {
        let cli = Cli::try_parse_from(["mview"]).unwrap();
        assert!(cli.files.is_empty());
    }

    #[tokio::test]
    async fn test_inspect_without_files_fails() {
        let err = inspect(Cli { files: Vec::new() }).await.unwrap_err();
        assert_eq!(err.to_string(), "missing media files");
    }
}
