//! FFprobe adapter for media file probing
//!
//! Runs `ffprobe` as a child process, asks for format, stream and chapter
//! information as JSON, and parses the document into a [`ProbeResult`].

use std::ffi::OsString;
use std::path::Path;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::model::ProbeResult;
use crate::error::{MviewError, MviewResult};
use crate::ports::ProbePort;

/// Arguments passed ahead of the `--` separator and the input path
const PROBE_ARGS: &[&str] = &[
    "-v",
    "fatal",
    "-print_format",
    "json",
    "-show_entries",
    "format:stream:chapters",
];

/// Prober invocation settings
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Executable to run
    pub program: String,
    /// Arguments placed before the probe arguments
    ///
    /// Empty in normal use. The adapter tests set it to run a `sh -c`
    /// script in place of ffprobe; a wrapper command could use it too.
    pub program_args: Vec<String>,
    /// Upper bound on a single probe run
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            program: "ffprobe".to_string(),
            program_args: Vec::new(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    config: ProbeConfig,
}

impl Default for FFprobeAdapter {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Full argument list for probing `path`
    fn arguments(&self, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .config
            .program_args
            .iter()
            .map(OsString::from)
            .collect();
        args.extend(PROBE_ARGS.iter().map(OsString::from));
        args.push(OsString::from("--"));
        args.push(path.as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe(&self, path: &Path) -> MviewResult<ProbeResult> {
        let args = self.arguments(path);
        debug!(program = %self.config.program, ?args, "Running prober");

        let mut command = Command::new(&self.config.program);
        command.args(&args).kill_on_drop(true);

        let started = Instant::now();
        let output = match tokio::time::timeout(self.config.timeout, command.output()).await {
            Ok(result) => result.map_err(|source| MviewError::ProbeSpawn {
                program: self.config.program.clone(),
                source,
            })?,
            Err(_) => {
                return Err(MviewError::ProbeTimeout {
                    path: path.display().to_string(),
                    timeout: self.config.timeout,
                })
            }
        };
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, status = %output.status, "Prober finished");

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.is_empty() {
            return Err(MviewError::ProbeFailed {
                code: output.status.code(),
                stderr: stderr.into_owned(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    /// Adapter that runs `script` through `sh` instead of ffprobe
    ///
    /// The probe arguments become the script's positional parameters.
    fn shell(script: &str, timeout: Duration) -> FFprobeAdapter {
        FFprobeAdapter::new(ProbeConfig {
            program: "sh".to_string(),
            program_args: vec!["-c".to_string(), script.to_string(), "ffprobe".to_string()],
            timeout,
        })
    }

    #[test]
    fn test_default_config() {
        let adapter = FFprobeAdapter::default();
        assert_eq!(adapter.config().program, "ffprobe");
        assert_eq!(adapter.config().timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_arguments_end_with_separator_and_path() {
        let adapter = FFprobeAdapter::default();
        let args = adapter.arguments(Path::new("-weird name.mkv"));
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "-v",
                "fatal",
                "-print_format",
                "json",
                "-show_entries",
                "format:stream:chapters",
                "--",
                "-weird name.mkv",
            ]
        );
    }

    #[tokio::test]
    async fn test_probe_success() {
        let adapter = shell(
            r#"echo '{"format":{"duration":"1.5","size":"10","bit_rate":"80"},"streams":[],"chapters":[]}'"#,
            Duration::from_secs(5),
        );
        let result = adapter.probe(Path::new("clip.mp4")).await.unwrap();
        assert_eq!(result.format.duration().unwrap(), "1.5");
        assert!(result.streams.is_empty());
    }

    #[tokio::test]
    async fn test_probe_receives_path_last() {
        let adapter = shell(
            r#"for last; do :; done; printf '{"format":{"duration":"%s"}}' "$last""#,
            Duration::from_secs(5),
        );
        let result = adapter.probe(Path::new("42")).await.unwrap();
        assert_eq!(result.format.duration().unwrap(), "42");
    }

    #[tokio::test]
    async fn test_probe_nonzero_exit() {
        let adapter = shell("exit 3", Duration::from_secs(5));
        match adapter.probe(Path::new("clip.mp4")).await {
            Err(MviewError::ProbeFailed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert!(stderr.is_empty());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_probe_error_text_fails_even_on_success() {
        let adapter = shell("echo '{}'; echo 'Invalid data' >&2", Duration::from_secs(5));
        match adapter.probe(Path::new("clip.mp4")).await {
            Err(MviewError::ProbeFailed { code, stderr }) => {
                assert_eq!(code, Some(0));
                assert_eq!(stderr, "Invalid data\n");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_probe_timeout() {
        let adapter = shell("sleep 5", Duration::from_millis(100));
        assert!(matches!(
            adapter.probe(Path::new("clip.mp4")).await,
            Err(MviewError::ProbeTimeout { .. })
        ));
    }

    #[tokio::test]
    async fn test_probe_missing_program() {
        let adapter = FFprobeAdapter::new(ProbeConfig {
            program: "mview-no-such-prober".to_string(),
            ..ProbeConfig::default()
        });
        assert!(matches!(
            adapter.probe(Path::new("clip.mp4")).await,
            Err(MviewError::ProbeSpawn { .. })
        ));
    }

    #[tokio::test]
    async fn test_probe_invalid_json() {
        let adapter = shell("echo 'not json'", Duration::from_secs(5));
        assert!(matches!(
            adapter.probe(Path::new("clip.mp4")).await,
            Err(MviewError::InvalidProbeOutput(_))
        ));
    }
}
