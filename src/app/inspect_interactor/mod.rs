// Inspect interactor - Orchestrates the per-file probe and report

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::error::{MviewError, MviewResult};
use crate::output::Renderer;
use crate::ports::ProbePort;

/// Interactor for the media inspection use case
pub struct InspectInteractor {
    probe_port: Arc<dyn ProbePort>,
}

impl InspectInteractor {
    /// Create new inspect interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>) -> Self {
        Self { probe_port }
    }

    /// Report on every file in order
    ///
    /// Fails with [`MviewError::MissingMediaFiles`] before probing anything
    /// when `files` is empty. The first failing file stops the whole run.
    pub async fn execute<W: Write>(
        &self,
        files: &[PathBuf],
        renderer: &mut Renderer<W>,
    ) -> MviewResult<()> {
        if files.is_empty() {
            return Err(MviewError::MissingMediaFiles);
        }

        for file in files {
            info!("Inspecting {}", file.display());
            renderer.header(file)?;
            let result = self.probe_port.probe(file).await?;
            renderer.render(&result)?;
        }

        Ok(())
    }
}
