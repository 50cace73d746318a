// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::model::ProbeResult;
use crate::error::MviewResult;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe a media file for its format, streams and chapters
    async fn probe(&self, path: &Path) -> MviewResult<ProbeResult>;
}
