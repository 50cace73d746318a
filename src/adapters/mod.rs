// Adapters - External system implementations

pub mod probe_ffprobe;

// Re-export adapters
pub use probe_ffprobe::{FFprobeAdapter, ProbeConfig};
