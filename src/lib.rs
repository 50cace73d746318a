//! mview media inspector library
//!
//! Runs ffprobe against media files and renders its report as colored
//! terminal lines.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{Chapter, Format, ProbeResult, Stream, StreamKind, Tags};
pub use error::{MviewError, MviewResult};
