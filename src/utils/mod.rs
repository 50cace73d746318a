//! Common utilities and helpers

pub mod framerate;
pub mod logging;
pub mod time;
pub mod units;

pub use framerate::format_framerate;
pub use time::{format_time, trim_start_time};
pub use units::{format_bitrate, format_size};
