//! Terminal report output module

use owo_colors::Style;

pub mod renderer;

pub use renderer::Renderer;

/// Named styles used by the report, one per kind of line
///
/// Every styled line ends with a reset sequence.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// File name header
    pub header: Style,
    /// Duration, size and bit rate line
    pub summary: Style,
    /// Chapter list
    pub chapters: Style,
    pub video: Style,
    pub audio: Style,
    pub subtitle: Style,
    /// Streams of a type the report does not know
    pub unknown: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            header: Style::new().bright_red().bold().underline(),
            summary: Style::new().bright_green(),
            chapters: Style::new().bright_blue(),
            video: Style::new().bright_cyan(),
            audio: Style::new().bright_magenta(),
            subtitle: Style::new().bright_yellow(),
            unknown: Style::new().on_red(),
        }
    }
}

impl Palette {
    /// Palette without any escape sequences
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            summary: Style::new(),
            chapters: Style::new(),
            video: Style::new(),
            audio: Style::new(),
            subtitle: Style::new(),
            unknown: Style::new(),
        }
    }
}
