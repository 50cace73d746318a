// Domain models - Probe result types deserialized from the prober's JSON

use serde::Deserialize;

use crate::error::{MviewError, MviewResult};

/// Everything the prober reports about one media file
///
/// Built fresh for every input file and dropped once it has been rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeResult {
    /// Container level information
    #[serde(default)]
    pub format: Format,
    /// Chapter markers, in timeline order
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    /// Elementary streams, in the prober's order
    #[serde(default)]
    pub streams: Vec<Stream>,
}

impl ProbeResult {
    /// Parse the prober's JSON document
    pub fn from_json(json: &str) -> MviewResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the file carries any chapter markers
    pub fn has_chapters(&self) -> bool {
        !self.chapters.is_empty()
    }
}

/// Container format section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Format {
    /// Duration in decimal seconds
    pub duration: Option<String>,
    /// Size in bytes
    pub size: Option<String>,
    /// Overall bit rate in bits per second
    pub bit_rate: Option<String>,
}

impl Format {
    pub fn duration(&self) -> MviewResult<&str> {
        require(&self.duration, "format.duration")
    }

    pub fn size(&self) -> MviewResult<&str> {
        require(&self.size, "format.size")
    }

    pub fn bit_rate(&self) -> MviewResult<&str> {
        require(&self.bit_rate, "format.bit_rate")
    }
}

/// A named timestamp marker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chapter {
    /// Start position in decimal seconds
    pub start_time: String,
    #[serde(default)]
    pub tags: Tags,
}

/// Free-form metadata tags the renderer cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tags {
    pub language: Option<String>,
    pub title: Option<String>,
}

/// One elementary stream
///
/// The prober emits a flat record for every stream type, so type-specific
/// fields are optional here and interpreted through [`Stream::kind`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stream {
    /// Stable stream index assigned by the prober
    pub index: u32,
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,

    // Video
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub avg_frame_rate: Option<String>,
    pub pix_fmt: Option<String>,
    pub field_order: Option<String>,
    pub bits_per_raw_sample: Option<String>,

    // Audio
    pub channel_layout: Option<String>,

    #[serde(default)]
    pub tags: Tags,
}

/// Stream category, derived from `codec_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind<'a> {
    Video,
    Audio,
    Subtitle,
    /// Any other (or missing) codec type, carrying the raw value
    Other(&'a str),
}

impl Stream {
    /// Classify the stream by its codec type
    pub fn kind(&self) -> StreamKind<'_> {
        match self.codec_type.as_deref() {
            Some("video") => StreamKind::Video,
            Some("audio") => StreamKind::Audio,
            Some("subtitle") => StreamKind::Subtitle,
            Some(other) => StreamKind::Other(other),
            None => StreamKind::Other(""),
        }
    }

    /// Codec name for display
    pub fn codec(&self) -> &str {
        self.codec_name.as_deref().unwrap_or("unknown")
    }

    /// True when a field order is reported and it is not progressive
    pub fn is_interlaced(&self) -> bool {
        self.field_order
            .as_deref()
            .map_or(false, |order| order != "progressive")
    }

    /// Raw sample bit depth, when the prober reports a non-empty one
    pub fn bit_depth(&self) -> Option<&str> {
        self.bits_per_raw_sample
            .as_deref()
            .filter(|depth| !depth.is_empty())
    }
}

fn require<'a>(value: &'a Option<String>, field: &str) -> MviewResult<&'a str> {
    value.as_deref().ok_or_else(|| MviewError::missing(field))
}
