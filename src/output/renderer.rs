//! Colorized report rendering

use std::io::Write;
use std::path::Path;

use owo_colors::{OwoColorize, Style};

use crate::domain::model::{Chapter, ProbeResult, Stream, StreamKind};
use crate::error::{MviewError, MviewResult};
use crate::output::Palette;
use crate::utils::{format_bitrate, format_framerate, format_size, format_time, trim_start_time};

/// Writes the report for probed files, one line at a time
pub struct Renderer<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer with the default colors
    pub fn new(out: W) -> Self {
        Self::with_palette(out, Palette::default())
    }

    pub fn with_palette(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the file name, without its directories, as a header
    pub fn header(&mut self, path: &Path) -> MviewResult<()> {
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        self.line(self.palette.header, &name)
    }

    /// Print the summary, chapter and stream lines of one probe result
    pub fn render(&mut self, result: &ProbeResult) -> MviewResult<()> {
        let summary = format!(
            "{} | {} | {}",
            format_time(result.format.duration()?)?,
            format_size(result.format.size()?)?,
            format_bitrate(result.format.bit_rate()?)?
        );
        self.line(self.palette.summary, &summary)?;

        if result.has_chapters() {
            self.line(self.palette.chapters, &chapters_line(&result.chapters))?;
        }

        for stream in &result.streams {
            match stream.kind() {
                StreamKind::Video => self.line(self.palette.video, &video_line(stream)?)?,
                StreamKind::Audio => self.line(self.palette.audio, &audio_line(stream))?,
                StreamKind::Subtitle => self.line(self.palette.subtitle, &subtitle_line(stream))?,
                StreamKind::Other(codec_type) => self.line(
                    self.palette.unknown,
                    &format!("{}) (unknown codec type {})", stream.index, codec_type),
                )?,
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn line(&mut self, style: Style, text: &str) -> MviewResult<()> {
        writeln!(self.out, "{}", text.style(style))?;
        Ok(())
    }
}

/// `title start - title start - ...`
fn chapters_line(chapters: &[Chapter]) -> String {
    chapters
        .iter()
        .map(|chapter| {
            let start = trim_start_time(&chapter.start_time);
            match chapter.tags.title.as_deref() {
                Some(title) => format!("{} {}", title, start),
                None => start.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" - ")
}

fn video_line(stream: &Stream) -> MviewResult<String> {
    let width = stream.width.ok_or_else(|| MviewError::missing("width"))?;
    let height = stream.height.ok_or_else(|| MviewError::missing("height"))?;
    let avg_frame_rate = stream
        .avg_frame_rate
        .as_deref()
        .ok_or_else(|| MviewError::missing("avg_frame_rate"))?;
    let pix_fmt = stream
        .pix_fmt
        .as_deref()
        .ok_or_else(|| MviewError::missing("pix_fmt"))?;

    let mut line = format!("{}) {} {}x{}", stream.index, stream.codec(), width, height);
    match format_framerate(avg_frame_rate)? {
        Some(rate) => {
            line.push('@');
            line.push_str(&rate);
        }
        None => line.push_str(" static"),
    }
    if stream.is_interlaced() {
        line.push_str(" interlaced");
    }
    line.push(' ');
    line.push_str(pix_fmt);
    if let Some(depth) = stream.bit_depth() {
        line.push_str(&format!(" {}bit", depth));
    }
    Ok(line)
}

fn audio_line(stream: &Stream) -> String {
    let mut line = format!("{}) {}", stream.index, stream.codec());
    if let Some(layout) = stream.channel_layout.as_deref() {
        line.push(' ');
        line.push_str(layout);
    }
    line.push_str(&tag_info(stream));
    line
}

fn subtitle_line(stream: &Stream) -> String {
    format!("{}) {}{}", stream.index, stream.codec(), tag_info(stream))
}

/// ` | language - title`, or empty when neither tag is set
fn tag_info(stream: &Stream) -> String {
    let infos: Vec<&str> = [stream.tags.language.as_deref(), stream.tags.title.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if infos.is_empty() {
        String::new()
    } else {
        format!(" | {}", infos.join(" - "))
    }
}
