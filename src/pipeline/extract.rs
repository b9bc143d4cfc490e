use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::CommandRunner;
use crate::error::{Result, WebmDrError};

static FPS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.\d+|\d+) fps").unwrap());

/// The frames pulled out of a source video, plus the rate ffmpeg reported.
#[derive(Debug)]
pub struct Extraction {
    /// Frame image paths in numeric sequence order
    pub frames: Vec<PathBuf>,

    /// Frame rate exactly as printed by ffmpeg, e.g. "29.97" or "30"
    pub frame_rate: String,
}

/// Decodes the source into numbered PNG frames inside `workdir`.
///
/// Frames are enumerated from the directory after the call rather than
/// tracked incrementally, then sorted by their embedded sequence number.
pub fn extract_frames<R: CommandRunner>(
    runner: &R,
    input: &Path,
    workdir: &Path,
) -> Result<Extraction> {
    let pattern = workdir.join("out%04d.png");
    let args = vec![
        "-hide_banner".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        pattern.to_string_lossy().into_owned(),
    ];

    let output = runner.run("ffmpeg", &args)?;
    if !output.success() {
        error!("{}", output.log);
        return Err(WebmDrError::ExternalTool {
            tool: "ffmpeg (frame extraction)".to_string(),
            code: output.code,
            log: output.log,
        });
    }

    let frame_rate = extract_frame_rate(&output.log)?;
    let frames = list_frames(workdir)?;
    debug!("Extracted {} frames at {} fps", frames.len(), frame_rate);

    Ok(Extraction { frames, frame_rate })
}

/// Pulls the source frame rate out of ffmpeg's stream description lines.
///
/// Only lines starting with "stream" (case-insensitive, leading whitespace
/// ignored) are considered; the first "<number> fps" match wins. The numeric
/// text is returned verbatim so ffmpeg's own formatting can be fed back to
/// it unchanged.
pub fn extract_frame_rate(out: &str) -> Result<String> {
    for line in out.lines() {
        let line = line.trim_start().to_lowercase();
        if !line.starts_with("stream") {
            continue;
        }
        if let Some(caps) = FPS_RE.captures(&line) {
            return Ok(caps[1].to_string());
        }
    }
    Err(WebmDrError::FrameRateNotFound)
}

/// Enumerates extracted frames in `workdir`, ordered by sequence number.
pub fn list_frames(workdir: &Path) -> Result<Vec<PathBuf>> {
    let mut frames: Vec<PathBuf> = fs::read_dir(workdir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    frames.sort_by_key(|path| frame_number(path));
    Ok(frames)
}

/// Numeric sequence embedded in a frame filename ("out0012.png" -> 12).
fn frame_number(path: &Path) -> u32 {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.chars().filter(|c| c.is_ascii_digit()).collect::<String>())
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}
