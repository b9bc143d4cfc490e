use std::path::{Path, PathBuf};

use log::error;

use crate::command::CommandRunner;
use crate::error::{Result, WebmDrError};
use crate::pipeline::{clip_path, resized_path};

/// Wraps each resized frame into a single-frame VP9 WebM at `frame_rate`.
///
/// The yuva420p pixel format keeps the alpha channel. A nonzero ffmpeg exit
/// is fatal: the diagnostics are logged and the error carries ffmpeg's own
/// exit code for verbatim propagation.
pub fn encode_clips<R: CommandRunner>(
    runner: &R,
    frames: &[PathBuf],
    frame_rate: &str,
) -> Result<Vec<PathBuf>> {
    let mut clips = Vec::with_capacity(frames.len());

    for frame in frames {
        let clip = clip_path(frame);
        let output = runner.run("ffmpeg", &clip_args(frame, frame_rate, &clip))?;
        if !output.success() {
            error!("{}", output.log);
            return Err(WebmDrError::ExternalTool {
                tool: "ffmpeg (frame encode)".to_string(),
                code: output.code,
                log: output.log,
            });
        }
        clips.push(clip);
    }

    Ok(clips)
}

fn clip_args(frame: &Path, frame_rate: &str, clip: &Path) -> Vec<String> {
    vec![
        "-hide_banner".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
        "-framerate".to_string(),
        frame_rate.to_string(),
        "-f".to_string(),
        "image2".to_string(),
        "-i".to_string(),
        resized_path(frame).to_string_lossy().into_owned(),
        "-c:v".to_string(),
        "libvpx-vp9".to_string(),
        "-pix_fmt".to_string(),
        "yuva420p".to_string(),
        clip.to_string_lossy().into_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_args_use_resized_input() {
        let frame = Path::new("/work/out0003.png");
        let args = clip_args(frame, "29.97", &clip_path(frame));

        assert!(args.contains(&"/work/out0003_r.png".to_string()));
        assert!(args.contains(&"/work/out0003.webm".to_string()));
        assert!(args.contains(&"29.97".to_string()));
        assert!(args.contains(&"libvpx-vp9".to_string()));
        assert!(args.contains(&"yuva420p".to_string()));
    }
}
