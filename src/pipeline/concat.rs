use std::fs;
use std::path::{Path, PathBuf};

use log::error;

use crate::command::CommandRunner;
use crate::error::{Result, WebmDrError};

/// Name of the concat demuxer manifest inside the working directory.
pub const MANIFEST_NAME: &str = "concat.txt";

/// Writes the concat manifest: one `file <clip>` line per clip, in order.
///
/// Only bare filenames go into the manifest; ffmpeg resolves them relative
/// to the manifest's own directory.
pub fn write_manifest(workdir: &Path, clips: &[PathBuf]) -> Result<PathBuf> {
    let manifest = workdir.join(MANIFEST_NAME);
    let mut contents = String::new();
    for clip in clips {
        let name = clip
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        contents.push_str(&format!("file {}\n", name));
    }
    fs::write(&manifest, contents)?;
    Ok(manifest)
}

/// Stream-copies all clips into the final output, overwriting it if present.
pub fn concat_clips<R: CommandRunner>(
    runner: &R,
    workdir: &Path,
    clips: &[PathBuf],
    output_path: &Path,
) -> Result<()> {
    let manifest = write_manifest(workdir, clips)?;
    let args = vec![
        "-hide_banner".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
        "-f".to_string(),
        "concat".to_string(),
        "-safe".to_string(),
        "0".to_string(),
        "-i".to_string(),
        manifest.to_string_lossy().into_owned(),
        "-c".to_string(),
        "copy".to_string(),
        "-y".to_string(),
        output_path.to_string_lossy().into_owned(),
    ];

    let output = runner.run("ffmpeg", &args)?;
    if !output.success() {
        error!("{}", output.log);
        return Err(WebmDrError::ExternalTool {
            tool: "ffmpeg (concat)".to_string(),
            code: output.code,
            log: output.log,
        });
    }

    Ok(())
}
