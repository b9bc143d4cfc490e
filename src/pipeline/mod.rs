//! The four-stage conversion pipeline: extract frames, resize them, wrap
//! each one into a single-frame WebM, concatenate the clips.
//!
//! Stages run strictly in sequence; each stage's files in the working
//! directory are the next stage's input. The working directory is removed
//! when the pipeline is dropped, on success and failure alike.

pub mod concat;
pub mod encode;
pub mod extract;
pub mod resize;

use std::path::{Path, PathBuf};

use log::info;
use tempfile::{Builder as TempFileBuilder, TempDir};

use crate::command::CommandRunner;
use crate::config::Config;
use crate::error::Result;

/// Path of the resized copy written next to a frame:
/// `out0001.png` -> `out0001_r.png`.
pub fn resized_path(frame: &Path) -> PathBuf {
    let stem = frame
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = frame
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    frame.with_file_name(format!("{}_r.{}", stem, ext))
}

/// Path of the single-frame clip produced from a frame:
/// `out0001.png` -> `out0001.webm`.
pub fn clip_path(frame: &Path) -> PathBuf {
    frame.with_extension("webm")
}

/// One run of the conversion, owning the transient working directory.
pub struct Pipeline<R: CommandRunner> {
    config: Config,
    runner: R,
    workdir: TempDir,
}

impl<R: CommandRunner> Pipeline<R> {
    /// Creates the working directory under the configured temp root.
    pub fn new(config: Config, runner: R) -> Result<Self> {
        std::fs::create_dir_all(&config.temp_root)?;
        let workdir = TempFileBuilder::new()
            .prefix("webm_dr_")
            .tempdir_in(&config.temp_root)?;
        Ok(Self {
            config,
            runner,
            workdir,
        })
    }

    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// Runs all stages in order, blocking on each external invocation.
    pub fn run(&self) -> Result<()> {
        info!("Extracting frames...");
        let extraction =
            extract::extract_frames(&self.runner, &self.config.input, self.workdir.path())?;

        info!("Resizing frames...");
        resize::resize_frames(&extraction.frames, self.config.mode, &mut rand::thread_rng())?;

        info!("Frames -> WebMs...");
        let clips =
            encode::encode_clips(&self.runner, &extraction.frames, &extraction.frame_rate)?;

        info!("Concatting WebMs...");
        concat::concat_clips(&self.runner, self.workdir.path(), &clips, &self.config.output)?;

        Ok(())
    }
}
