use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, WebmDrError};

/// Frame resizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeMode {
    /// Every frame after the first gets an independently drawn random size.
    Random,
    /// Every frame after the first grows by a fixed step over the previous one.
    Growing,
}

impl ResizeMode {
    /// Maps the numeric CLI selector to a mode (1 = random, 2 = growing).
    pub fn from_selector(mode: u8) -> Result<Self> {
        match mode {
            1 => Ok(ResizeMode::Random),
            2 => Ok(ResizeMode::Growing),
            other => Err(WebmDrError::Config(format!(
                "Mode must be 1 or 2, got {}",
                other
            ))),
        }
    }
}

/// Configuration for a single run, built once at startup and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Resizing policy
    pub mode: ResizeMode,

    /// Input video path
    pub input: PathBuf,

    /// Output file path, must end in .webm
    pub output: PathBuf,

    /// Directory the per-run working directory is created under
    #[serde(default = "default_temp_root")]
    pub temp_root: PathBuf,
}

fn default_temp_root() -> PathBuf {
    std::env::temp_dir()
}

impl Config {
    pub fn new(mode: ResizeMode, input: PathBuf, output: PathBuf) -> Self {
        Self {
            mode,
            input,
            output,
            temp_root: default_temp_root(),
        }
    }

    /// Validate configuration parameters before any work begins
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(WebmDrError::Config(format!(
                "Input file not found: {:?}",
                self.input
            )));
        }

        let webm = self
            .output
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("webm"));
        if !webm {
            return Err(WebmDrError::Config(
                "Output file extension must be \".webm\"".to_string(),
            ));
        }

        Ok(())
    }
}
