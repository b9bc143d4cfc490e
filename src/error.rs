use thiserror::Error;

/// Custom error types for webm-dr
#[derive(Error, Debug)]
pub enum WebmDrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No frame rate found in ffmpeg output")]
    FrameRateNotFound,

    #[error("Required tool not found: {0}")]
    DependencyNotFound(String),

    #[error("{tool} exited with code {code}")]
    ExternalTool {
        tool: String,
        code: i32,
        log: String,
    },
}

pub type Result<T> = std::result::Result<T, WebmDrError>;
