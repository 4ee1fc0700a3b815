use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GliderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("No render surface attached to the frame driver")]
    MissingRenderSurface,

    #[error("Render surface error: {0}")]
    RenderSurface(String),
}

pub type Result<T> = std::result::Result<T, GliderError>;
