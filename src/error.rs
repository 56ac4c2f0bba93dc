//! Error types for robot_footprint

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Drawing error: {0}")]
    Drawing(String),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
