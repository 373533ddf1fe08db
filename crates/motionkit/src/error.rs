//! Error types for motionkit

use thiserror::Error;

/// Errors that can occur while loading motion configuration
///
/// Component operations never fail; only configuration loading does.
#[derive(Error, Debug)]
pub enum MotionError {
    /// Failed to read a configuration file
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid TOML for the expected shape
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for motionkit operations
pub type Result<T> = std::result::Result<T, MotionError>;
