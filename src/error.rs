//! Error types.

use thiserror::Error;

/// Errors returned while loading input configuration.
///
/// Rejected keystrokes are not errors of this kind: they are reported through
/// [`crate::diagnostics::Reporter`] and dropped.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML for [`crate::Props`].
    #[error("Invalid input configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, Error>;
