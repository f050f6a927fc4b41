//! Error types for pwgen

use std::io;
use thiserror::Error;

/// Result type alias for pwgen operations
pub type Result<T> = std::result::Result<T, PwgenError>;

/// Main error type for pwgen
#[derive(Error, Debug)]
pub enum PwgenError {
    /// The generation request cannot be satisfied
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),

    /// The command line could not be understood
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Writing to stdout or stderr failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Invalid generation settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("length must be >= 1")]
    InvalidLength,

    #[error("at least one character category must be enabled")]
    NoCategoryEnabled,
}

/// Command line parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Unrecognized long option: \"{0}\"")]
    UnrecognizedLongOption(String),

    #[error("Unrecognized short option: \"-{0}\"")]
    UnrecognizedShortOption(char),

    #[error("Unrecognized argument: \"{0}\"")]
    UnrecognizedArgument(String),

    #[error("Too many arguments specified.")]
    TooManyArguments,
}

/// Specialized result type for configuration validation
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for argument parsing
pub type ArgumentResult<T> = std::result::Result<T, ArgumentError>;
