//! pwgen - random password generator
//!
//! Generates passwords of a requested length from selectable character
//! classes (uppercase, lowercase, digits, special characters and spaces),
//! drawing every character from a cryptographically secure source.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;

// Re-export commonly used types
pub use config::{CategorySet, CharacterCategory, GenerationConfig};
pub use error::{ArgumentError, ConfigError, PwgenError, Result};
pub use generator::{generate, generate_with_rng};

/// Current version of pwgen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
