//! Password generation engine
//!
//! This module builds character pools from a config and draws passwords
//! from them.

pub mod alphabet;
pub mod password;

// Re-export main types
pub use alphabet::*;
pub use password::*;
