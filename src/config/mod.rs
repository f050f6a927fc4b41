//! Generation settings
//!
//! This module defines character categories, the settings for a generation
//! request, and their validation.

pub mod schema;
pub mod types;

// Re-export main types
pub use schema::*;
pub use types::*;
