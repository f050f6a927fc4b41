//! CLI interface and argument parsing
//!
//! This module turns command line arguments into an invocation, runs it,
//! and renders help text.

pub mod app;
pub mod args;

// Re-export main types
pub use app::*;
pub use args::*;
