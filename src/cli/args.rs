//! Command line argument parsing
//!
//! Arguments take the form `[OPTIONS] [LENGTH]`: at most one option cluster
//! followed by at most one length. Each character of a cluster such as
//! `-uLdS` turns a character class on (lowercase letter) or off (uppercase
//! letter). Later characters override earlier ones.

use crate::config::{CharacterCategory, GenerationConfig};
use crate::error::{ArgumentError, ArgumentResult};

/// Short flags that enable and disable spaces
pub const SPACE_FLAGS: (char, char) = ('s', 'S');

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage text
    Help,

    /// Print the version
    Version,

    /// Generate one password
    Generate(GenerationConfig),
}

/// Parse arguments (without the program name) into an invocation
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> ArgumentResult<Invocation> {
    let mut config = GenerationConfig::default();

    match args {
        [] => {}
        [arg] => {
            let arg = arg.as_ref();
            if is_help(arg) {
                return Ok(Invocation::Help);
            }
            if arg == "--version" {
                return Ok(Invocation::Version);
            }
            if !apply_options(arg, &mut config)? {
                config.length = parse_length(arg)
                    .ok_or_else(|| ArgumentError::UnrecognizedArgument(arg.to_string()))?;
            }
        }
        [options, length] => {
            let (options, length) = (options.as_ref(), length.as_ref());
            if is_help(options) {
                return Ok(Invocation::Help);
            }
            if !apply_options(options, &mut config)? {
                return Err(ArgumentError::UnrecognizedArgument(options.to_string()));
            }
            config.length = parse_length(length)
                .ok_or_else(|| ArgumentError::UnrecognizedArgument(length.to_string()))?;
        }
        _ => return Err(ArgumentError::TooManyArguments),
    }

    Ok(Invocation::Generate(config))
}

fn is_help(arg: &str) -> bool {
    arg == "--help" || arg == "-h"
}

/// Apply an option cluster to the config
///
/// Returns `Ok(false)` when the argument is not an option at all.
fn apply_options(arg: &str, config: &mut GenerationConfig) -> ArgumentResult<bool> {
    if arg.starts_with("--") && arg.len() > 2 {
        return Err(ArgumentError::UnrecognizedLongOption(arg.to_string()));
    }

    let flags = match arg.strip_prefix('-') {
        Some(flags) if !flags.is_empty() => flags,
        _ => return Ok(false),
    };

    for flag in flags.chars() {
        apply_flag(flag, config)?;
    }

    Ok(true)
}

fn apply_flag(flag: char, config: &mut GenerationConfig) -> ArgumentResult<()> {
    if flag == SPACE_FLAGS.0 || flag == SPACE_FLAGS.1 {
        config.allow_spaces = flag == SPACE_FLAGS.0;
        return Ok(());
    }

    for category in CharacterCategory::ALL {
        let (enable, disable) = category.flags();
        if flag == enable || flag == disable {
            config.categories.set(category, flag == enable);
            return Ok(());
        }
    }

    Err(ArgumentError::UnrecognizedShortOption(flag))
}

/// Parse a length argument
///
/// Zero and negative values parse successfully and map to zero so that
/// generation rejects them as an invalid length.
fn parse_length(arg: &str) -> Option<usize> {
    let value: i64 = arg.trim().parse().ok()?;
    if value < 1 {
        return Some(0);
    }
    usize::try_from(value).ok()
}
