//! Main CLI application

use crate::cli::{parse_args, Invocation, SPACE_FLAGS};
use crate::config::{CharacterCategory, DEFAULT_LENGTH};
use crate::error::PwgenError;
use crate::generator::generate;
use crate::VERSION;
use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use log::debug;
use std::env;
use std::io::{self, IsTerminal, Write};

/// Build the clap command describing the command line surface
///
/// Parsing is done by [`parse_args`]; the command is used to render help.
pub fn build_command() -> Command {
    let mut cmd = Command::new("pwgen")
        .version(VERSION)
        .override_usage("pwgen [OPTIONS] [LENGTH]")
        .about(format!(
            "Generates a random password of the desired length, consisting of lower and \
             uppercase letters, digits, spaces and/or other symbols.\n\n\
             If LENGTH is not specified, it defaults to {}. If specified, it must be a \
             positive integer.\n\n\
             All supported characters are enabled by default. At least one non-space \
             character type must stay enabled.",
            DEFAULT_LENGTH
        ))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("length")
                .value_name("LENGTH")
                .help("Number of characters to generate"),
        );

    for category in CharacterCategory::ALL {
        let (enable, disable) = category.flags();
        cmd = cmd
            .arg(
                Arg::new(format!("enable-{}", enable))
                    .short(enable)
                    .help(format!("Enable {} (default)", category.name()))
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(format!("disable-{}", enable))
                    .short(disable)
                    .help(format!("Disable {}", category.name()))
                    .action(ArgAction::SetTrue),
            );
    }

    cmd.arg(
        Arg::new("enable-spaces")
            .short(SPACE_FLAGS.0)
            .help("Enable spaces (default). Spaces never start or end the password")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("disable-spaces")
            .short(SPACE_FLAGS.1)
            .help("Disable spaces")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("version")
            .long("version")
            .help("Print pwgen version and exit immediately")
            .action(ArgAction::Version),
    )
    .arg(
        Arg::new("help")
            .short('h')
            .long("help")
            .help("Print this help text and exit immediately")
            .action(ArgAction::Help),
    )
}

/// Render the help text
pub fn help_text() -> String {
    build_command().render_help().to_string()
}

/// Execute one invocation, writing its result to `out`
///
/// Nothing is written unless the invocation succeeds.
pub fn execute<S, W>(args: &[S], out: &mut W) -> Result<(), PwgenError>
where
    S: AsRef<str>,
    W: Write,
{
    let invocation = parse_args(args)?;
    debug!("Parsed invocation: {:?}", invocation);

    match invocation {
        Invocation::Help => write!(out, "{}", help_text())?,
        Invocation::Version => writeln!(out, "{}", VERSION)?,
        Invocation::Generate(config) => {
            let password = generate(&config)?;
            writeln!(out, "{}", password)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Print an error, followed by usage when a user is watching
fn report_error(err: &PwgenError) {
    colored::control::set_override(io::stderr().is_terminal());
    eprintln!("{}", err.to_string().red());

    if io::stdout().is_terminal() {
        eprintln!();
        eprint!("{}", help_text());
    }
}

/// Run the CLI application with the process arguments
///
/// Returns the process exit code.
pub fn run() -> i32 {
    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let stdout = io::stdout();
    match execute(&args[..], &mut stdout.lock()) {
        Ok(()) => 0,
        Err(e) => {
            report_error(&e);
            1
        }
    }
}
