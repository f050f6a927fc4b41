use env_logger::Builder;
use log::LevelFilter;
use std::process;

fn main() {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    process::exit(pwgen::cli::run());
}
