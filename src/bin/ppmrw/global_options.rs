use std::path::PathBuf;

use clap::ArgMatches;
use log::{Level, info};
use ppmrw::Limits;

use crate::CliError;
use crate::cmd_args::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub format: OutputFormat,
    pub input: PathBuf,
    pub output: PathBuf,
    pub limits: Limits,
    pub strict_mode: bool,
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, CliError> {
    let format = *options
        .get_one::<OutputFormat>("format")
        .ok_or(CliError::MissingArgument("format"))?;
    let input = options
        .get_one::<PathBuf>("input")
        .ok_or(CliError::MissingArgument("input"))?
        .clone();
    let output = options
        .get_one::<PathBuf>("output")
        .ok_or(CliError::MissingArgument("output"))?
        .clone();

    let mut limits = Limits::default();
    if let Some(&max_pixels) = options.get_one::<u64>("max-pixels") {
        info!("Limiting images to {max_pixels} pixels");
        limits = limits.with_max_pixels(max_pixels);
    }

    let strict_mode = options.get_flag("strict");
    if strict_mode {
        info!("Rejecting trailing bytes after binary payloads");
    }

    Ok(CmdOptions {
        format,
        input,
        output,
        limits,
        strict_mode,
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        // --warn is the default
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Warning: could not initialize logger: {e}");
        return;
    }

    info!("Log level :{}", log_level);
}
