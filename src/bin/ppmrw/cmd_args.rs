use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{Arg, ArgAction, Command, ValueEnum, value_parser};
use ppmrw::PpmEncoding;

/// Output selector: the digit after the `P` of the written tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    P3,
    P6,
}

impl OutputFormat {
    pub(crate) fn encoding(self) -> PpmEncoding {
        match self {
            Self::P3 => PpmEncoding::Text,
            Self::P6 => PpmEncoding::Binary,
        }
    }
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::P3, Self::P6]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::P3 => PossibleValue::new("3").help("P3, decimal text samples"),
            Self::P6 => PossibleValue::new("6").help("P6, raw byte samples"),
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppmrw")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert PPM images between the P3 (text) and P6 (binary) encodings")
        .arg(Arg::new("format")
            .help("Output encoding")
            .required(true)
            .value_parser(value_parser!(OutputFormat)))
        .arg(Arg::new("input")
            .help("Input file to read data from")
            .required(true)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("output")
            .help("Output file to write the converted image to")
            .required(true)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("max-pixels")
            .long("max-pixels")
            .help("Refuse images with more than this many pixels")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Also reject bytes after a P6 payload"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display image header details"))
}
