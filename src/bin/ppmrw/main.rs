//! `ppmrw <3|6> <input> <output>`: convert a PPM image to P3 or P6.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use log::{debug, info, warn};
use ppmrw::{DecodeRequest, EncodeRequest, ImageInfo, PpmError, Unstoppable};

use crate::global_options::CmdOptions;

mod cmd_args;
mod global_options;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),

    #[error("unable to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("unable to create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Ppm(#[from] PpmError),
}

fn main() -> ExitCode {
    let options = match cmd_args::create_cmd_args().try_get_matches() {
        Ok(options) => options,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    global_options::setup_logger(&options);

    match global_options::parse_options(&options).and_then(|opts| convert(&opts)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Decode the whole input before touching the output path, so a bad input
/// never leaves an output file behind.
fn convert(opts: &CmdOptions) -> Result<(), CliError> {
    let input = File::open(&opts.input).map_err(|source| CliError::Open {
        path: opts.input.clone(),
        source,
    })?;

    let image = DecodeRequest::new(BufReader::new(input))
        .with_limits(&opts.limits)
        .strict_trailing(opts.strict_mode)
        .decode(Unstoppable)?;

    let info = ImageInfo::from(&image);
    info!("Format: {}", info.encoding);
    info!("Width: {}", info.width);
    info!("Height: {}", info.height);
    info!("Max Color: {}", info.max_value);
    info!("Total Pixels: {}", info.pixel_count());

    let output = File::create(&opts.output).map_err(|source| CliError::Create {
        path: opts.output.clone(),
        source,
    })?;

    let encoding = opts.format.encoding();
    match EncodeRequest::new(encoding).encode(&image, BufWriter::new(output), Unstoppable) {
        Ok(written) => {
            debug!("Wrote {written} bytes of {encoding} to {}", opts.output.display());
            Ok(())
        }
        Err(e) => {
            if let Err(rm) = fs::remove_file(&opts.output) {
                warn!("Could not remove partial output {}: {rm}", opts.output.display());
            }
            Err(e.into())
        }
    }
}
