use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Name of the file written by encode.
pub const ENCODED_NAME: &str = "encoded.bin";
/// Name of the file written by decode.
pub const DECODED_NAME: &str = "output.txt";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a count of -v flags onto a level, starting from Info.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Info,
            1 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level(&self) -> LevelFilter {
        match self {
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Encode or Decode
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Compress or restore a file with a Huffman prefix code",
    long_about = "
    encode writes the compressed form of the input to encoded.bin.
    decode reads a compressed file and writes the original bytes to output.txt.
    Both write into the current directory."
)]
pub struct Args {
    /// encode or decode
    #[clap(value_enum)]
    mode: Mode,

    /// Filename of file to process
    filename: PathBuf,

    /// Sets verbosity. -v adds debug output, -vv is chatty
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    v: u8,
}

/// Options the program runs with.
#[derive(Debug)]
pub struct HufOpts {
    /// Encode/Decode
    pub op_mode: Mode,
    /// File to read for input
    pub file: PathBuf,
    /// File the result is written to
    pub output: PathBuf,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HufOpts {
    /// Build options from parsed arguments. The output name is fixed by the mode.
    pub fn from_args(args: Args) -> Self {
        let output = match args.mode {
            Mode::Encode => ENCODED_NAME,
            Mode::Decode => DECODED_NAME,
        };
        Self {
            op_mode: args.mode,
            file: args.filename,
            output: PathBuf::from(output),
            verbose: Verbosity::from_count(args.v),
        }
    }
}

/// Parse the command line, set the log level and report what we are about to do.
pub fn init_huf_opts() -> HufOpts {
    let opts = HufOpts::from_args(Args::parse());
    log::set_max_level(opts.verbose.level());

    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file.display());
    opts
}
