//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use huffcode::tools::cli::{init_huf_opts, Mode};
use huffcode::{compress_file, decompress_file};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger was already initialised.");
    }

    let options = init_huf_opts();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Encode => compress_file(&options.file, &options.output),
        Mode::Decode => decompress_file(&options.file, &options.output),
    };

    match result {
        Ok(()) => {
            println!(
                "Message was {}d successfully to '{}'.",
                options.op_mode.to_string().to_lowercase(),
                options.output.display()
            );
            info!("Done.");
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("huffcode: {}", e);
            exit(1);
        }
    }
}
