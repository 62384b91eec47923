//! `json-dot`: read or edit a JSON document by dotted path.
//!
//! Usage:
//!   json-dot [--config <options.toml>] <command> <path> [<arg>]
//!
//! The document is read from stdin, the result is written to stdout.
//! Set `RUST_LOG=json_dot=debug` to see container vivification on stderr.

use json_dot::cli::{run, split_options};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, args) = match split_options(&args) {
        Ok(split) => split,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(args, buf.trim(), options) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout
                .write_all(result.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
            {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
