//! # stockroom binary
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`,
//! and this file only invokes `cli::run()` and handles process termination.
//! A data file that cannot be loaded or saved ends the process with exit
//! code 1 and the error on stderr; the file itself is left as it was.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
