//! # CLI Layer
//!
//! This is **one possible UI client** for the inventory library. It is the only
//! place that:
//! - Parses command-line flags and reads `stockroom.json`
//! - Sets up logging
//! - Reads stdin and writes to the terminal
//!
//! ## Structure
//!
//! - `args.rs`: clap flag definitions
//! - `session.rs`: the add/view/update/delete/exit loop
//! - `render.rs`: product table and message formatting
//!
//! Everything below (`InventoryApi`, commands, store) takes and returns plain
//! Rust values and never touches stdout.

mod args;
mod render;
mod session;

use args::Cli;
use clap::Parser;
use console::Term;
use log::{debug, info};
use session::Session;
use std::io;
use std::path::PathBuf;
use stockroom::api::InventoryApi;
use stockroom::config::StockConfig;
use stockroom::error::Result;
use stockroom::store::fs::CsvStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = StockConfig::load(&cwd)?;
    debug!("Config: {:?}", config);

    let data_path = cli.file.unwrap_or_else(|| config.data_path(&cwd));
    info!("Using data file {}", data_path.display());

    let api = InventoryApi::open(CsvStore::new(data_path))?;

    let stdin = io::stdin();
    let mut session = Session::new(api, stdin.lock(), io::stdout());
    if config.clear_screen && !cli.no_clear {
        session = session.with_screen(Term::stdout());
    }
    session.run()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
