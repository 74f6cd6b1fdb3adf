use agenda::api::AgendaApi;
use agenda::error::Result;
use agenda::session::Session;
use agenda::store::fs::FileStore;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod args;
use args::{Cli, DEFAULT_FILE};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));
    let mut api = AgendaApi::new(FileStore::new(path));

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut api, stdin.lock(), stdout.lock()).run()
}
