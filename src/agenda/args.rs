use clap::Parser;
use std::path::PathBuf;

/// Backing file used when no path is given on the command line.
pub const DEFAULT_FILE: &str = "contacts.csv";

#[derive(Parser, Debug)]
#[command(name = "agenda")]
#[command(about = "A small, file-backed phone book for the command line", long_about = None)]
pub struct Cli {
    /// Path to the contacts file (created on first save if missing)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
