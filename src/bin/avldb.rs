//! # AVLDB CLI Entry Point
//!
//! Binary entry point for the AVLDB command-line interface.
//!
//! ## Usage
//!
//! ```bash
//! # Open the default snapshot (./data.avldb)
//! avldb
//!
//! # Open a specific snapshot file
//! avldb ./records.avldb
//!
//! # Show version
//! avldb --version
//!
//! # Show help
//! avldb --help
//! ```
//!
//! The snapshot is loaded once at startup and saved when the REPL exits.
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=avldb=debug`).

use eyre::{bail, Result, WrapErr};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use avldb::cli::Repl;
use avldb::config::DEFAULT_SNAPSHOT_FILE;
use avldb::Database;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let mut snapshot_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("avldb {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            arg if arg.starts_with('-') => {
                bail!("Unknown option: {}", arg);
            }
            path => {
                if snapshot_path.is_some() {
                    bail!("Multiple snapshot paths specified");
                }
                snapshot_path = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    let snapshot_path = snapshot_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE));

    // the load hook: restore the last saved snapshot, or start empty
    let db = Database::open(&snapshot_path)
        .wrap_err_with(|| format!("failed to open database at {:?}", snapshot_path))?;

    let mut repl = Repl::new(db)?;
    repl.run()?;

    Ok(())
}

fn print_usage() {
    println!("AVLDB - Embedded AVL-tree record store");
    println!();
    println!("USAGE:");
    println!("    avldb [OPTIONS] [SNAPSHOT_PATH]");
    println!();
    println!("ARGS:");
    println!("    [SNAPSHOT_PATH]    Snapshot file to load and save (default: {})", DEFAULT_SNAPSHOT_FILE);
    println!();
    println!("OPTIONS:");
    println!("    -h, --help         Print help information");
    println!("    -v, --version      Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    avldb                     Open or create the default snapshot");
    println!("    avldb ./records.avldb     Open or create ./records.avldb");
}
