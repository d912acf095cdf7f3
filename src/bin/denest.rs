//! denest CLI
//!
//! Recursively extract nested archives from a file or directory tree.

use anyhow::Result;
use clap::Parser;
use denest::{extract, is_archive, walk_files, Extraction};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "denest")]
#[command(version)]
#[command(about = "Recursively extract nested archives (gzip, tar, zip)")]
struct Cli {
    /// File or directory to extract (overrides --path)
    #[arg(value_name = "PATH")]
    target: Option<PathBuf>,

    /// The path of the file or folder to extract
    #[arg(short, long, default_value = "./logs.tar.gz")]
    path: PathBuf,

    /// Delete each archive after extracting it
    #[arg(short = 'd', long = "delete")]
    delete: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.target.unwrap_or(cli.path);

    if path.is_dir() {
        for file in walk_files(&path) {
            if is_archive(&file) {
                let result = extract(&file, cli.delete)?;
                report(&result, cli.verbose);
            }
        }
    } else if path.is_file() {
        let result = extract(&path, cli.delete)?;
        report(&result, cli.verbose);
    } else {
        println!("Path should be a file or a directory.");
        process::exit(1);
    }

    Ok(())
}

fn report(extraction: &Extraction, verbose: bool) {
    if !verbose {
        return;
    }
    println!("Extracted: {}", extraction.target.display());
    for nested in &extraction.nested {
        report(nested, verbose);
    }
}
