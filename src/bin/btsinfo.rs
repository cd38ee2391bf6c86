// src/bin/btsinfo.rs
use anyhow::Context;
use bts_rs::{format_report, BtsReader};
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Inspect the header of a TurbSim full-field (BTS) wind grid file.
#[derive(Parser, Debug)]
#[command(name = "btsinfo", version, about)]
struct Args {
    /// File path of the BTS file to read
    file_path: PathBuf,
}

fn run(args: Args) -> anyhow::Result<()> {
    let reader = BtsReader::open(&args.file_path)
        .with_context(|| format!("failed to decode header of {}", args.file_path.display()))?;

    print!("{}", format_report(reader.header()));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}
