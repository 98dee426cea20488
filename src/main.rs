//! docsplit: split a large markdown document into per-section files.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use docsplit::{config, Options};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docsplit")]
#[command(about = "Split a markdown document into one file per section", long_about = None)]
struct Args {
    /// Markdown document to split
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Directory to write section files into
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Skip extraction of type and schema blocks
    #[arg(long)]
    no_extract: bool,

    /// Also write the section index as JSON
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let cfg = config::Config::load();
    let mut options = Options::from(&cfg);

    // Override config with command line args
    if let Some(input) = args.input {
        options.input = input;
    }
    if let Some(output_dir) = args.output_dir {
        options.output_dir = output_dir;
    }
    if args.no_extract {
        options.extract = false;
    }
    options.manifest = args.manifest;

    docsplit::run(&options)?;
    Ok(())
}
