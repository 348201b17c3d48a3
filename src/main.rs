mod chunk;
mod cli;
mod commands;
mod error;
mod page_selection;
mod pdf;

use clap::Parser;
use cli::Cli;
use commands::split::SplitRequest;
use pdf::LopdfEngine;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the progress lines.
    let default_filter = if cli.verbose {
        "splitpdf=debug"
    } else {
        "splitpdf=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let request = SplitRequest {
        input: cli.input,
        output_dir: cli.output_dir,
        pages_per_chunk: cli.pages,
    };

    if let Err(e) = commands::split::run(&LopdfEngine, &request) {
        eprintln!("Error: {:#}", anyhow::Error::new(e));
        std::process::exit(1);
    }
}
