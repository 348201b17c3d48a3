use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitpdf")]
#[command(about = "Split a PDF into multiple PDFs with a fixed number of pages")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub input: PathBuf,

    /// Directory to save the output files (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of pages per output file
    #[arg(long, default_value_t = 500, value_name = "N")]
    pub pages: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
