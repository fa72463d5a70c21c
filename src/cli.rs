use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metridex")]
#[command(about = "Normalizes and orders static-analysis metric reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest one analysis run and emit the ordered entity sequence
    Ingest {
        /// Directory holding the generated report files
        #[arg(long)]
        output_dir: PathBuf,

        /// Root of the analyzed source checkout
        #[arg(long)]
        source_root: PathBuf,

        /// URL of the repository the run belongs to
        #[arg(long)]
        url: String,

        /// Revision hash of the analyzed commit
        #[arg(long)]
        revision: String,

        /// JSON snapshot of the bookkeeping store
        #[arg(long)]
        store: PathBuf,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
