use anyhow::Result;
use clap::Parser;
use metridex::cli::{Cli, Commands};
use metridex::commands::ingest::{self, IngestOptions};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest {
            output_dir,
            source_root,
            url,
            revision,
            store,
            config,
            output,
        } => ingest::run(IngestOptions {
            output_dir,
            source_root,
            url,
            revision,
            store,
            config,
            output,
        }),
    }
}
