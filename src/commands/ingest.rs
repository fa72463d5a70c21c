//! Handler for the `ingest` subcommand.

use crate::config::IngestConfig;
use crate::core::FinalizedEntity;
use crate::pipeline::IngestPipeline;
use crate::store::snapshot::SnapshotStore;
use crate::store::{CommitId, VcsSystemId};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct IngestOptions {
    pub output_dir: PathBuf,
    pub source_root: PathBuf,
    pub url: String,
    pub revision: String,
    pub store: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// What the command emits: the run context plus the ordered sequence.
#[derive(Serialize)]
struct IngestReport<'a> {
    vcs_system: &'a VcsSystemId,
    commit: &'a CommitId,
    entities: &'a [FinalizedEntity],
}

pub fn run(options: IngestOptions) -> Result<()> {
    let config = IngestConfig::load(options.config.as_deref()).context("loading configuration")?;
    let store = SnapshotStore::from_path(&options.store)
        .with_context(|| format!("loading store snapshot {}", options.store.display()))?;

    let pipeline = IngestPipeline::new(
        &store,
        config,
        options.output_dir,
        options.source_root,
        &options.url,
        &options.revision,
    )?;
    let run = pipeline.prepare()?;

    let report = IngestReport {
        vcs_system: &run.context.vcs_system,
        commit: &run.context.commit,
        entities: &run.entities,
    };
    let rendered = serde_json::to_string_pretty(&report)?;

    match options.output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?
        }
        None => {
            let stdout = std::io::stdout();
            writeln!(stdout.lock(), "{}", rendered)?;
        }
    }
    Ok(())
}
