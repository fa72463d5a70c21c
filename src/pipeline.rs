//! End-to-end orchestration of one ingestion run.

use crate::config::{IngestConfig, LevelPolicy};
use crate::core::errors::{Error, Result};
use crate::core::{FileLink, FinalizedEntity, Level, MetricEntity};
use crate::hierarchy;
use crate::report::{locator, reader};
use crate::store::{CommitContext, FileId, PersistenceStore};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// The finished product of a run: the ordered entity sequence and the file
/// identity snapshot it was linked against.
#[derive(Debug)]
pub struct PreparedRun {
    pub context: CommitContext,
    pub entities: Vec<FinalizedEntity>,
    pub file_index: HashMap<String, FileId>,
}

/// One ingestion run over one (commit, output directory) pair.
///
/// Construction resolves the owning commit; nothing is parsed when the
/// destination context is invalid. A run either completes with a full
/// [`PreparedRun`] or aborts on the first fatal error with nothing handed
/// downstream.
pub struct IngestPipeline<'a, S: PersistenceStore> {
    store: &'a S,
    config: IngestConfig,
    output_dir: PathBuf,
    source_root: PathBuf,
    context: CommitContext,
}

impl<'a, S: PersistenceStore + Sync> IngestPipeline<'a, S> {
    pub fn new(
        store: &'a S,
        config: IngestConfig,
        output_dir: PathBuf,
        source_root: PathBuf,
        url: &str,
        revision: &str,
    ) -> Result<Self> {
        let context = store.resolve_commit(url, revision)?;
        log::debug!(
            "run attaches to commit {} on VCS system {}",
            context.commit,
            context.vcs_system
        );
        Ok(Self {
            store,
            config,
            output_dir,
            source_root,
            context,
        })
    }

    /// The commit the run attaches to.
    pub fn context(&self) -> &CommitContext {
        &self.context
    }

    /// Locate, parse, sanitize, resolve, and order the whole entity set.
    ///
    /// Levels are independent and parsed in parallel; their rows only meet
    /// at the sorter, which needs the global parent index.
    pub fn prepare(&self) -> Result<PreparedRun> {
        let file_index = self.store.file_index(&self.context.vcs_system)?;

        let parsed: Vec<Result<Vec<MetricEntity>>> = Level::ALL
            .par_iter()
            .map(|&level| self.read_level(level))
            .collect();
        let mut merged = Vec::new();
        for level_entities in parsed {
            merged.extend(level_entities?);
        }
        log::debug!("merged {} entities across levels", merged.len());

        let ordered = hierarchy::sort_entities(merged)?;
        let entities: Vec<FinalizedEntity> = ordered
            .into_iter()
            .map(|entity| finalize(entity, &file_index))
            .collect();

        log::info!(
            "prepared {} entities for commit {}",
            entities.len(),
            self.context.commit
        );
        Ok(PreparedRun {
            context: self.context.clone(),
            entities,
            file_index,
        })
    }

    fn read_level(&self, level: Level) -> Result<Vec<MetricEntity>> {
        let pattern = format!("*-{}.csv", level.report_suffix());
        match locator::find_report(&self.output_dir, &pattern)? {
            Some(path) => reader::read_report(&path, level, &self.source_root),
            None => match self.config.policy_for(level) {
                LevelPolicy::Required => Err(Error::ReportMissing {
                    level,
                    pattern,
                    dir: self.output_dir.clone(),
                }),
                LevelPolicy::Optional => {
                    log::debug!(
                        "no {} report in {}; level skipped",
                        level,
                        self.output_dir.display()
                    );
                    Ok(Vec::new())
                }
            },
        }
    }
}

/// Attach the file identity for class entities backed by a known file. A
/// resolved path missing from the snapshot marks a file the store has not
/// seen yet, which is distinct from any lookup failure.
fn finalize(entity: MetricEntity, file_index: &HashMap<String, FileId>) -> FinalizedEntity {
    let file = entity
        .resolved_path
        .as_ref()
        .map(|path| match file_index.get(path) {
            Some(file_id) => FileLink::Known(file_id.clone()),
            None => FileLink::New,
        });
    let name = match entity.resolved_path {
        Some(path) => path,
        None => entity.display_name,
    };
    FinalizedEntity {
        id: entity.id,
        parent: entity.parent,
        level: entity.level,
        name,
        metrics: entity.metrics,
        file,
    }
}
