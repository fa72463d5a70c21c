//! In-memory store used by tests.

use super::{CommitContext, CommitId, FileId, PersistenceStore, VcsSystemId};
use crate::core::errors::{Error, Result};
use std::collections::HashMap;

/// Store populated up front, mirroring what the acquisition tooling would
/// have recorded before an analysis run.
#[derive(Debug, Default)]
pub struct MemoryStore {
    commits: HashMap<(String, String), CommitContext>,
    files: HashMap<VcsSystemId, HashMap<String, FileId>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit(
        mut self,
        url: &str,
        revision: &str,
        vcs_system: &str,
        commit: &str,
    ) -> Self {
        self.commits.insert(
            (url.to_string(), revision.to_string()),
            CommitContext {
                vcs_system: VcsSystemId(vcs_system.to_string()),
                commit: CommitId(commit.to_string()),
            },
        );
        self
    }

    pub fn with_file(mut self, vcs_system: &str, path: &str, file_id: &str) -> Self {
        self.files
            .entry(VcsSystemId(vcs_system.to_string()))
            .or_default()
            .insert(path.to_string(), FileId(file_id.to_string()));
        self
    }
}

impl PersistenceStore for MemoryStore {
    fn resolve_commit(&self, url: &str, revision: &str) -> Result<CommitContext> {
        if let Some(context) = self.commits.get(&(url.to_string(), revision.to_string())) {
            return Ok(context.clone());
        }
        if self.commits.keys().any(|(known_url, _)| known_url == url) {
            Err(Error::CommitNotFound {
                url: url.to_string(),
                revision: revision.to_string(),
            })
        } else {
            Err(Error::VcsSystemNotFound {
                url: url.to_string(),
            })
        }
    }

    fn file_index(&self, vcs_system: &VcsSystemId) -> Result<HashMap<String, FileId>> {
        Ok(self.files.get(vcs_system).cloned().unwrap_or_default())
    }
}
