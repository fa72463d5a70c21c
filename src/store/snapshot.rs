//! Store backed by an exported JSON snapshot.
//!
//! Lets the binary run a full ingestion without a live store: the snapshot
//! carries the commit identities the acquisition step recorded and the file
//! listing for the VCS system.

use super::{CommitContext, CommitId, FileId, PersistenceStore, VcsSystemId};
use crate::core::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct SnapshotStore {
    url: String,
    revision: String,
    vcs_system: VcsSystemId,
    commit: CommitId,
    #[serde(default)]
    files: HashMap<String, FileId>,
}

impl SnapshotStore {
    /// Load a snapshot from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PersistenceStore for SnapshotStore {
    fn resolve_commit(&self, url: &str, revision: &str) -> Result<CommitContext> {
        if self.url != url {
            return Err(Error::VcsSystemNotFound {
                url: url.to_string(),
            });
        }
        if self.revision != revision {
            return Err(Error::CommitNotFound {
                url: url.to_string(),
                revision: revision.to_string(),
            });
        }
        Ok(CommitContext {
            vcs_system: self.vcs_system.clone(),
            commit: self.commit.clone(),
        })
    }

    fn file_index(&self, vcs_system: &VcsSystemId) -> Result<HashMap<String, FileId>> {
        if *vcs_system != self.vcs_system {
            return Err(Error::VcsSystemNotFound {
                url: self.url.clone(),
            });
        }
        Ok(self.files.clone())
    }
}
