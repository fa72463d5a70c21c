//! Interfaces to the commit and file bookkeeping store.
//!
//! The store itself lives outside this crate; the pipeline only consumes
//! these read-only operations. [`memory::MemoryStore`] backs the tests and
//! [`snapshot::SnapshotStore`] lets the binary run against an exported JSON
//! snapshot.

pub mod memory;
pub mod snapshot;

use crate::core::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of one version-control system known to the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VcsSystemId(pub String);

/// Identity of one commit known to the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(pub String);

/// Identity of one tracked file known to the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub String);

impl fmt::Display for VcsSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The commit a run attaches its records to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitContext {
    pub vcs_system: VcsSystemId,
    pub commit: CommitId,
}

/// Read-only view of the bookkeeping store.
pub trait PersistenceStore {
    /// Resolve the (repository URL, revision hash) pair a run belongs to.
    ///
    /// Failure means the upstream acquisition step never ran; the pipeline
    /// aborts before touching any report file.
    fn resolve_commit(&self, url: &str, revision: &str) -> Result<CommitContext>;

    /// Snapshot of every known repository-relative path for one VCS system.
    ///
    /// Taken once per run; lookups during emission use the snapshot and do
    /// not re-query the store.
    fn file_index(&self, vcs_system: &VcsSystemId) -> Result<HashMap<String, FileId>>;
}
