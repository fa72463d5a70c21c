// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod hierarchy;
pub mod pipeline;
pub mod report;
pub mod store;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::{FileLink, FinalizedEntity, Level, MetricEntity};
pub use crate::hierarchy::sort_entities;
pub use crate::pipeline::{IngestPipeline, PreparedRun};
pub use crate::report::{locator::find_report, reader::read_report, sanitize::sanitize_metrics};
pub use crate::store::{CommitContext, CommitId, FileId, PersistenceStore, VcsSystemId};
