pub mod errors;

use crate::store::FileId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parent value the analysis tool emits for true roots.
pub const LOGICAL_ROOT: &str = "__LogicalRoot__";

/// Display name of the synthetic whole-module root.
pub const SYSTEM_ROOT: &str = "<System>";

/// Display name of the synthetic top package.
pub const ROOT_PACKAGE: &str = "<root_package>";

/// Package name the tool assigns to classes outside any named package.
pub const UNNAMED_PACKAGE: &str = "unnamed package";

/// Abstraction tier of an analyzed entity.
///
/// The tier decides which report file an entity comes from and which of its
/// columns are bookkeeping rather than metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Whole-module roots the tool synthesizes; reported as "Component".
    #[serde(rename = "component")]
    Aggregate,
    Package,
    Class,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Aggregate, Level::Package, Level::Class];

    /// Suffix of the generated report file carrying this level.
    pub fn report_suffix(self) -> &'static str {
        match self {
            Level::Aggregate => "Component",
            Level::Package => "Package",
            Level::Class => "Class",
        }
    }

    /// Aggregate-level roots are emitted ahead of all other entities,
    /// whatever their order hints say.
    pub(crate) fn emit_rank(self) -> u8 {
        match self {
            Level::Aggregate => 0,
            Level::Package | Level::Class => 1,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Aggregate => "component",
            Level::Package => "package",
            Level::Class => "class",
        };
        f.write_str(name)
    }
}

/// One analyzed unit at one abstraction level, after sanitization.
///
/// Entities are materialized once per run and never mutated after the
/// sorter has ordered them.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricEntity {
    /// Opaque tool-assigned identifier, unique within one run.
    pub id: String,
    /// Identifier of the enclosing entity; `None` for true roots.
    pub parent: Option<String>,
    pub level: Level,
    /// Fully-qualified name as emitted by the tool.
    pub display_name: String,
    /// Tool-assigned rank read as an integer by the sorter. Disambiguates
    /// among co-ready entities, never overrides the parent relation.
    pub order_hint: String,
    /// Metric name to value, bookkeeping columns already stripped.
    pub metrics: BTreeMap<String, f64>,
    /// Repository-relative path, present only for file-backed classes.
    pub resolved_path: Option<String>,
}

/// Association between a class entity and the stored file identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "file_id", rename_all = "lowercase")]
pub enum FileLink {
    /// The resolved path is already tracked by the store.
    Known(FileId),
    /// The resolved path is not in the snapshot; the file has not been
    /// recorded yet.
    New,
}

/// Entity in its persistence-ready form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalizedEntity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub level: Level,
    /// Repository-relative path for file-backed classes, logical name for
    /// everything else.
    pub name: String,
    pub metrics: BTreeMap<String, f64>,
    /// File identity link; `None` for entities that are not file-backed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileLink>,
}
