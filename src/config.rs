//! Run configuration.
//!
//! Policy knobs only: which report levels a run may go without. Loaded from
//! a `metridex.toml` next to the invocation or from an explicit path.

use crate::core::errors::{Error, Result};
use crate::core::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Whether a missing report file aborts the run or just skips the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelPolicy {
    Required,
    Optional,
}

/// Per-level absence policy. The component report anchors the hierarchy and
/// is required by default; a run without packages or classes is legal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelPolicies {
    #[serde(default = "default_component_policy")]
    pub component: LevelPolicy,

    #[serde(default = "default_package_policy")]
    pub package: LevelPolicy,

    #[serde(default = "default_class_policy")]
    pub class: LevelPolicy,
}

impl Default for LevelPolicies {
    fn default() -> Self {
        Self {
            component: default_component_policy(),
            package: default_package_policy(),
            class: default_class_policy(),
        }
    }
}

fn default_component_policy() -> LevelPolicy {
    LevelPolicy::Required
}

fn default_package_policy() -> LevelPolicy {
    LevelPolicy::Optional
}

fn default_class_policy() -> LevelPolicy {
    LevelPolicy::Optional
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub levels: LevelPolicies,
}

impl IngestConfig {
    /// Load configuration from `path`, or from `metridex.toml` in the
    /// working directory, falling back to defaults when neither exists. An
    /// explicitly named file must be readable.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(explicit) => Some(fs::read_to_string(explicit)?),
            None => fs::read_to_string("metridex.toml").ok(),
        };
        match contents {
            Some(raw) => toml::from_str(&raw).map_err(|e| Error::Configuration(e.to_string())),
            None => Ok(Self::default()),
        }
    }

    pub fn policy_for(&self, level: Level) -> LevelPolicy {
        match level {
            Level::Aggregate => self.levels.component,
            Level::Package => self.levels.package,
            Level::Class => self.levels.class,
        }
    }
}
