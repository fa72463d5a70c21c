//! Parses one generated report into metric entities.

use crate::core::errors::{Error, Result, ResultExt};
use crate::core::{Level, MetricEntity, LOGICAL_ROOT};
use crate::report::{paths, sanitize};
use std::collections::HashMap;
use std::path::Path;

/// Read every row of the `level` report at `path`.
pub fn read_report(path: &Path, level: Level, source_root: &Path) -> Result<Vec<MetricEntity>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut entities = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: HashMap<&str, &str> = headers.iter().zip(record.iter()).collect();
        let entity = entity_from_row(level, &row, source_root)
            .context(format!("{} report {}", level, path.display()))?;
        entities.push(entity);
    }

    log::debug!("{}: {} {} entities", path.display(), entities.len(), level);
    Ok(entities)
}

fn entity_from_row(
    level: Level,
    row: &HashMap<&str, &str>,
    source_root: &Path,
) -> Result<MetricEntity> {
    let id = required(row, "ID")?.to_string();
    // Component reports name their single row in `Name`; the lower levels
    // carry the fully-qualified form in `LongName`.
    let display_name = row
        .get("LongName")
        .or_else(|| row.get("Name"))
        .copied()
        .ok_or(Error::MissingColumn { column: "LongName" })?
        .to_string();

    let raw_parent = row.get("Parent").copied().filter(|value| !value.is_empty());
    let order_hint = derive_order_hint(raw_parent);
    let parent = raw_parent
        .filter(|value| *value != LOGICAL_ROOT)
        .map(str::to_string);

    let resolved_path = match level {
        Level::Class => {
            let resolved = paths::resolve_display_name(&display_name, source_root);
            (resolved != display_name).then_some(resolved)
        }
        _ => None,
    };

    let metrics = sanitize::sanitize_metrics(level, row.iter().map(|(k, v)| (*k, *v)))?;

    Ok(MetricEntity {
        id,
        parent,
        level,
        display_name,
        order_hint,
        metrics,
        resolved_path,
    })
}

/// Rank used for sibling ordering. Aggregate rows carry no parent at all
/// and rank 0; rows parented directly on the logical root rank 1. Every
/// other row ranks by the numeric portion of its parent identifier, which
/// is how the tool encodes discovery order.
fn derive_order_hint(raw_parent: Option<&str>) -> String {
    match raw_parent {
        None => "0".to_string(),
        Some(LOGICAL_ROOT) => "1".to_string(),
        Some(parent) => parent
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .to_string(),
    }
}

fn required<'a>(row: &HashMap<&'a str, &'a str>, column: &'static str) -> Result<&'a str> {
    row.get(column)
        .copied()
        .ok_or(Error::MissingColumn { column })
}
