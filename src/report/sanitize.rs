//! Strips bookkeeping columns from raw report rows and types the rest.

use crate::core::errors::{Error, Result};
use crate::core::Level;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

/// Identity columns stripped from aggregate-level rows.
static AGGREGATE_EXCLUDED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["ID", "Name", "LongName"]));

/// Package rows additionally carry parent and component references.
static PACKAGE_EXCLUDED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["ID", "Name", "LongName", "Parent", "Component"]));

/// Class rows also carry source-position bookkeeping columns.
static CLASS_EXCLUDED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "ID",
        "Name",
        "LongName",
        "Parent",
        "Component",
        "Path",
        "Line",
        "Column",
        "EndLine",
        "EndColumn",
    ])
});

/// The fixed set of columns to drop for `level`.
fn excluded_columns(level: Level) -> &'static HashSet<&'static str> {
    match level {
        Level::Aggregate => &AGGREGATE_EXCLUDED,
        Level::Package => &PACKAGE_EXCLUDED,
        Level::Class => &CLASS_EXCLUDED,
    }
}

/// Convert one raw report row into a metric mapping.
///
/// Every column outside the level's exclusion set is parsed strictly as a
/// float. A non-numeric retained value indicates an incompatible tool
/// version and fails the run; coercing it to zero would corrupt aggregate
/// metrics undetectably.
pub fn sanitize_metrics<'a, I>(level: Level, row: I) -> Result<BTreeMap<String, f64>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let excluded = excluded_columns(level);
    let mut metrics = BTreeMap::new();

    for (column, value) in row {
        if excluded.contains(column) {
            continue;
        }
        let parsed: f64 = value.parse().map_err(|_| Error::MalformedMetric {
            column: column.to_string(),
            value: value.to_string(),
        })?;
        metrics.insert(column.to_string(), parsed);
    }

    Ok(metrics)
}
