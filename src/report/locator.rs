use crate::core::errors::Result;
use std::path::{Path, PathBuf};

/// Find the report file matching `pattern` (a glob such as `*-Class.csv`)
/// in `dir`.
///
/// Returns `None` when nothing matches. More than one match is a degenerate
/// layout the tool does not normally produce; the lexicographically first
/// file is taken so repeated runs stay deterministic.
pub fn find_report(dir: &Path, pattern: &str) -> Result<Option<PathBuf>> {
    let glob_expr = dir.join(pattern);
    let mut matches: Vec<PathBuf> = glob::glob(&glob_expr.to_string_lossy())?
        .filter_map(std::result::Result::ok)
        .collect();
    matches.sort();

    if matches.len() > 1 {
        log::warn!(
            "{} files match {} in {}; keeping {}",
            matches.len(),
            pattern,
            dir.display(),
            matches[0].display()
        );
    }

    Ok(matches.into_iter().next())
}
