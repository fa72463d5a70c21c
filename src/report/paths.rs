use std::path::{Component, Path};

/// Rewrite a tool-emitted entity name into repository-relative form.
///
/// Names that are absolute paths under `source_root` become paths relative
/// to it, with `/` separators as the version-control layer expects. Every
/// other name passes through verbatim: dotted package names, the
/// unnamed-package marker, and the system root all denote logical entities
/// rather than files. This is a pure string transform; nothing is checked
/// against the filesystem.
pub fn resolve_display_name(name: &str, source_root: &Path) -> String {
    match Path::new(name).strip_prefix(source_root) {
        Ok(relative) => {
            let segments: Vec<_> = relative
                .components()
                .filter_map(|component| match component {
                    Component::Normal(segment) => Some(segment.to_string_lossy()),
                    _ => None,
                })
                .collect();
            segments.join("/")
        }
        Err(_) => name.to_string(),
    }
}
