//! Tree Builder: recursive directory walk producing the route tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::segment::{is_ignored, is_page_marker, is_route_group, param_token, route_name};
use crate::RouteNode;

/// Recursively scans `dir` and builds the route tree rooted at the given
/// accumulated route path (`""` for the app root).
///
/// Entries are processed in natural listing order. Ignorable names never
/// enter the tree; route group directories are merged transparently into the
/// current node; subdirectories with no page and no non-empty children are
/// pruned.
///
/// An unreadable directory is a fatal error: the scan aborts and no partial
/// tree is produced.
pub fn scan_directory(dir: &Path, route_path: &str) -> Result<RouteNode> {
    debug!(dir = %dir.display(), route = route_path, "scanning directory");

    let mut node = RouteNode::new(route_path);

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if is_ignored(&name) {
            debug!(name = %name, "skipping ignored entry");
            continue;
        }

        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;

        if file_type.is_dir() {
            let group = is_route_group(&name);
            let segment = route_name(&name).to_string();

            let child_path = if group {
                // Route groups are transparent to the URL.
                route_path.to_string()
            } else if route_path.is_empty() {
                segment.clone()
            } else {
                format!("{route_path}/{segment}")
            };

            let mut child = scan_directory(&entry.path(), &child_path)?;

            if group {
                debug!(name = %name, "merging route group");
                node.merge_group(child);
            } else if child.has_page || !child.children.is_empty() {
                if let Some(token) = param_token(&segment) {
                    child.params.push(token);
                }
                node.children.insert(segment, child);
            }
        } else if is_page_marker(&name) {
            debug!(path = %entry.path().display(), "found page marker");
            node.has_page = true;
        }
    }

    Ok(node)
}
