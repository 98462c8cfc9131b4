//! Code Generator: route tree to generated TypeScript module text.
//!
//! Pure and total over any well-formed tree; generation never fails. The
//! emitted module contains a constant route table (`as const` for literal key
//! narrowing), a derived key type, and a `createUrl` helper.

use std::collections::HashSet;

use tracing::debug;

use crate::RouteNode;

const GENERATED_HEADER: &str = "// This file is auto-generated. DO NOT EDIT IT MANUALLY!";

/// Renders the full generated module for a scanned route tree.
///
/// Traversal is depth-first, parent before children, children in discovery
/// order, so output is deterministic for a given tree.
pub fn render(root: &RouteNode) -> String {
    let mut entries = String::new();
    render_node(root, "", &mut entries);

    format!(
        r#"{GENERATED_HEADER}
import {{ ParsedUrlQueryInput }} from 'querystring';

type RouteConfig = {{
    [key: string]: {{
        path: string;
        params?: Record<string, string>;
        query?: Record<string, string>;
    }};
}};

export const routes = {{
{entries}}} as const;

export type AppRoutes = keyof typeof routes;

export function createUrl(
    route: AppRoutes,
    params?: Record<string, string>,
    query?: Record<string, ParsedUrlQueryInput>
): string {{
    let path: string = routes[route].path;

    // Replace dynamic parameters
    if (params) {{
        Object.entries(params).forEach(([key, value]) => {{
            const paramRegex = new RegExp(`\\[(?:\\.\\.\\.)?${{key}}\\]`, 'g');
            path = path.replace(paramRegex, value);
        }});
    }}

    // Add query parameters
    if (query) {{
        const queryString = Object.entries(query)
            .map(([key, value]) => `${{key}}=${{encodeURIComponent(String(value))}}`)
            .join('&');
        if (queryString) {{
            path += `?${{queryString}}`;
        }}
    }}

    return path;
}}
"#
    )
}

/// Emits the table entry for `node` (when it has a page) and recurses into
/// its children with the reconciled path as the new prefix.
fn render_node(node: &RouteNode, prefix: &str, out: &mut String) {
    let current_path = if prefix.is_empty() {
        node.path.clone()
    } else {
        reconcile_path(prefix, &node.path)
    };

    debug!(path = %current_path, has_page = node.has_page, "rendering route node");

    if node.has_page {
        let segments = dedupe_key_segments(&current_path);
        let key = route_key(&segments);
        // A page at the app root has no segments; name it explicitly so the
        // emitted table stays valid TypeScript.
        let key = if key.is_empty() { "index".to_string() } else { key };

        out.push_str(&format!("  {key}: {{\n"));
        out.push_str(&format!("    path: '{current_path}',\n"));

        let params = collect_params(node, &current_path);
        if !params.is_empty() {
            out.push_str("    params: {\n");
            for param in &params {
                out.push_str(&format!("      {param}: '',\n"));
            }
            out.push_str("    },\n");
        }

        out.push_str("  },\n");
    }

    for (_, child) in node.children.iter() {
        render_node(child, &current_path, out);
    }
}

/// Recomputes a node's effective path by concatenating the prefix's segments
/// with the node's own stored segments, then de-duplicating: empty segments
/// are dropped, bracket parameter segments keep only their first exact
/// occurrence, and plain segments keep only their first case-insensitive
/// occurrence.
fn reconcile_path(prefix: &str, path: &str) -> String {
    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    for segment in prefix.split('/').chain(path.split('/')) {
        if segment.is_empty() {
            continue;
        }
        let marker = if segment.starts_with('[') {
            segment.to_string()
        } else {
            segment.to_lowercase()
        };
        if seen.insert(marker) {
            kept.push(segment);
        }
    }

    kept.join("/")
}

/// Splits a final path into segments for key derivation, keeping only the
/// first case-insensitive occurrence of each segment.
fn dedupe_key_segments(path: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    path.split('/')
        .filter(|segment| !segment.is_empty() && seen.insert(segment.to_lowercase()))
        .collect()
}

/// Derives the lowerCamelCase route key from final, de-duplicated segments.
///
/// Brackets are stripped and the spread marker rewritten to `Catchall`;
/// hyphenated parts are title-cased and joined; only the first character of
/// the first segment's contribution is lower-cased.
///
/// Distinct paths can normalize to the same key; collisions are not detected
/// and the last entry emitted wins.
fn route_key(segments: &[&str]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let clean = segment.replace(['[', ']'], "").replace("...", "Catchall");
            let parts: Vec<String> = clean.split('-').map(title_case).collect();

            if index == 0 {
                let mut first = parts[0].to_lowercase();
                first.push_str(&parts[1..].concat());
                first
            } else {
                parts.concat()
            }
        })
        .collect()
}

fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The de-duplicated union of the node's own parameter tokens and the
/// bracket parameters re-derived from the final path, each normalized to a
/// bare identifier name, in first-seen order.
fn collect_params(node: &RouteNode, path: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    let from_tokens = node.params.iter().map(|token| token.name().to_string());
    let from_path = path
        .split('/')
        .filter(|segment| segment.starts_with('[') && segment.ends_with(']'))
        .map(normalize_param);

    for name in from_tokens.chain(from_path) {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    names
}

/// Strips brackets, the spread marker, and the optional marker from a
/// bracket segment, leaving the bare parameter name.
fn normalize_param(segment: &str) -> String {
    segment
        .trim_matches(|c| c == '[' || c == ']')
        .trim_start_matches('.')
        .trim_end_matches('?')
        .to_string()
}
