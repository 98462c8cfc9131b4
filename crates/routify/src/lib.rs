//! # Routify
//!
//! Scans a file-based routing directory (Next.js app router conventions) and
//! generates a TypeScript module with a typed route table and a `createUrl`
//! helper, so applications can reference routes through checked keys instead
//! of hand-typed path strings.
//!
//! Supported conventions:
//! - Page markers (`page.tsx`, `page.ts`, `page.jsx`, `page.js`)
//! - Dynamic segments (`[id]`)
//! - Catch-all segments (`[...slug]`)
//! - Optional catch-all segments (`[[...slug]]`)
//! - Route groups (`(marketing)`) — organize files without affecting the URL
//!
//! Two passes:
//! - [`scan_directory`] walks the app directory once and builds a [`RouteNode`]
//!   tree, merging route groups into their parent and pruning empty branches.
//! - [`render`] walks that tree and emits the generated module text. It is
//!   pure: same tree in, same text out.
//!
//! ## Example
//!
//! ```
//! use routify::{render, RouteNode};
//!
//! let mut root = RouteNode::new("");
//! let mut about = RouteNode::new("about");
//! about.has_page = true;
//! root.children.insert("about".to_string(), about);
//!
//! let module = render(&root);
//! assert!(module.contains("about: {"));
//! assert!(module.contains("path: 'about',"));
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub mod generate;
pub mod scan;
pub mod segment;

pub use generate::render;
pub use scan::scan_directory;
pub use segment::{classify_segment, SegmentKind};

// ============================================================================
// Core Types
// ============================================================================

/// A parameter contributed by one dynamic path segment.
///
/// The textual form mirrors the segment syntax with brackets stripped:
/// `name` for `[name]`, `...name` for `[...name]`, `...name?` for
/// `[[...name]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamToken {
    /// Required parameter from `[name]`
    Plain(String),
    /// Catch-all parameter from `[...name]`
    CatchAll(String),
    /// Optional catch-all parameter from `[[...name]]`
    OptionalCatchAll(String),
}

impl ParamToken {
    /// The bare identifier name, with spread and optional markers stripped.
    pub fn name(&self) -> &str {
        match self {
            ParamToken::Plain(name)
            | ParamToken::CatchAll(name)
            | ParamToken::OptionalCatchAll(name) => name,
        }
    }
}

impl fmt::Display for ParamToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamToken::Plain(name) => write!(f, "{name}"),
            ParamToken::CatchAll(name) => write!(f, "...{name}"),
            ParamToken::OptionalCatchAll(name) => write!(f, "...{name}?"),
        }
    }
}

impl Serialize for ParamToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Insertion-ordered map from raw segment name to child node.
///
/// Discovery order is the traversal order for code generation, so the map
/// must iterate in insertion order. Re-inserting an existing key replaces the
/// value in place (last writer wins, the documented collision rule for route
/// group merges).
#[derive(Debug, Clone, Default)]
pub struct ChildMap(Vec<(String, RouteNode)>);

impl ChildMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the node stored under `key`.
    pub fn insert(&mut self, key: String, node: RouteNode) {
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = node,
            None => self.0.push((key, node)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&RouteNode> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, node)| node)
    }

    /// Merge another map into this one, later entries overwriting same-named
    /// keys. Takes the other map by value so sibling recursions never alias.
    pub fn merge(&mut self, other: ChildMap) {
        for (key, node) in other.0 {
            self.insert(key, node);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, RouteNode)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ChildMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, node) in &self.0 {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

/// A tree node representing one path segment level of the app directory.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct RouteNode {
    /// Normalized slash-separated route path accumulated from the root
    /// (empty string at the root).
    pub path: String,
    /// Ordered parameter tokens contributed by this node and any merged
    /// route group ancestors.
    pub params: Vec<ParamToken>,
    /// Child nodes keyed by raw segment name, in discovery order.
    pub children: ChildMap,
    /// Whether this node (or, for a merged group, one of its children)
    /// corresponds to an addressable page.
    pub has_page: bool,
}

impl RouteNode {
    /// Create an empty node at the given accumulated route path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Merge a route group child into this node: children are merged
    /// (last writer wins on key collisions), params are concatenated, and
    /// `has_page` propagates upward.
    pub fn merge_group(&mut self, group: RouteNode) {
        self.children.merge(group.children);
        self.params.extend(group.params);
        self.has_page |= group.has_page;
    }
}
