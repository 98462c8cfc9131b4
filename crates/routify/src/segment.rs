//! Segment classification for app-router directory names.
//!
//! Pure functions mapping raw filesystem names to their routing meaning:
//! ignorable entries, page markers, route groups, and bracket parameter
//! syntax.

use crate::ParamToken;

/// Page marker filenames recognized inside a route directory.
pub const PAGE_MARKERS: [&str; 4] = ["page.tsx", "page.ts", "page.jsx", "page.js"];

/// Returns true for entries that never enter the route tree: dotfiles,
/// underscore-prefixed names, the reserved `api` directory, and
/// `node_modules`.
pub fn is_ignored(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_') || name == "api" || name == "node_modules"
}

/// Returns true if the filename marks its directory as an addressable page.
pub fn is_page_marker(name: &str) -> bool {
    PAGE_MARKERS.contains(&name)
}

/// Returns true for route group directories like `(marketing)`.
pub fn is_route_group(name: &str) -> bool {
    name.starts_with('(') && name.ends_with(')')
}

/// The directory name with wrapping parentheses stripped; identity for
/// non-group names.
pub fn route_name(name: &str) -> &str {
    name.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(name)
}

/// Classification of one route segment name.
///
/// Parsing rules, evaluated in order:
/// 1. Optional catch-all: `[[...name]]`
/// 2. Catch-all: `[...name]`
/// 3. Dynamic parameter: `[name]`
/// 4. Static: anything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// `[[...name]]` — matches zero or more trailing segments
    OptionalCatchAll(String),
    /// `[...name]` — matches one or more trailing segments
    CatchAll(String),
    /// `[name]` — single required parameter
    Param(String),
    /// Plain text segment
    Static,
}

/// Classifies a segment name into a [`SegmentKind`] (pure function).
///
/// # Examples
///
/// ```
/// use routify::segment::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("about"), SegmentKind::Static);
/// assert_eq!(classify_segment("[id]"), SegmentKind::Param("id".into()));
/// assert_eq!(classify_segment("[...slug]"), SegmentKind::CatchAll("slug".into()));
/// assert_eq!(
///     classify_segment("[[...slug]]"),
///     SegmentKind::OptionalCatchAll("slug".into())
/// );
/// ```
pub fn classify_segment(segment: &str) -> SegmentKind {
    if segment.starts_with("[[") && segment.ends_with("]]") {
        if let Some(name) = segment[2..segment.len() - 2].strip_prefix("...") {
            return SegmentKind::OptionalCatchAll(name.to_string());
        }
    }

    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => match inner.strip_prefix("...") {
            Some(name) => SegmentKind::CatchAll(name.to_string()),
            None => SegmentKind::Param(inner.to_string()),
        },
        None => SegmentKind::Static,
    }
}

/// The parameter token contributed by a route name, if any. Non-bracketed
/// names contribute no token.
pub fn param_token(route_name: &str) -> Option<ParamToken> {
    match classify_segment(route_name) {
        SegmentKind::OptionalCatchAll(name) => Some(ParamToken::OptionalCatchAll(name)),
        SegmentKind::CatchAll(name) => Some(ParamToken::CatchAll(name)),
        SegmentKind::Param(name) => Some(ParamToken::Plain(name)),
        SegmentKind::Static => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignored() {
        assert!(is_ignored(".git"));
        assert!(is_ignored("_components"));
        assert!(is_ignored("api"));
        assert!(is_ignored("node_modules"));
        assert!(!is_ignored("blog"));
        assert!(!is_ignored("page.tsx"));
    }

    #[test]
    fn test_is_page_marker() {
        assert!(is_page_marker("page.tsx"));
        assert!(is_page_marker("page.ts"));
        assert!(is_page_marker("page.jsx"));
        assert!(is_page_marker("page.js"));
        assert!(!is_page_marker("layout.tsx"));
        assert!(!is_page_marker("page.mdx"));
    }

    #[test]
    fn test_route_group_detection() {
        assert!(is_route_group("(marketing)"));
        assert!(!is_route_group("marketing"));
        assert!(!is_route_group("[id]"));
        assert_eq!(route_name("(marketing)"), "marketing");
        assert_eq!(route_name("blog"), "blog");
    }

    #[test]
    fn test_classify_static() {
        assert_eq!(classify_segment("about"), SegmentKind::Static);
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment("[id]"), SegmentKind::Param("id".into()));
    }

    #[test]
    fn test_classify_catch_all() {
        assert_eq!(
            classify_segment("[...slug]"),
            SegmentKind::CatchAll("slug".into())
        );
    }

    #[test]
    fn test_classify_optional_catch_all() {
        assert_eq!(
            classify_segment("[[...slug]]"),
            SegmentKind::OptionalCatchAll("slug".into())
        );
    }

    #[test]
    fn test_double_bracket_without_spread_falls_through() {
        // [[foo]] is not an optional catch-all; it parses as a plain
        // parameter named "[foo]", matching the marker syntax exactly.
        assert_eq!(
            classify_segment("[[foo]]"),
            SegmentKind::Param("[foo]".into())
        );
    }

    #[test]
    fn test_param_token_extraction() {
        assert_eq!(param_token("blog"), None);
        assert_eq!(param_token("[id]"), Some(ParamToken::Plain("id".into())));
        assert_eq!(
            param_token("[...slug]"),
            Some(ParamToken::CatchAll("slug".into()))
        );
        assert_eq!(
            param_token("[[...slug]]"),
            Some(ParamToken::OptionalCatchAll("slug".into()))
        );
    }
}
