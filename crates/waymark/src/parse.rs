//! Path segmentation and pattern classification.
//!
//! Splitting applies to both route patterns and incoming request paths;
//! classification applies to patterns only. Request paths are matched
//! against already-classified trie structure and are never re-parsed for
//! `:`/`*` meaning.

use memchr::memchr_iter;

/// Kind of a parsed pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Matches only the literal segment text.
    Static,
    /// Matches exactly one segment, bound by name (`:name`).
    Param,
    /// Matches the remainder of the path, bound by name (`*name`).
    CatchAll,
}

/// One parsed component of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: String,
    kind: SegmentKind,
}

impl Segment {
    /// The segment for the path root: empty name, static.
    #[must_use]
    pub fn root() -> Self {
        Self {
            name: String::new(),
            kind: SegmentKind::Static,
        }
    }

    /// The segment's name: literal text for static segments, the wildcard
    /// name otherwise. Empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The segment's kind.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }
}

/// Splits a path on `/`.
///
/// The empty path and `"/"` both yield a single empty segment, standing
/// for the root. Otherwise a leading slash contributes no segment and a
/// single trailing slash is ignored, while interior empty segments from
/// doubled slashes are preserved as empty-named segments — `/a//b` and
/// `/a/b` are distinct paths.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() || path == "/" {
        return vec![""];
    }

    let mut split = Vec::new();
    let mut start = 0;
    for sep in memchr_iter(b'/', path.as_bytes()) {
        split.push(&path[start..sep]);
        start = sep + 1;
    }
    split.push(&path[start..]);

    // ignore leading slash
    if split.len() > 1 && split[0].is_empty() {
        split.remove(0);
    }

    // ignore trailing slash
    if split.len() > 1 && split.last().is_some_and(|s| s.is_empty()) {
        split.pop();
    }

    split
}

/// Parses a route pattern into classified segments.
#[must_use]
pub fn parse_pattern(pattern: &str) -> Vec<Segment> {
    split_path(pattern).into_iter().map(classify).collect()
}

/// Classifies a single raw pattern segment.
///
/// Segments of byte length 0 or 1 are always static, so a bare `:` or `*`
/// is a literal name rather than a malformed wildcard.
fn classify(raw: &str) -> Segment {
    if raw.len() <= 1 {
        return Segment {
            name: raw.to_owned(),
            kind: SegmentKind::Static,
        };
    }

    match raw.as_bytes()[0] {
        b':' => Segment {
            name: raw[1..].to_owned(),
            kind: SegmentKind::Param,
        },
        b'*' => Segment {
            name: raw[1..].to_owned(),
            kind: SegmentKind::CatchAll,
        },
        _ => Segment {
            name: raw.to_owned(),
            kind: SegmentKind::Static,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_root_forms() {
        assert_eq!(split_path(""), vec![""]);
        assert_eq!(split_path("/"), vec![""]);
    }

    #[test]
    fn test_split_trailing_slash_insensitive() {
        assert_eq!(split_path("/a/b"), vec!["a", "b"]);
        assert_eq!(split_path("/a/b/"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_preserves_interior_empty_segments() {
        assert_eq!(split_path("/a//b"), vec!["a", "", "b"]);
        assert_eq!(split_path("//"), vec![""]);
    }

    #[test]
    fn test_split_without_leading_slash() {
        assert_eq!(split_path("a/b"), vec!["a", "b"]);
        assert_eq!(split_path("hello/"), vec!["hello"]);
    }

    #[test]
    fn test_parse_classifies_each_kind() {
        let segments = parse_pattern("/foo/:bar/*world");
        assert_eq!(segments.len(), 3);

        assert_eq!(segments[0].name(), "foo");
        assert_eq!(segments[0].kind(), SegmentKind::Static);

        assert_eq!(segments[1].name(), "bar");
        assert_eq!(segments[1].kind(), SegmentKind::Param);

        assert_eq!(segments[2].name(), "world");
        assert_eq!(segments[2].kind(), SegmentKind::CatchAll);
    }

    #[test]
    fn test_parse_root() {
        let segments = parse_pattern("/");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].name(), "");
        assert_eq!(segments[0].kind(), SegmentKind::Static);
    }

    #[test]
    fn test_bare_marker_is_literal() {
        let segments = parse_pattern("/:");
        assert_eq!(segments[0].name(), ":");
        assert_eq!(segments[0].kind(), SegmentKind::Static);

        let segments = parse_pattern("/*");
        assert_eq!(segments[0].name(), "*");
        assert_eq!(segments[0].kind(), SegmentKind::Static);
    }

    #[test]
    fn test_marker_only_leads_when_first_byte() {
        let segments = parse_pattern("/a:b/c*d");
        assert_eq!(segments[0].name(), "a:b");
        assert_eq!(segments[0].kind(), SegmentKind::Static);
        assert_eq!(segments[1].name(), "c*d");
        assert_eq!(segments[1].kind(), SegmentKind::Static);
    }

    #[test]
    fn test_multibyte_single_char_is_static() {
        let segments = parse_pattern("/é");
        assert_eq!(segments[0].name(), "é");
        assert_eq!(segments[0].kind(), SegmentKind::Static);
    }
}
