//! Path-matching trie.
//!
//! One [`Node`] per path position: static children are keyed by literal
//! segment name, and a single wildcard child per node serves both named
//! and catch-all wildcards. Lookup walks one request segment at a time, so
//! resolution cost grows with path length, not with route count.
//!
//! # Matching rules
//!
//! - A node's wildcard child, when present, always wins over any static
//!   sibling at the same position, even when the request segment would
//!   match a static name exactly. Static children are only consulted at
//!   nodes without a wildcard child.
//! - Both wildcard kinds share the one wildcard slot per node, so sibling
//!   wildcard patterns with different names reuse whichever child was
//!   created first; the first-registered name wins for parameter naming at
//!   that position.
//! - A mounted sub-handler absorbs every path at or below its node: lookup
//!   stops there, and registration at or below it fails.
//!
//! These are structural properties of the trie shape, not tie-break
//! heuristics; there is no backtracking and no priority scoring.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use waymark_core::{DynHandler, Method, PathParams, RouteError};

use crate::leaf::Leaf;
use crate::parse::{Segment, SegmentKind, parse_pattern, split_path};

/// Buffers kept around for catch-all value assembly.
const POOL_LIMIT: usize = 48;

/// Pool of reusable scratch buffers.
///
/// Catch-all lookup joins the matched tail segments into one
/// slash-prefixed string; buffers are checked out for the duration of a
/// single join and returned cleared, so concurrent lookups reuse grown
/// allocations instead of growing from empty every time. An empty pool
/// hands out a fresh buffer.
struct BufferPool {
    buffers: Mutex<Vec<String>>,
}

impl BufferPool {
    fn new() -> Self {
        Self {
            buffers: Mutex::new(Vec::new()),
        }
    }

    fn acquire(&self) -> String {
        self.buffers.lock().pop().unwrap_or_default()
    }

    fn release(&self, mut buffer: String) {
        buffer.clear();
        let mut buffers = self.buffers.lock();
        if buffers.len() < POOL_LIMIT {
            buffers.push(buffer);
        }
    }
}

/// One position in the path trie.
struct Node {
    segment: Segment,

    children: Option<HashMap<String, Node>>,
    wildcard: Option<Box<Node>>,
    leaf: Option<Leaf>,

    mount: Option<DynHandler>,
}

impl Node {
    fn new(segment: Segment) -> Self {
        Self {
            segment,
            children: None,
            wildcard: None,
            leaf: None,
            mount: None,
        }
    }
}

/// Path-matching trie over registered routes.
///
/// Build the trie single-threaded during startup; afterwards it is
/// read-only and safe to share across concurrently handled requests.
/// Lookup never writes to trie structure.
pub struct Trie {
    root: Node,
    pool: BufferPool,
}

impl Trie {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::new(Segment::root()),
            pool: BufferPool::new(),
        }
    }

    /// Walks to the node for `pattern`, creating nodes as needed.
    ///
    /// A catch-all segment ends the walk: pattern segments after it are
    /// unreachable and silently ignored.
    fn walk_insert(&mut self, pattern: &str) -> Result<&mut Node, RouteError> {
        let mut cursor = &mut self.root;

        for segment in parse_pattern(pattern) {
            // a mounted sub-handler swallows everything beneath it
            if cursor.mount.is_some() {
                return Err(RouteError::StructuralConflict);
            }

            match segment.kind() {
                SegmentKind::Param | SegmentKind::CatchAll => {
                    let is_tail = segment.kind() == SegmentKind::CatchAll;
                    cursor = &mut **cursor
                        .wildcard
                        .get_or_insert_with(|| Box::new(Node::new(segment)));
                    if is_tail {
                        break;
                    }
                }
                SegmentKind::Static => {
                    cursor = cursor
                        .children
                        .get_or_insert_with(HashMap::new)
                        .entry(segment.name().to_owned())
                        .or_insert_with(|| Node::new(segment));
                }
            }
        }

        Ok(cursor)
    }

    /// Walks the trie for a raw request path, accumulating parameters.
    fn walk_lookup(&self, path: &str) -> Option<(&Node, PathParams)> {
        let raw = split_path(path);
        let mut cursor = &self.root;
        let mut params = PathParams::new();

        for (index, &segment) in raw.iter().enumerate() {
            // a mounted sub-handler absorbs the remaining segments
            if cursor.mount.is_some() {
                break;
            }

            if let Some(wildcard) = cursor.wildcard.as_deref() {
                cursor = wildcard;
                if cursor.segment.kind() == SegmentKind::CatchAll {
                    params.insert(cursor.segment.name(), self.join_tail(&raw[index..]));
                    break;
                }
                params.insert(cursor.segment.name(), segment);
            } else if let Some(child) = cursor.children.as_ref().and_then(|c| c.get(segment)) {
                cursor = child;
            } else {
                return None;
            }
        }

        Some((cursor, params))
    }

    /// Joins tail segments into a slash-prefixed catch-all value.
    fn join_tail(&self, segments: &[&str]) -> String {
        let mut buffer = self.pool.acquire();
        for segment in segments {
            buffer.push('/');
            buffer.push_str(segment);
        }
        let value = buffer.clone();
        self.pool.release(buffer);
        value
    }

    /// Binds `handler` for `method` at `pattern`.
    ///
    /// Fails with [`RouteError::StructuralConflict`] when the pattern runs
    /// into or ends on a mounted sub-handler, and with
    /// [`RouteError::AlreadyBound`] when the method slot at the terminal
    /// node is occupied.
    pub fn add_handler(
        &mut self,
        method: Method,
        pattern: &str,
        handler: DynHandler,
    ) -> Result<(), RouteError> {
        let node = self.walk_insert(pattern)?;

        if node.mount.is_some() {
            return Err(RouteError::StructuralConflict);
        }

        node.leaf.get_or_insert_with(Leaf::new).set(method, handler)
    }

    /// Mounts `handler` as a sub-handler at `pattern`.
    ///
    /// Mounting requires a clean, previously-untouched node: any existing
    /// method table, wildcard child, static children, or mount at the
    /// terminal node fails with [`RouteError::StructuralConflict`]. The
    /// handler is stored as-is; stripping the mount prefix from request
    /// paths is the caller's concern.
    pub fn add_mount(&mut self, pattern: &str, handler: DynHandler) -> Result<(), RouteError> {
        let node = self.walk_insert(pattern)?;

        if node.leaf.is_some()
            || node.wildcard.is_some()
            || node.children.is_some()
            || node.mount.is_some()
        {
            return Err(RouteError::StructuralConflict);
        }

        node.mount = Some(handler);
        Ok(())
    }

    /// Resolves `method` + `path` to a handler and its path parameters.
    ///
    /// Returns the mounted sub-handler when the walk ends on or inside a
    /// mount, otherwise the terminal node's handler for `method`. A miss
    /// is `None`, never an error.
    #[must_use]
    pub fn get(&self, method: Method, path: &str) -> Option<(DynHandler, PathParams)> {
        let (node, params) = self.walk_lookup(path)?;

        if let Some(mount) = &node.mount {
            return Some((Arc::clone(mount), params));
        }

        let handler = node.leaf.as_ref()?.get(method)?;
        Some((Arc::clone(handler), params))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_pool_reuses_buffers() {
        let pool = BufferPool::new();
        let mut buffer = pool.acquire();
        buffer.push_str("/some/path");
        let capacity = buffer.capacity();
        pool.release(buffer);

        let reused = pool.acquire();
        assert!(reused.is_empty());
        assert_eq!(reused.capacity(), capacity);
    }

    #[test]
    fn test_buffer_pool_bounded() {
        let pool = BufferPool::new();
        let buffers: Vec<String> = (0..POOL_LIMIT + 10).map(|_| pool.acquire()).collect();
        for buffer in buffers {
            pool.release(buffer);
        }
        assert_eq!(pool.buffers.lock().len(), POOL_LIMIT);
    }
}
