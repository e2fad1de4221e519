//! Trie-based URL path router.
//!
//! Resolves an incoming (method, path) pair to a registered handler and
//! extracts named path parameters, in time proportional to path segment
//! count rather than route count.
//!
//! # Pattern syntax
//!
//! - `/users/list` — static segments match their literal text
//! - `/users/:id` — `:name` matches exactly one segment and binds it
//! - `/files/*path` — `*name` matches the remainder of the path, bound as
//!   a single slash-prefixed string; it must be the last meaningful
//!   segment
//! - `` / `/` — the root
//!
//! A segment of length 0 or 1 is always literal, so a bare `:` or `*`
//! names itself.
//!
//! # Matching precedence
//!
//! Each trie node has at most one wildcard child, shared by both wildcard
//! kinds. When present it always wins over static siblings at the same
//! position, even on an exact static match; and sibling wildcard patterns
//! reuse the first-registered wildcard name at that position. There is no
//! backtracking and no priority scoring — see [`Trie`] for the full rules.
//!
//! # Features
//!
//! - Per-verb registration over a closed method set, one handler per
//!   (method, position)
//! - Sub-handler mounting with prefix stripping ([`Router::mount`]),
//!   including whole routers
//! - Ordered middleware wrapping of matched handlers
//! - Configurable not-found fallback
//! - Lookup is read-only and safe under concurrent dispatch

#![warn(unsafe_code)]

mod leaf;
mod middleware;
mod parse;
mod router;
mod trie;

pub use middleware::{AddResponseHeader, Middleware};
pub use parse::{Segment, SegmentKind, parse_pattern, split_path};
pub use router::{RouteEntry, Router};
pub use trie::Trie;

// Re-export the core types handlers are written against
pub use waymark_core::{
    Body, BoxFuture, DynHandler, Handler, Headers, Method, PathParams, Request, RequestContext,
    Response, RouteError, StatusCode, handler_fn,
};
