//! Per-request context.
//!
//! Dispatch constructs one [`RequestContext`] per request and threads it
//! explicitly to the handler invocation. There is no ambient process-wide
//! request state: everything a handler may read travels through this value.

use std::collections::HashMap;

/// Path parameters extracted during route lookup.
///
/// Maps each wildcard name to the text it matched. Created fresh per
/// lookup and owned by the caller afterwards; a lookup that matched no
/// wildcards produces an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    inner: HashMap<String, String>,
}

impl PathParams {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a wildcard name to matched text. A later write for the same
    /// name replaces the earlier one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(name.into(), value.into());
    }

    /// Get the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Get the value bound to `name`, or `""` when absent.
    ///
    /// Missing parameters are not an error condition for handlers, so this
    /// accessor never fails.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Iterate over all (name, value) bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no wildcard matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Per-request context threaded to handlers.
///
/// Carries the request id assigned by dispatch and the path parameters the
/// lookup bound. A mounted sub-router builds a fresh context for its own
/// dispatch, so inner parameter bindings shadow outer ones.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    request_id: u64,
    params: PathParams,
}

impl RequestContext {
    /// Create a context with no path parameters.
    #[must_use]
    pub fn new(request_id: u64) -> Self {
        Self {
            request_id,
            params: PathParams::new(),
        }
    }

    /// Create a context carrying the parameters a lookup produced.
    #[must_use]
    pub fn with_params(request_id: u64, params: PathParams) -> Self {
        Self { request_id, params }
    }

    /// Unique id of the request being handled, for tracing.
    #[must_use]
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// All path parameters bound during lookup.
    #[must_use]
    pub fn path_params(&self) -> &PathParams {
        &self.params
    }

    /// A single path parameter, or `""` when it was not bound.
    #[must_use]
    pub fn param(&self, name: &str) -> &str {
        self.params.value(name)
    }
}
