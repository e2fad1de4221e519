//! Core types for the waymark router.
//!
//! This crate provides the collaborator-facing building blocks the routing
//! engine is written against:
//!
//! - [`Method`] — the closed set of HTTP methods a route can be bound to
//! - [`Request`] and [`Response`] — narrow HTTP message types
//! - [`Handler`] — the opaque, type-erased unit of request processing
//! - [`RequestContext`] and [`PathParams`] — per-request state threaded
//!   explicitly to handlers
//! - [`RouteError`] — registration failures
//!
//! # Design Principles
//!
//! - The router never inspects a handler beyond invoking it
//! - Per-request state is passed explicitly, never stashed in ambient
//!   process-wide storage
//! - Registration failures are `Result`s; lookup misses are not errors
//! - All types support `Send + Sync` so a built router can serve
//!   concurrent lookups

#![forbid(unsafe_code)]

mod context;
mod error;
mod handler;
mod method;
mod request;
mod response;

pub use context::{PathParams, RequestContext};
pub use error::RouteError;
pub use handler::{BoxFuture, DynHandler, Handler, handler_fn};
pub use method::Method;
pub use request::{Body, Headers, Request};
pub use response::{Response, StatusCode};
