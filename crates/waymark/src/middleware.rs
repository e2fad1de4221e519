//! Middleware: ordered wrapping of resolved handlers.

use std::sync::Arc;

use waymark_core::{BoxFuture, DynHandler, Handler, Request, RequestContext, Response};

/// Wraps a resolved handler with additional behavior.
///
/// The router folds its middleware stack around the matched handler at
/// dispatch time, in registration order: the last middleware added becomes
/// the outermost wrapper. Only matched handlers are wrapped; the not-found
/// fallback runs bare.
///
/// Any `Fn(DynHandler) -> DynHandler` closure is a middleware:
///
/// ```ignore
/// router.layer(|next: DynHandler| -> DynHandler {
///     Arc::new(MyWrapper { next })
/// });
/// ```
pub trait Middleware: Send + Sync {
    /// Returns a handler that decorates `next`.
    fn wrap(&self, next: DynHandler) -> DynHandler;
}

impl<F> Middleware for F
where
    F: Fn(DynHandler) -> DynHandler + Send + Sync,
{
    fn wrap(&self, next: DynHandler) -> DynHandler {
        self(next)
    }
}

/// Middleware that sets a fixed header on every matched response.
pub struct AddResponseHeader {
    name: String,
    value: Vec<u8>,
}

impl AddResponseHeader {
    /// Create the middleware from a header name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Middleware for AddResponseHeader {
    fn wrap(&self, next: DynHandler) -> DynHandler {
        Arc::new(AddHeader {
            name: self.name.clone(),
            value: self.value.clone(),
            next,
        })
    }
}

struct AddHeader {
    name: String,
    value: Vec<u8>,
    next: DynHandler,
}

impl Handler for AddHeader {
    fn call<'a>(
        &'a self,
        ctx: &'a RequestContext,
        req: &'a mut Request,
    ) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            let mut response = self.next.call(ctx, req).await;
            response
                .headers_mut()
                .insert(self.name.clone(), self.value.clone());
            response
        })
    }
}
