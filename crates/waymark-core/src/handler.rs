//! Handler abstraction.
//!
//! The router stores handlers as type-erased [`DynHandler`] references and
//! treats them as opaque: it never inspects one beyond invoking it. Any
//! value implementing [`Handler`] qualifies — plain async closures via
//! [`handler_fn`], or whole routers mounted inside other routers.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::context::RequestContext;
use crate::request::Request;
use crate::response::Response;

/// Boxed future returned by handler invocations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A request handler.
pub trait Handler: Send + Sync {
    /// Process a request and produce a response.
    ///
    /// The context and request are borrowed for the duration of the call;
    /// the returned future may hold onto both.
    fn call<'a>(
        &'a self,
        ctx: &'a RequestContext,
        req: &'a mut Request,
    ) -> BoxFuture<'a, Response>;
}

/// Shared, type-erased handler reference.
pub type DynHandler = Arc<dyn Handler>;

impl<T: Handler + ?Sized> Handler for Arc<T> {
    fn call<'a>(
        &'a self,
        ctx: &'a RequestContext,
        req: &'a mut Request,
    ) -> BoxFuture<'a, Response> {
        (**self).call(ctx, req)
    }
}

/// Wraps an async closure as a shared [`DynHandler`].
///
/// The closure receives the request context and request by reference and
/// returns an owned future, so any borrowed data must be captured before
/// the async block:
///
/// ```
/// use waymark_core::{Request, RequestContext, Response, handler_fn};
///
/// let handler = handler_fn(|ctx: &RequestContext, _req: &mut Request| {
///     let user = ctx.param("user").to_owned();
///     async move { Response::ok().body_text(user) }
/// });
/// ```
pub fn handler_fn<H, Fut>(handler: H) -> DynHandler
where
    H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(FnHandler(handler))
}

struct FnHandler<H>(H);

impl<H, Fut> Handler for FnHandler<H>
where
    H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call<'a>(
        &'a self,
        ctx: &'a RequestContext,
        req: &'a mut Request,
    ) -> BoxFuture<'a, Response> {
        Box::pin((self.0)(ctx, req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::response::StatusCode;

    #[test]
    fn test_handler_fn_invocation() {
        let handler = handler_fn(|_ctx: &RequestContext, _req: &mut Request| async {
            Response::ok().body_text("hello")
        });

        let ctx = RequestContext::new(1);
        let mut req = Request::new(Method::Get, "/");
        let response = futures_executor::block_on(handler.call(&ctx, &mut req));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"hello");
    }

    #[test]
    fn test_handler_reads_context_and_request() {
        let handler = handler_fn(|ctx: &RequestContext, req: &mut Request| {
            let text = format!("{}:{}", req.path(), ctx.param("name"));
            async move { Response::ok().body_text(text) }
        });

        let mut params = crate::context::PathParams::new();
        params.insert("name", "peter");
        let ctx = RequestContext::with_params(1, params);
        let mut req = Request::new(Method::Get, "/greet/peter");
        let response = futures_executor::block_on(handler.call(&ctx, &mut req));
        assert_eq!(response.body(), b"/greet/peter:peter");
    }

    #[test]
    fn test_arc_of_handler_is_a_handler() {
        let inner = handler_fn(|_ctx: &RequestContext, _req: &mut Request| async {
            Response::ok()
        });
        let shared: DynHandler = Arc::new(inner);

        let ctx = RequestContext::new(1);
        let mut req = Request::new(Method::Get, "/");
        let response = futures_executor::block_on(shared.call(&ctx, &mut req));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
