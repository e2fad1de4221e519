//! Collaborator-facing router.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use waymark_core::{
    BoxFuture, DynHandler, Handler, Method, Request, RequestContext, Response, RouteError,
    StatusCode, handler_fn,
};

use crate::middleware::Middleware;
use crate::trie::Trie;

/// A registered route, recorded for introspection.
///
/// The router keeps one entry per successful registration so startup code
/// can log or inspect the assembled route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Bound method; `None` for mounted sub-handlers.
    pub method: Option<Method>,
    /// The pattern as registered.
    pub pattern: String,
}

/// URL path router.
///
/// Routes are registered per HTTP verb against `/`-separated patterns:
/// `:name` matches exactly one segment and binds it, `*name` matches the
/// remainder of the path, and anything else matches literally. Whole
/// handlers (including other routers) can be mounted at a prefix with
/// [`Router::mount`].
///
/// Register every route during single-threaded startup, then share the
/// router for concurrent dispatch. Registration errors are returned, not
/// panicked; a route table is static configuration, so callers usually
/// abort startup on any of them.
///
/// # Example
///
/// ```
/// use waymark::{Method, Request, RequestContext, Response, RouteError, Router};
///
/// fn main() -> Result<(), RouteError> {
///     let mut router = Router::new();
///     router.get("/greet/:name", |ctx: &RequestContext, _req: &mut Request| {
///         let name = ctx.param("name").to_owned();
///         async move { Response::ok().body_text(name) }
///     })?;
///
///     let mut req = Request::new(Method::Get, "/greet/peter");
///     let response = futures_executor::block_on(router.dispatch(&mut req));
///     assert_eq!(response.body(), b"peter");
///     Ok(())
/// }
/// ```
pub struct Router {
    trie: Trie,
    middleware: Vec<Box<dyn Middleware>>,
    fallback: Option<DynHandler>,
    routes: Vec<RouteEntry>,
    next_request_id: AtomicU64,
}

impl Router {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            middleware: Vec::new(),
            fallback: None,
            routes: Vec::new(),
            next_request_id: AtomicU64::new(0),
        }
    }

    /// Binds an async closure for `method` at `pattern`.
    pub fn bind<H, Fut>(&mut self, method: Method, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind_handler(method, pattern, handler_fn(handler))
    }

    /// Binds an already type-erased handler for `method` at `pattern`.
    pub fn bind_handler(
        &mut self,
        method: Method,
        pattern: &str,
        handler: DynHandler,
    ) -> Result<(), RouteError> {
        self.trie.add_handler(method, pattern, handler)?;
        tracing::debug!(method = %method, pattern, "Route registered");
        self.routes.push(RouteEntry {
            method: Some(method),
            pattern: pattern.to_owned(),
        });
        Ok(())
    }

    /// Binds a GET handler at `pattern`.
    pub fn get<H, Fut>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind(Method::Get, pattern, handler)
    }

    /// Binds a POST handler at `pattern`.
    pub fn post<H, Fut>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind(Method::Post, pattern, handler)
    }

    /// Binds a PUT handler at `pattern`.
    pub fn put<H, Fut>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind(Method::Put, pattern, handler)
    }

    /// Binds a PATCH handler at `pattern`.
    pub fn patch<H, Fut>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind(Method::Patch, pattern, handler)
    }

    /// Binds a DELETE handler at `pattern`.
    pub fn delete<H, Fut>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind(Method::Delete, pattern, handler)
    }

    /// Binds a HEAD handler at `pattern`.
    pub fn head<H, Fut>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind(Method::Head, pattern, handler)
    }

    /// Binds an OPTIONS handler at `pattern`.
    pub fn options<H, Fut>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Fn(&RequestContext, &mut Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.bind(Method::Options, pattern, handler)
    }

    /// Mounts `handler` as a sub-handler at `pattern`.
    ///
    /// Every request at or below the pattern resolves to the mounted
    /// handler, with the pattern prefix stripped from the request path
    /// before delegation. A mounted router therefore matches its own
    /// routes relative to the mount point. Mounting requires a clean
    /// position: nothing may already be registered at or below it, and
    /// nothing can be registered there afterwards.
    pub fn mount<H>(&mut self, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Handler + 'static,
    {
        let stripped = StripPrefix {
            prefix: pattern.to_owned(),
            inner: Arc::new(handler),
        };
        self.trie.add_mount(pattern, Arc::new(stripped))?;
        tracing::debug!(pattern, "Sub-handler mounted");
        self.routes.push(RouteEntry {
            method: None,
            pattern: pattern.to_owned(),
        });
        Ok(())
    }

    /// Appends a middleware to the stack.
    ///
    /// Middleware wraps every matched handler in registration order (last
    /// added is outermost); the not-found fallback is never wrapped.
    pub fn layer<M>(&mut self, middleware: M)
    where
        M: Middleware + 'static,
    {
        self.middleware.push(Box::new(middleware));
    }

    /// Replaces the built-in not-found responder.
    pub fn not_found<H>(&mut self, handler: H)
    where
        H: Handler + 'static,
    {
        self.fallback = Some(Arc::new(handler));
    }

    /// All successful registrations, in order.
    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Resolves and invokes the handler for `req`.
    ///
    /// A miss is served by the configured fallback, or by a minimal 404
    /// response when none was configured.
    pub async fn dispatch(&self, req: &mut Request) -> Response {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        self.dispatch_with_id(request_id, req).await
    }

    async fn dispatch_with_id(&self, request_id: u64, req: &mut Request) -> Response {
        match self.trie.get(req.method(), req.path()) {
            Some((handler, params)) => {
                let ctx = RequestContext::with_params(request_id, params);
                let handler = self.chain(handler);
                handler.call(&ctx, req).await
            }
            None => {
                tracing::trace!(method = %req.method(), path = req.path(), "No route matched");
                let ctx = RequestContext::new(request_id);
                match &self.fallback {
                    Some(handler) => handler.call(&ctx, req).await,
                    None => default_not_found(),
                }
            }
        }
    }

    /// Folds the middleware stack around a resolved handler.
    fn chain(&self, handler: DynHandler) -> DynHandler {
        self.middleware
            .iter()
            .fold(handler, |next, middleware| middleware.wrap(next))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// A router is itself a handler, so routers nest via [`Router::mount`].
///
/// The inner dispatch builds its own request context, so parameters bound
/// by an inner route shadow whatever the outer lookup bound.
impl Handler for Router {
    fn call<'a>(
        &'a self,
        ctx: &'a RequestContext,
        req: &'a mut Request,
    ) -> BoxFuture<'a, Response> {
        Box::pin(self.dispatch_with_id(ctx.request_id(), req))
    }
}

/// Strips the mount prefix from the request path before delegating.
///
/// A request whose path does not literally start with the prefix (possible
/// when the mount pattern contains wildcard segments) is answered with the
/// built-in 404 rather than delegated with a wrong path.
struct StripPrefix {
    prefix: String,
    inner: DynHandler,
}

impl Handler for StripPrefix {
    fn call<'a>(
        &'a self,
        ctx: &'a RequestContext,
        req: &'a mut Request,
    ) -> BoxFuture<'a, Response> {
        match req.path().strip_prefix(&self.prefix).map(str::to_owned) {
            Some(rest) => {
                req.set_path(rest);
                self.inner.call(ctx, req)
            }
            None => Box::pin(async { default_not_found() }),
        }
    }
}

fn default_not_found() -> Response {
    Response::new(StatusCode::NOT_FOUND).body_text("404 - page not found")
}
