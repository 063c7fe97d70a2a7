//! Router core: registration, matching and reverse routing.

use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::names::{NamedRoutes, PathValues};
use super::pattern::{duplicate_names, param_names, PathMatcher};
use super::route::{Route, Target};
use crate::error::RouterError;

/// Maximum number of path parameters before heap allocation.
/// Route patterns rarely carry more than a handful of placeholders.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Methods routes can be registered under, in the order they are listed.
pub static SUPPORTED_METHODS: [Method; 2] = [Method::GET, Method::POST];

/// Matched path parameters, in pattern order.
///
/// Names are `Arc<str>` shared with the route's matcher; values are the
/// per-request strings taken from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path to a route
///
/// Independent of the router: the route is shared, the bindings belong to
/// this match alone.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route
    pub route: Arc<Route>,
    /// Path parameters extracted from the URL (e.g., `{id}` → `("id", "123")`)
    pub path_params: ParamVec,
}

impl RouteMatch {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to a HashMap
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        self.route.target()
    }

    #[must_use]
    pub fn controller(&self) -> &str {
        self.route.controller()
    }

    #[must_use]
    pub fn action(&self) -> &str {
        self.route.action()
    }
}

/// Router that matches HTTP requests to controller/action targets
///
/// Routes are kept per method in registration order; the first route whose
/// pattern accepts the path wins. Every route is also indexed by name for
/// reverse routing.
///
/// The router is built once (`&mut self` registration) and then only read,
/// so it can be shared between threads behind an `Arc`.
///
/// ```
/// use trackroute::router::{PathValues, Router};
///
/// # fn main() -> Result<(), trackroute::RouterError> {
/// let mut router = Router::new();
/// router.get("/posts/{postId}", "posts#show", None)?;
///
/// let matched = router.match_method_str("GET", "/posts/42").unwrap();
/// assert_eq!(matched.controller(), "PostsController");
/// assert_eq!(matched.get_path_param("postId"), Some("42"));
///
/// let path = router.path("posts.show", &PathValues::from([("postId", 42)]))?;
/// assert_eq!(path, "/posts/42");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: HashMap<Method, Vec<Arc<Route>>>,
    names: NamedRoutes,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GET route.
    ///
    /// `handler` is a `controller#action` spec. Without `name` the route is
    /// named after its target (`posts#show` → `posts.show`).
    ///
    /// # Errors
    ///
    /// See [`RouterError`]; the router is unchanged on error.
    pub fn get(
        &mut self,
        pattern: &str,
        handler: &str,
        name: Option<&str>,
    ) -> Result<(), RouterError> {
        self.add_route(Method::GET, pattern, handler, name)
    }

    /// Register a POST route. Same rules as [`Router::get`].
    ///
    /// # Errors
    ///
    /// See [`RouterError`]; the router is unchanged on error.
    pub fn post(
        &mut self,
        pattern: &str,
        handler: &str,
        name: Option<&str>,
    ) -> Result<(), RouterError> {
        self.add_route(Method::POST, pattern, handler, name)
    }

    fn add_route(
        &mut self,
        method: Method,
        pattern: &str,
        handler: &str,
        name: Option<&str>,
    ) -> Result<(), RouterError> {
        // Validate everything before touching the tables
        let duplicates = duplicate_names(&param_names(pattern));
        if !duplicates.is_empty() {
            return Err(RouterError::DuplicateParameter {
                pattern: pattern.to_owned(),
                names: duplicates,
            });
        }
        let target = Target::parse(handler)?;
        let matcher = PathMatcher::compile(pattern)?;

        let name = match name {
            Some(name) => name.to_owned(),
            None => target.default_route_name(),
        };
        let route = Route::new(method.clone(), pattern, matcher, target, name.clone());
        let route = Arc::new(route);

        self.routes
            .entry(method)
            .or_default()
            .push(Arc::clone(&route));

        debug!(
            method = %route.method(),
            pattern = %route.pattern(),
            regex = %route.regex_pattern(),
            route_name = %name,
            handler = %route.target(),
            "Route registered"
        );

        if let Some(previous) = self.names.insert(name, Arc::clone(&route)) {
            warn!(
                route_name = %route.name(),
                previous_method = %previous.method(),
                previous_pattern = %previous.pattern(),
                method = %route.method(),
                pattern = %route.pattern(),
                "Route name already registered; the later route replaces it"
            );
        }

        Ok(())
    }

    /// Match a request against the routes registered for `method`.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the first route, in registration order, whose pattern accepts `path`
    /// * `None` - no route matched (results in 404)
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        let match_start = Instant::now();
        let bucket = self.routes.get(method).map_or(&[][..], Vec::as_slice);

        let result = bucket.iter().find_map(|route| {
            let path_params = route.matcher().captures(path)?;
            Some(RouteMatch {
                route: Arc::clone(route),
                path_params,
            })
        });
        let duration_us = match_start.elapsed().as_micros();

        match &result {
            Some(matched) => debug!(
                method = %method,
                path = %path,
                route_name = %matched.route.name(),
                handler = %matched.route.target(),
                route_pattern = %matched.route.pattern(),
                path_params = ?matched.path_params,
                duration_us,
                "Route matched"
            ),
            None => debug!(
                method = %method,
                path = %path,
                candidates = bucket.len(),
                duration_us,
                "No route matched"
            ),
        }

        result
    }

    /// Like [`Router::match_route`], taking the method as a string.
    ///
    /// Methods are case-sensitive (`get` is not `GET`); a string that is not
    /// a valid method token simply matches nothing.
    #[must_use]
    pub fn match_method_str(&self, method: &str, path: &str) -> Option<RouteMatch> {
        let method = Method::from_bytes(method.as_bytes()).ok()?;
        self.match_route(&method, path)
    }

    /// Generate the path of the route registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RouterError::UnknownRouteName`] or [`RouterError::MissingParameter`].
    pub fn path(&self, name: &str, values: &PathValues) -> Result<String, RouterError> {
        self.names.generate(name, values)
    }

    /// Path of a route without placeholders.
    ///
    /// # Errors
    ///
    /// [`RouterError::UnknownRouteName`], or [`RouterError::MissingParameter`]
    /// if the route does have placeholders.
    pub fn path_for(&self, name: &str) -> Result<String, RouterError> {
        self.path(name, &PathValues::new())
    }

    #[must_use]
    pub fn route_by_name(&self, name: &str) -> Option<&Arc<Route>> {
        self.names.get(name)
    }

    #[must_use]
    pub fn named_routes(&self) -> &NamedRoutes {
        &self.names
    }

    /// All routes, grouped by method (GET then POST) in registration order
    pub fn routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        SUPPORTED_METHODS
            .iter()
            .filter_map(|method| self.routes.get(method))
            .flatten()
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Log the routing table at `info`.
    pub fn dump_routes(&self) {
        info!(
            routes_count = self.len(),
            names_count = self.names.len(),
            "Routing table"
        );
        for route in self.routes() {
            info!(
                method = %route.method(),
                pattern = %route.pattern(),
                route_name = %route.name(),
                handler = %route.target(),
                "Route"
            );
        }
    }
}
