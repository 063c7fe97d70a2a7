//! # Router Module
//!
//! Path matching and reverse routing for trackroute.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling route patterns (`/posts/{postId}`) into anchored matchers
//! - Matching incoming `(method, path)` pairs to registered routes
//! - Extracting path parameters from matched routes
//! - Generating paths back from route names and parameter values
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Registration**: At startup, each `get`/`post` call validates the
//!    pattern and handler spec, compiles the pattern into a regex such as
//!    `^/posts/([^/]+)$`, and indexes the route by method and by name.
//!
//! 2. **Matching**: For each incoming request, the routes registered for the
//!    request method are tried in registration order. The first match wins and
//!    is returned as a [`RouteMatch`] carrying its own parameter bindings.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trackroute::router::{PathValues, Router};
//!
//! # fn main() -> Result<(), trackroute::RouterError> {
//! let mut router = Router::new();
//! router.get("/", "home#index", None)?;
//! router.get("/posts/{postId}/comments/{commentId}", "comments#show", Some("comment"))?;
//!
//! if let Some(route_match) = router.match_route(&Method::GET, "/posts/42/comments/7") {
//!     println!("Target: {}", route_match.target());
//!     println!("Path params: {:?}", route_match.path_params);
//! }
//!
//! let url = router.path("comment", &PathValues::from([("postId", 1), ("commentId", 2)]))?;
//! assert_eq!(url, "/posts/1/comments/2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Performance
//!
//! Matching is a linear scan of one method's routes, O(n) in the number of
//! routes for that method. Parameter bindings live in a `SmallVec`, so routes
//! with up to [`MAX_INLINE_PARAMS`] placeholders match without a heap-allocated
//! parameter list.

mod core;
mod names;
pub mod pattern;
mod route;
#[cfg(test)]
mod tests;

pub use self::core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS, SUPPORTED_METHODS};
pub use names::{NamedRoutes, PathValues};
pub use pattern::PathMatcher;
pub use route::{Route, Target, CONTROLLER_SUFFIX, HANDLER_SEPARATOR};
