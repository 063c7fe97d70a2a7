//! # trackroute
//!
//! **trackroute** maps an HTTP method and request path to a registered
//! controller/action target, extracts path parameters, and generates paths
//! back from route names (reverse routing).
//!
//! ## Overview
//!
//! Routes are declared with a pattern and a `controller#action` handler spec:
//!
//! ```text
//! GET  /                                   home#index
//! GET  /posts/{postId}                     posts#show
//! GET  /posts/{postId}/comments/{commentId} comments#show   (name: comment)
//! POST /login                              auth#submit
//! ```
//!
//! At request time the front controller asks the router for a match and uses
//! the returned target to pick a handler. Views and redirects ask the router
//! for a path by route name.
//!
//! ## Architecture
//!
//! - **[`router`]** - Pattern compilation, matching, named routes and reverse routing
//! - **[`routes_config`]** - Loading a route table from a YAML file
//! - **[`dispatcher`]** - Handler table keyed by controller/action target
//! - **[`error`]** - Registration and reverse-routing errors
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `trackroute` command-line tool
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Front as Front controller
//!     participant Router as Router
//!     participant Dispatcher as Dispatcher
//!     participant Handler as Handler
//!
//!     Client->>Front: GET /posts/42
//!     Front->>Router: match_route(GET, "/posts/42")
//!     Router->>Router: Scan GET routes in order
//!     alt No Route Match
//!         Router-->>Front: None
//!         Front-->>Client: 404 Not Found
//!     end
//!     Router-->>Front: RouteMatch<br/>(PostsController#show, {postId: "42"})
//!     Front->>Dispatcher: dispatch_match(route_match)
//!     Dispatcher->>Handler: handler(&route_match)
//!     Handler->>Router: path_for("home.index")
//!     Handler-->>Client: Response
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use trackroute::dispatcher::Dispatcher;
//! use trackroute::router::Router;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut router = Router::new();
//! router.get("/", "home#index", None)?;
//! router.get("/posts/{postId}", "posts#show", None)?;
//!
//! let mut dispatcher: Dispatcher<String> = Dispatcher::new();
//! dispatcher.register_handler("home#index", |_| "<h1>Home</h1>".to_string())?;
//! dispatcher.register_handler("posts#show", |m| {
//!     format!("post {}", m.get_path_param("postId").unwrap_or_default())
//! })?;
//!
//! let body = dispatcher.dispatch_str(&router, "GET", "/posts/42")?;
//! assert_eq!(body, "post 42");
//! assert_eq!(router.path_for("home.index")?, "/");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Registration takes `&mut self`; matching and path generation take `&self`
//! and never mutate the router. Each match returns its own bindings, so a
//! built router can be shared across threads behind an `Arc`.

pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod router;
pub mod routes_config;

pub use dispatcher::{DispatchError, Dispatcher};
pub use error::RouterError;
pub use router::{PathValues, Route, RouteMatch, Router, Target};
pub use routes_config::{load_router, RouteEntry, RoutesConfig};

/// Crate version, as published in Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
