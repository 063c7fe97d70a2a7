//! # CLI Module
//!
//! Command-line access to a route table, mostly for checking a routes file
//! while writing it.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Print every route with its name and target:
//!
//! ```bash
//! trackroute --routes config/routes.yaml routes
//! ```
//!
//! ### `match`
//!
//! Match a request and print the result as JSON:
//!
//! ```bash
//! trackroute match GET /posts/42
//! ```
//!
//! Exits with an error when no route matches.
//!
//! ### `path`
//!
//! Generate a path from a route name and `key=value` parameters:
//!
//! ```bash
//! trackroute path comment_show postId=42 commentId=7
//! ```
//!
//! ## Options
//!
//! - `--routes <FILE>` - Route table (default `config/routes.yaml`, env `TRACKROUTE_ROUTES`)

mod commands;


pub use commands::{render_match, render_path, render_routes, run_cli, Cli, Commands};
