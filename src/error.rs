//! Error types raised while registering routes and generating paths.
//!
//! Matching never fails: a request that matches nothing is reported as `None`
//! by [`Router::match_route`](crate::router::Router::match_route). Everything
//! here is a caller mistake that should surface at boot (registration) or at
//! the call site that builds a link (reverse routing).

use thiserror::Error;

/// Router configuration error
///
/// Returned by route registration and by reverse routing. A failed
/// registration never leaves partial state behind in the router.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The pattern uses the same placeholder name more than once
    ///
    /// `names` lists each repeated name once, in the order the repeats occur.
    #[error("Duplicate route parameters not allowed: {}", .names.join(", "))]
    DuplicateParameter {
        /// The rejected pattern
        pattern: String,
        /// Distinct duplicated parameter names
        names: Vec<String>,
    },
    /// The handler spec is not of the form `controller#action`
    #[error("Handler must be in 'controller#action' format, got '{handler}'")]
    InvalidHandlerFormat {
        /// The rejected handler spec
        handler: String,
    },
    /// No route is registered under the requested name
    #[error("No route found with name: {name}")]
    UnknownRouteName {
        /// The requested route name
        name: String,
    },
    /// Reverse routing was asked for a path without a value for a placeholder
    #[error("Missing parameter '{param}' for route '{route}'")]
    MissingParameter {
        /// The placeholder that had no value
        param: String,
        /// The route name passed to `path()`
        route: String,
    },
    /// The expression generated from the pattern was rejected by the regex engine
    #[error("Pattern '{pattern}' could not be compiled: {source}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}
