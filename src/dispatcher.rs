//! # Dispatcher Module
//!
//! Resolves a matched route to a handler through an explicit table keyed by
//! [`Target`] (controller + action).
//!
//! ## Overview
//!
//! The router only says *which* target a request is for. The dispatcher owns
//! the mapping from that target to code:
//!
//! - Handlers are registered at startup, either by `controller#action` spec
//!   or by an already-built [`Target`]
//! - Dispatch matches the request, looks the target up and calls the handler
//! - A request with no route and a route with no handler are distinct errors
//!   so the caller can answer 404 and 500 respectively
//!
//! ## Handler Registration
//!
//! ```rust
//! use trackroute::dispatcher::Dispatcher;
//! use trackroute::router::Router;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut router = Router::new();
//! router.get("/login", "auth#form", None)?;
//! router.post("/login", "auth#submit", None)?;
//!
//! let mut dispatcher: Dispatcher<u16> = Dispatcher::new();
//! dispatcher.register_handler("auth#form", |_| 200)?;
//! dispatcher.register_handler("auth#submit", |_| 303)?;
//!
//! assert_eq!(dispatcher.dispatch_str(&router, "POST", "/login")?, 303);
//! # Ok(())
//! # }
//! ```

use http::Method;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::RouterError;
use crate::router::{RouteMatch, Router, Target};

/// Handler invoked with the match that selected it
pub type Handler<R> = Box<dyn Fn(&RouteMatch) -> R + Send + Sync>;

/// Dispatch failure
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No route accepts the request (answer 404)
    #[error("No route matches {method} {path}")]
    NoRoute {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },
    /// A route matched but nothing is registered for its target (answer 500)
    #[error("No handler registered for {controller}#{action}")]
    HandlerNotFound {
        /// Controller identifier of the matched route
        controller: String,
        /// Action identifier of the matched route
        action: String,
    },
}

/// Handler table keyed by controller/action target
pub struct Dispatcher<R> {
    handlers: HashMap<Target, Handler<R>>,
}

impl<R> Default for Dispatcher<R> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<R> std::fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("targets", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<R> Dispatcher<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `target`, replacing any existing one.
    pub fn register<F>(&mut self, target: Target, handler: F)
    where
        F: Fn(&RouteMatch) -> R + Send + Sync + 'static,
    {
        debug!(handler = %target, "Handler registered");
        let label = target.to_string();
        if self.handlers.insert(target, Box::new(handler)).is_some() {
            warn!(handler = %label, "Handler replaced an earlier registration");
        }
    }

    /// Register a handler by `controller#action` spec, the same form used for routes.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidHandlerFormat`] if the spec is malformed.
    pub fn register_handler<F>(&mut self, handler_spec: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn(&RouteMatch) -> R + Send + Sync + 'static,
    {
        let target = Target::parse(handler_spec)?;
        self.register(target, handler);
        Ok(())
    }

    #[must_use]
    pub fn has_handler(&self, target: &Target) -> bool {
        self.handlers.contains_key(target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Targets of `router` that have no handler here, in route order
    #[must_use]
    pub fn unhandled_targets<'r>(&self, router: &'r Router) -> Vec<&'r Target> {
        let mut missing: Vec<&Target> = Vec::new();
        for route in router.routes() {
            let target = route.target();
            if !self.has_handler(target) && !missing.contains(&target) {
                missing.push(target);
            }
        }
        missing
    }

    /// Invoke the handler for an existing match.
    ///
    /// # Errors
    ///
    /// [`DispatchError::HandlerNotFound`] if no handler is registered for the target.
    pub fn dispatch_match(&self, route_match: &RouteMatch) -> Result<R, DispatchError> {
        let target = route_match.target();
        let Some(handler) = self.handlers.get(target) else {
            warn!(handler = %target, route_name = %route_match.route.name(), "Handler not found");
            return Err(DispatchError::HandlerNotFound {
                controller: target.controller().to_owned(),
                action: target.action().to_owned(),
            });
        };
        Ok(handler(route_match))
    }

    /// Match a request against `router` and invoke the selected handler.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoRoute`] or [`DispatchError::HandlerNotFound`].
    pub fn dispatch(
        &self,
        router: &Router,
        method: &Method,
        path: &str,
    ) -> Result<R, DispatchError> {
        let route_match = router
            .match_route(method, path)
            .ok_or_else(|| DispatchError::NoRoute {
                method: method.to_string(),
                path: path.to_owned(),
            })?;
        self.dispatch_match(&route_match)
    }

    /// [`Dispatcher::dispatch`] with the method given as a string.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoRoute`] (including for unparseable methods) or
    /// [`DispatchError::HandlerNotFound`].
    pub fn dispatch_str(
        &self,
        router: &Router,
        method: &str,
        path: &str,
    ) -> Result<R, DispatchError> {
        let route_match = router
            .match_method_str(method, path)
            .ok_or_else(|| DispatchError::NoRoute {
                method: method.to_owned(),
                path: path.to_owned(),
            })?;
        self.dispatch_match(&route_match)
    }
}
