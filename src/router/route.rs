//! Registered routes and the controller/action targets they resolve to.
//!
//! A handler spec such as `staticPages#now` is parsed once into a [`Target`]
//! (`StaticPagesController`, `now`). Only an ASCII first letter changes case,
//! so the controller token round-trips through the default route name.

use http::Method;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::pattern::PathMatcher;
use crate::error::RouterError;

/// Separator between the controller and action tokens of a handler spec
pub const HANDLER_SEPARATOR: char = '#';

/// Suffix appended to the capitalised controller token
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Controller/action pair a route resolves to
///
/// `posts#show` parses to controller `PostsController`, action `show`.
/// Dispatch looks handlers up by this value rather than by building
/// names at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    controller: String,
    action: String,
}

impl Target {
    /// Build a target from already-resolved identifiers.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Parse a `controller#action` handler spec.
    ///
    /// The spec is split at the first `#`; everything after it is the action.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidHandlerFormat`] if there is no `#` or either side is empty.
    pub fn parse(handler: &str) -> Result<Self, RouterError> {
        match handler.split_once(HANDLER_SEPARATOR) {
            Some((controller, action)) if !controller.is_empty() && !action.is_empty() => {
                let mut name = upper_first(controller);
                name.push_str(CONTROLLER_SUFFIX);
                Ok(Self::new(name, action))
            }
            _ => Err(RouterError::InvalidHandlerFormat {
                handler: handler.to_owned(),
            }),
        }
    }

    /// Controller identifier, e.g. `PostsController`
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Action identifier, e.g. `show`
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Route name used when none is given at registration.
    ///
    /// `StaticPagesController` + `now` gives `staticPages.now`.
    #[must_use]
    pub fn default_route_name(&self) -> String {
        let base = self
            .controller
            .strip_suffix(CONTROLLER_SUFFIX)
            .unwrap_or(&self.controller);
        lower_first(&format!("{base}.{}", self.action))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

fn upper_first(s: &str) -> String {
    let mut out = s.to_owned();
    // None when the first char is multi-byte, which is never ASCII
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

fn lower_first(s: &str) -> String {
    let mut out = s.to_owned();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_lowercase();
    }
    out
}

/// A registered route
///
/// Immutable once registered: matching never writes to it. The bindings of a
/// particular match live in [`RouteMatch`](super::RouteMatch).
#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    pattern: String,
    matcher: PathMatcher,
    target: Target,
    name: String,
}

impl Route {
    pub(crate) fn new(
        method: Method,
        pattern: &str,
        matcher: PathMatcher,
        target: Target,
        name: String,
    ) -> Self {
        Self {
            method,
            pattern: pattern.to_owned(),
            matcher,
            target,
            name,
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The pattern as registered, e.g. `/posts/{postId}`
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// Source of the compiled matcher, e.g. `^/posts/([^/]+)$`
    #[must_use]
    pub fn regex_pattern(&self) -> &str {
        self.matcher.as_str()
    }

    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        self.matcher.param_names()
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn controller(&self) -> &str {
        self.target.controller()
    }

    #[must_use]
    pub fn action(&self) -> &str {
        self.target.action()
    }

    /// Name this route was registered under in the named-route index
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
