//! # Routes Configuration
//!
//! Loads a route table from YAML and registers it on a fresh [`Router`].
//!
//! ```yaml
//! routes:
//!   - method: GET
//!     pattern: /
//!     handler: home#index
//!   - method: GET
//!     pattern: /posts/{postId}
//!     handler: posts#show
//!   - method: POST
//!     pattern: /login
//!     handler: auth#submit
//!     name: login
//! ```
//!
//! Entries are registered in file order, which is also their match priority.
//! The method is case-insensitive; only `GET` and `POST` are accepted.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::router::Router;

/// One route declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// `GET` or `POST`
    pub method: String,
    /// Route pattern, e.g. `/posts/{postId}`
    pub pattern: String,
    /// `controller#action` handler spec
    pub handler: String,
    /// Explicit route name; derived from the handler when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A route table as read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RoutesConfig {
    /// Read and parse a YAML route table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid route table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read routes file: {display}"))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse routes file: {display}"))
    }

    /// Parse a YAML route table.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not describe a route table.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: RoutesConfig = serde_yaml::from_str(contents).context("Invalid routes YAML")?;
        Ok(config)
    }

    /// Register every entry, in order, on a new router.
    ///
    /// # Errors
    ///
    /// Fails on the first entry with an unsupported method or a registration
    /// error; the error names the entry's position and pattern.
    pub fn build_router(&self) -> Result<Router> {
        let mut router = Router::new();
        for (index, entry) in self.routes.iter().enumerate() {
            let name = entry.name.as_deref();
            let registered = match entry.method.to_ascii_uppercase().as_str() {
                "GET" => router.get(&entry.pattern, &entry.handler, name),
                "POST" => router.post(&entry.pattern, &entry.handler, name),
                other => bail!(
                    "route #{index} ({}): unsupported method '{other}', expected GET or POST",
                    entry.pattern
                ),
            };
            registered.with_context(|| {
                format!("route #{index} ({} {})", entry.method, entry.pattern)
            })?;
        }

        info!(
            routes_count = router.len(),
            names_count = router.named_routes().len(),
            "Routing table loaded"
        );
        Ok(router)
    }
}

/// Read a YAML route table and build the router it describes.
///
/// # Errors
///
/// See [`RoutesConfig::from_path`] and [`RoutesConfig::build_router`].
pub fn load_router(path: impl AsRef<Path>) -> Result<Router> {
    RoutesConfig::from_path(path)?.build_router()
}
