//! Named-route index and reverse routing.
//!
//! Every route gets a name at registration: the explicit one if given,
//! otherwise one derived from its target (`posts#show` → `posts.show`).
//! [`NamedRoutes::generate`] turns a name plus parameter values back into a
//! concrete path.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use super::pattern::{tokenize, Token};
use super::route::Route;
use crate::error::RouterError;

/// Parameter values for reverse routing
///
/// Values are stored in their `Display` form so integers and strings can be
/// mixed freely. Keys the pattern does not reference are ignored.
///
/// ```
/// use trackroute::router::PathValues;
///
/// let values = PathValues::from([("post", 1), ("comment", 2)]);
/// assert_eq!(values.get("post"), Some("1"));
///
/// let values = PathValues::new().with("id", 5).with("format", "json");
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathValues {
    values: HashMap<String, String>,
}

impl PathValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.values.insert(key.into(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for PathValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.insert(key, value);
        }
        values
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for PathValues {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Name → route index
#[derive(Debug, Clone, Default)]
pub struct NamedRoutes {
    index: HashMap<String, Arc<Route>>,
}

impl NamedRoutes {
    /// Insert or overwrite a name, returning the route it previously pointed to.
    pub fn insert(&mut self, name: String, route: Arc<Route>) -> Option<Arc<Route>> {
        self.index.insert(name, route)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Route>> {
        self.index.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Build the path for `name`, substituting each placeholder with its value.
    ///
    /// # Errors
    ///
    /// - [`RouterError::UnknownRouteName`] if `name` is not registered
    /// - [`RouterError::MissingParameter`] for the first placeholder, in
    ///   pattern order, that has no entry in `values`
    pub fn generate(&self, name: &str, values: &PathValues) -> Result<String, RouterError> {
        let Some(route) = self.get(name) else {
            return Err(RouterError::UnknownRouteName {
                name: name.to_owned(),
            });
        };

        let pattern = route.pattern();
        let mut path = String::with_capacity(pattern.len() + values.len() * 8);
        for token in tokenize(pattern) {
            match token {
                Token::Literal(text) => path.push_str(text),
                Token::Param(param) => {
                    let Some(value) = values.get(param) else {
                        return Err(RouterError::MissingParameter {
                            param: param.to_owned(),
                            route: name.to_owned(),
                        });
                    };
                    path.push_str(value);
                }
            }
        }
        Ok(path)
    }
}
