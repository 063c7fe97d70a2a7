//! Route pattern compilation.
//!
//! A pattern is a path template such as `/posts/{postId}/comments/{commentId}`.
//! Each `{name}` placeholder becomes a capture group matching one or more
//! non-slash characters; everything else is matched verbatim. The resulting
//! expression is anchored at both ends, so `/posts/{postId}` compiles to
//! `^/posts/([^/]+)$` and never matches `/posts/` or `/posts/42/extra`.

use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

use super::core::ParamVec;
use crate::error::RouterError;

/// Capture group substituted for every placeholder
const PARAM_GROUP: &str = "([^/]+)";

/// A lexical piece of a route pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Text matched verbatim
    Literal(&'a str),
    /// Placeholder body, without the braces
    Param(&'a str),
}

/// Split a pattern into literal runs and placeholders, left to right.
///
/// A placeholder is `{` followed by a non-empty body free of `/`, `{` and `}`,
/// closed by `}`. A brace that does not open a valid placeholder is literal text.
pub(crate) fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::with_capacity(pattern.matches('{').count() * 2 + 1);
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = pattern[cursor..].find('{') {
        let open = cursor + offset;
        let body_start = open + 1;
        let stop = pattern[body_start..]
            .find(['}', '{', '/'])
            .map(|i| body_start + i);

        match stop {
            Some(close) if close > body_start && pattern[close..].starts_with('}') => {
                if open > literal_start {
                    tokens.push(Token::Literal(&pattern[literal_start..open]));
                }
                tokens.push(Token::Param(&pattern[body_start..close]));
                cursor = close + 1;
                literal_start = cursor;
            }
            _ => cursor = body_start,
        }
    }

    if literal_start < pattern.len() {
        tokens.push(Token::Literal(&pattern[literal_start..]));
    }
    tokens
}

/// Ordered placeholder names of a pattern, duplicates included
#[must_use]
pub fn param_names(pattern: &str) -> Vec<&str> {
    tokenize(pattern)
        .into_iter()
        .filter_map(|token| match token {
            Token::Param(name) => Some(name),
            Token::Literal(_) => None,
        })
        .collect()
}

/// Names that occur more than once, each reported once in order of first repeat
#[must_use]
pub fn duplicate_names(names: &[&str]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut duplicates: Vec<String> = Vec::new();
    for name in names {
        if !seen.insert(*name) && !duplicates.iter().any(|d| d.as_str() == *name) {
            duplicates.push((*name).to_owned());
        }
    }
    duplicates
}

/// Compiled matcher for a single route pattern
///
/// Built once at registration and never re-derived. The parameter names are
/// stored as `Arc<str>` so every match can hand them out without copying.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl PathMatcher {
    /// Compile a pattern into an anchored matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] if the generated expression is
    /// rejected by the regex engine (e.g. it exceeds the engine's size limit).
    pub fn compile(pattern: &str) -> Result<Self, RouterError> {
        let tokens = tokenize(pattern);
        let mut expr = String::with_capacity(pattern.len() + tokens.len() * PARAM_GROUP.len() + 2);
        let mut param_names = Vec::new();

        expr.push('^');
        for token in &tokens {
            match token {
                Token::Literal(text) => expr.push_str(&regex::escape(text)),
                Token::Param(name) => {
                    expr.push_str(PARAM_GROUP);
                    param_names.push(Arc::from(*name));
                }
            }
        }
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|source| RouterError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        Ok(Self { regex, param_names })
    }

    /// The compiled expression, e.g. `^/posts/([^/]+)$`
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Placeholder names in pattern order
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    /// Whether the whole of `path` is accepted
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and zip the captured values with the parameter names.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<ParamVec> {
        let captures = self.regex.captures(path)?;
        Some(
            self.param_names
                .iter()
                .zip(captures.iter().skip(1))
                .filter_map(|(name, value)| {
                    value.map(|value| (Arc::clone(name), value.as_str().to_owned()))
                })
                .collect(),
        )
    }
}
