use super::pattern::{duplicate_names, param_names, tokenize, Token};
use super::{PathMatcher, PathValues, Router, Target};
use crate::error::RouterError;

#[test]
fn test_root_path() {
    let matcher = PathMatcher::compile("/").unwrap();
    assert_eq!(matcher.as_str(), "^/$");
    assert!(matcher.is_match("/"));
    assert!(!matcher.is_match(""));
    assert!(matcher.param_names().is_empty());
}

#[test]
fn test_parameterized_path() {
    let matcher = PathMatcher::compile("/items/{id}").unwrap();
    assert_eq!(matcher.as_str(), "^/items/([^/]+)$");
    assert!(matcher.is_match("/items/123"));
    assert_eq!(matcher.param_names().len(), 1);
    assert_eq!(matcher.param_names()[0].as_ref(), "id");
}

#[test]
fn test_nested_path() {
    let matcher = PathMatcher::compile("/a/{b}/c").unwrap();
    assert!(matcher.is_match("/a/1/c"));
    assert!(!matcher.is_match("/a/1/c/"));
    assert!(!matcher.is_match("/x/a/1/c"));
}

#[test]
fn test_captures_in_pattern_order() {
    let matcher = PathMatcher::compile("/posts/{postId}/comments/{commentId}").unwrap();
    let params = matcher.captures("/posts/42/comments/56").unwrap();
    let pairs: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_str()))
        .collect();
    assert_eq!(pairs, vec![("postId", "42"), ("commentId", "56")]);
}

#[test]
fn test_empty_segment_never_matches() {
    let matcher = PathMatcher::compile("/posts/{postId}/comments/{commentId}").unwrap();
    assert!(matcher.captures("/posts//comments/56").is_none());
    assert!(matcher.captures("/posts/42/comments/").is_none());
    assert!(matcher.captures("/posts/42/comments//").is_none());
}

#[test]
fn test_literal_metacharacters_are_escaped() {
    let matcher = PathMatcher::compile("/feed.{format}").unwrap();
    assert!(matcher.is_match("/feed.xml"));
    assert!(!matcher.is_match("/feedXxml"));

    let matcher = PathMatcher::compile("/search+(all)").unwrap();
    assert!(matcher.is_match("/search+(all)"));
    assert!(!matcher.is_match("/searchhall"));
}

#[test]
fn test_placeholders_within_a_segment() {
    let matcher = PathMatcher::compile("/archive/{year}-{month}").unwrap();
    let params = matcher.captures("/archive/2024-05").unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].0.as_ref(), "year");
    assert_eq!(params[1].0.as_ref(), "month");

    // A placeholder body ends at the first `}`, so `{a}-{b}` is two parameters
    let matcher = PathMatcher::compile("/x/{a}-{b}").unwrap();
    let params = matcher.captures("/x/1-2-3").unwrap();
    let pairs: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_str()))
        .collect();
    assert_eq!(pairs, vec![("a", "1-2"), ("b", "3")]);

    assert_eq!(param_names("/x/{a}-{a}"), vec!["a", "a"]);
    let err = Router::new().get("/x/{a}-{a}", "x#show", None).unwrap_err();
    let message = err.to_string();
    assert_eq!(message, "Duplicate route parameters not allowed: a");
}

#[test]
fn test_tokenize_treats_stray_braces_as_literal() {
    assert_eq!(tokenize("/a/{}/b"), vec![Token::Literal("/a/{}/b")]);
    assert_eq!(tokenize("/a/{x/y}"), vec![Token::Literal("/a/{x/y}")]);
    assert_eq!(
        tokenize("/a/{{id}"),
        vec![Token::Literal("/a/{"), Token::Param("id")]
    );
    assert_eq!(param_names("/{a}/{b}/{a}"), vec!["a", "b", "a"]);
}

#[test]
fn test_duplicate_names_reported_once_each() {
    assert!(duplicate_names(&["a", "b"]).is_empty());
    assert_eq!(duplicate_names(&["id", "x", "id", "id"]), vec!["id"]);
    assert_eq!(duplicate_names(&["b", "a", "a", "b"]), vec!["a", "b"]);
}

#[test]
fn test_target_parse() {
    let target = Target::parse("staticPages#now").unwrap();
    assert_eq!(target.controller(), "StaticPagesController");
    assert_eq!(target.action(), "now");
    assert_eq!(target.default_route_name(), "staticPages.now");
    assert_eq!(target.to_string(), "StaticPagesController#now");
}

#[test]
fn test_target_changes_case_of_ascii_first_letter_only() {
    let target = Target::parse("ßtraße#show").unwrap();
    assert_eq!(target.controller(), "ßtraßeController");
    assert_eq!(target.default_route_name(), "ßtraße.show");

    let target = Target::parse("Éclair#index").unwrap();
    assert_eq!(target.default_route_name(), "Éclair.index");

    let target = Target::new("StaticPagesController", "now");
    assert_eq!(target.default_route_name(), "staticPages.now");
}

#[test]
fn test_target_splits_at_first_separator() {
    let target = Target::parse("posts#show#extra").unwrap();
    assert_eq!(target.controller(), "PostsController");
    assert_eq!(target.action(), "show#extra");
}

#[test]
fn test_target_rejects_malformed_specs() {
    for spec in ["missingSeparator", "#index", "posts#", "#", ""] {
        let result = Target::parse(spec);
        assert!(
            matches!(result, Err(RouterError::InvalidHandlerFormat { .. })),
            "expected {spec:?} to be rejected"
        );
    }
}

#[test]
fn test_failed_registration_leaves_router_unchanged() {
    let mut router = Router::new();
    router.get("/posts/{id}", "posts#show", None).unwrap();

    let duplicate = router.get("/posts/{id}/edit/{id}", "posts#show", None);
    assert!(duplicate.is_err());
    let malformed = router.get("/posts/{id}", "broken", Some("posts.show"));
    assert!(malformed.is_err());

    assert_eq!(router.len(), 1);
    assert_eq!(router.named_routes().len(), 1);
    assert_eq!(
        router.route_by_name("posts.show").unwrap().pattern(),
        "/posts/{id}"
    );
}

#[test]
fn test_name_collision_last_registration_wins() {
    let mut router = Router::new();
    router.get("/first", "pages#first", Some("page")).unwrap();
    router.get("/second", "pages#second", Some("page")).unwrap();

    assert_eq!(router.path_for("page").unwrap(), "/second");
    // Both routes still match
    assert!(router.match_method_str("GET", "/first").is_some());
    assert!(router.match_method_str("GET", "/second").is_some());
}

#[test]
fn test_path_values_display_forms() {
    let values = PathValues::new()
        .with("id", 7_u64)
        .with("slug", "hello")
        .with("ok", true);
    assert_eq!(values.get("id"), Some("7"));
    assert_eq!(values.get("slug"), Some("hello"));
    assert_eq!(values.get("ok"), Some("true"));
    assert_eq!(values.get("missing"), None);
}

#[test]
fn test_invalid_pattern_error_keeps_regex_source() {
    let source = regex::Regex::new("(").unwrap_err();
    let err = RouterError::InvalidPattern {
        pattern: "/x".to_string(),
        source,
    };
    let message = err.to_string();
    assert!(message.starts_with("Pattern '/x' could not be compiled"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_router_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Router>();
    assert_send_sync::<super::RouteMatch>();
}
