//! Request classification
//!
//! The decision procedure for an incoming request path: rewrite it and serve
//! a file, answer from a mock fixture, or fall through to static serving.
//! Rules are evaluated in a fixed order, first match wins, and the API
//! prefix never falls through to the filesystem.

pub mod mock;
pub mod rewrite;

pub use rewrite::RewriteRule;

use crate::config::RoutesConfig;

/// Outcome of classifying a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision<'a> {
    /// Serve a different document statically in place of the requested path.
    Rewrite(&'a str),
    /// Answer with a canned JSON fixture body.
    Fixture(&'static str),
    /// Under the API prefix but no fixture matches.
    ApiNotFound,
    /// Hand the path unmodified to static serving.
    Static,
}

/// Classify a request path against the route table.
pub fn classify<'a>(routes: &'a RoutesConfig, path: &str) -> RouteDecision<'a> {
    // 1. Exact rewrite rules
    if let Some(target) = rewrite::apply(&routes.rewrites, path) {
        return RouteDecision::Rewrite(target);
    }

    // 2. Reserved API prefix: fixture or the JSON not-found body, never
    //    the filesystem. Fixture endpoints are keyed relative to the
    //    prefix, so they move with it when reconfigured.
    if let Some(endpoint) = path.strip_prefix(&routes.api_prefix) {
        return match mock::lookup(endpoint) {
            Some(body) => RouteDecision::Fixture(body),
            None => RouteDecision::ApiNotFound,
        };
    }

    // 3. Everything else is static
    RouteDecision::Static
}
