//! Path rewrite rules
//!
//! Rewrites map one request path to another document before static serving,
//! e.g. `/` to the login page. Matching is exact, never by prefix.

use serde::Deserialize;

/// One rewrite rule: an exact request path and the document it maps to.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub path: String,
    pub target: String,
}

/// Find the rewrite target for a path, first exact match wins.
pub fn apply<'a>(rules: &'a [RewriteRule], path: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| rule.path == path)
        .map(|rule| rule.target.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rules() -> Vec<RewriteRule> {
        vec![
            RewriteRule {
                path: "/".to_string(),
                target: "/modern-login.html".to_string(),
            },
            RewriteRule {
                path: "/dashboard".to_string(),
                target: "/modern-dashboard.html".to_string(),
            },
        ]
    }

    #[test]
    fn test_exact_match() {
        let rules = make_rules();
        assert_eq!(apply(&rules, "/"), Some("/modern-login.html"));
        assert_eq!(apply(&rules, "/dashboard"), Some("/modern-dashboard.html"));
    }

    #[test]
    fn test_no_prefix_match() {
        let rules = make_rules();
        assert_eq!(apply(&rules, "/dashboard/"), None);
        assert_eq!(apply(&rules, "/dashboards"), None);
        assert_eq!(apply(&rules, "/dashboard/stats"), None);
    }

    #[test]
    fn test_unknown_path() {
        let rules = make_rules();
        assert_eq!(apply(&rules, "/style.css"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let mut rules = make_rules();
        rules.push(RewriteRule {
            path: "/".to_string(),
            target: "/other.html".to_string(),
        });
        assert_eq!(apply(&rules, "/"), Some("/modern-login.html"));
    }

    #[test]
    fn test_empty_rules() {
        assert_eq!(apply(&[], "/"), None);
    }
}
