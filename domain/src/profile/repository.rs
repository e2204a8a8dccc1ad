//! GitHub repository URL rule
//!
//! A profile may link to a GitHub account page. The rule is plain string
//! matching; nothing is fetched.

use regex::Regex;
use std::sync::LazyLock;

static GITHUB_ACCOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((https://(www\.)?)?|(www\.))?github\.com/[a-zA-Z0-9]+(-[a-zA-Z0-9]+)?/?$")
        .expect("valid regex")
});

/// GitHub top-level paths that look like accounts but are not
pub const RESERVED_PATHS: &[&str] = &[
    "enterprise",
    "features",
    "topics",
    "collections",
    "trending",
    "events",
    "marketplace",
    "pricing",
    "nonprofit",
    "customer-stories",
    "security",
    "login",
    "join",
];

/// Check a repository URL.
///
/// Empty is valid (no repository). Otherwise the URL must point at a
/// GitHub account page, optionally prefixed with `https://` and/or `www.`,
/// and the account must not be one of [`RESERVED_PATHS`].
pub fn validate_repository(url: &str) -> bool {
    if url.is_empty() {
        return true;
    }
    if !GITHUB_ACCOUNT.is_match(url) {
        return false;
    }

    let account = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    !RESERVED_PATHS.contains(&account)
}
