//! Known-domain allowlist.
//!
//! Domains known a priori to be trustworthy bypass the statistical scorer
//! entirely. Matching is substring containment against the extracted domain,
//! not exact equality: subdomains of a listed entry match, and so does any
//! domain that merely contains a listed string. The loose match is
//! intentional and documented behavior.

use crate::features::domain_of;

/// Domains trusted a priori.
pub const KNOWN_SAFE_DOMAINS: [&str; 11] = [
    "google.com",
    "amazon.com",
    "microsoft.com",
    "apple.com",
    "facebook.com",
    "youtube.com",
    "netflix.com",
    "github.com",
    "stackoverflow.com",
    "paruluniversity.ac.in",
    "claude.ai",
];

/// Returns true when the URL's domain contains any allowlisted entry.
pub fn is_known_safe(url: &str) -> bool {
    let domain = domain_of(url);
    KNOWN_SAFE_DOMAINS
        .iter()
        .any(|safe| domain.contains(safe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_domain_matches() {
        assert!(is_known_safe("https://google.com"));
        assert!(is_known_safe("github.com/some/repo"));
    }

    #[test]
    fn test_subdomains_match() {
        assert!(is_known_safe("https://mail.google.com/inbox"));
        assert!(is_known_safe("https://gist.github.com"));
    }

    #[test]
    fn test_containment_is_loose_by_design() {
        // A domain that merely contains a listed string also matches; this
        // mirrors the documented substring policy.
        assert!(is_known_safe("https://notgoogle.com"));
    }

    #[test]
    fn test_unlisted_domains_do_not_match() {
        assert!(!is_known_safe("https://example.com"));
        assert!(!is_known_safe("https://secure-login.paypal-security.com"));
    }

    #[test]
    fn test_listed_string_in_path_does_not_match() {
        // Only the domain portion is checked.
        assert!(!is_known_safe("https://evil.test/google.com"));
    }

    #[test]
    fn test_case_insensitive_via_domain_normalization() {
        assert!(is_known_safe("https://WWW.GOOGLE.COM"));
    }
}
