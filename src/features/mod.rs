//! Lexical feature extraction from raw URL strings.
//!
//! Turns a URL into the fixed 5-component vector the scorer was trained on:
//! `[length, is_https, special_char_count, keyword_hit_count,
//! subdomain_dot_count]`. Extraction is purely lexical; the URL is not
//! fetched or resolved.

mod keywords;

pub use keywords::{keyword_hits, KEYWORDS};

use crate::config::FEATURE_DIM;
use crate::error_handling::ExtractionError;

/// Characters counted independently for the special-character feature.
///
/// Each listed character contributes its own occurrence count over the full
/// URL; the feature is the sum of those per-character counts.
pub const SPECIAL_CHARS: [char; 10] = ['@', '-', '.', '=', '&', '?', '/', ':', '%', '#'];

/// The fixed-order lexical feature vector for a URL.
///
/// Components are stored as `f64` because the downstream scaler and
/// clustering model operate in floating point.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Total character count of the (scheme-prefixed) URL.
    pub length: f64,
    /// 1.0 if the URL starts with `https`, else 0.0.
    pub is_https: f64,
    /// Summed occurrence counts of [`SPECIAL_CHARS`].
    pub special_char_count: f64,
    /// Number of distinct phishing keywords appearing in the URL.
    pub keyword_hit_count: f64,
    /// Number of `.` characters in the domain portion.
    pub subdomain_dot_count: f64,
}

impl FeatureVector {
    /// Returns the components in the fixed training order.
    pub fn as_array(&self) -> [f64; FEATURE_DIM] {
        [
            self.length,
            self.is_https,
            self.special_char_count,
            self.keyword_hit_count,
            self.subdomain_dot_count,
        ]
    }
}

/// Prepends `http://` when the URL carries no HTTP scheme prefix.
///
/// The check is deliberately on the literal prefix `http` so that both
/// `http://` and `https://` pass through untouched, matching the behavior
/// the model artifacts were trained against.
pub fn normalize_scheme(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Extracts the lowercased domain portion of a URL.
///
/// Uses the host of the parsed URL when available; otherwise falls back to
/// the first path segment after stripping the scheme, mirroring
/// netloc-or-first-segment semantics.
pub fn domain_of(url: &str) -> String {
    let normalized = normalize_scheme(url);
    if let Ok(parsed) = url::Url::parse(&normalized) {
        if let Some(host) = parsed.host_str() {
            return host.to_lowercase();
        }
    }
    // No parseable host: take everything after the scheme up to the first
    // slash.
    let without_scheme = normalized
        .strip_prefix("https://")
        .or_else(|| normalized.strip_prefix("http://"))
        .unwrap_or(&normalized);
    without_scheme
        .split('/')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Extracts the 5-component feature vector from a URL string.
///
/// # Errors
///
/// Fails closed with [`ExtractionError`] if any component is non-finite.
/// The arithmetic below cannot normally produce one, but the contract
/// guards the invariant anyway.
pub fn extract(url: &str) -> Result<FeatureVector, ExtractionError> {
    let url = normalize_scheme(url);
    let url_lower = url.to_lowercase();
    let domain = domain_of(&url);

    let length = url.chars().count() as f64;
    let is_https = if url.starts_with("https") { 1.0 } else { 0.0 };
    let special_char_count: usize = SPECIAL_CHARS
        .iter()
        .map(|c| url.matches(*c).count())
        .sum();
    let keyword_hit_count = keyword_hits(&url_lower) as f64;
    let subdomain_dot_count = domain.matches('.').count() as f64;

    let features = FeatureVector {
        length,
        is_https,
        special_char_count: special_char_count as f64,
        keyword_hit_count,
        subdomain_dot_count,
    };

    for (value, name) in features.as_array().iter().zip([
        "length",
        "is_https",
        "special_char_count",
        "keyword_hit_count",
        "subdomain_dot_count",
    ]) {
        if !value.is_finite() {
            log::error!("Feature extraction failed for {url}: {name} is not finite");
            return Err(ExtractionError::NonFinite(name));
        }
    }

    log::debug!("Extracted features for {url}: {features:?}");
    Ok(features)
}
