//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::models::Verdict;
use crate::whois::WhoisReport;

/// Body of `POST /predict`.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// The URL to classify.
    pub url: String,
}

/// Response of `POST /predict`.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// The URL as submitted (trimmed).
    pub url: String,
    /// Confidence score in [0, 1].
    pub score: f64,
    /// Classification label.
    pub verdict: Verdict,
    /// Days since domain registration, if the lookup succeeded.
    pub domain_age_days: Option<i64>,
    /// Classification timestamp, ISO-8601.
    pub date: String,
}

/// Body of `POST /whois`.
#[derive(Debug, Deserialize)]
pub struct WhoisRequest {
    /// Domain or URL to look up.
    pub url: String,
}

/// Response of `POST /whois`.
#[derive(Debug, Serialize)]
pub struct WhoisLookupResponse {
    /// Formatted registration record.
    pub domain_info: WhoisReport,
    /// Lookup backend identifier.
    pub method: &'static str,
}

/// Error body matching the `{"detail": ...}` convention of the API.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub detail: String,
}

/// Welcome message for `GET /`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Static greeting pointing at the classify endpoint.
    pub message: &'static str,
}
