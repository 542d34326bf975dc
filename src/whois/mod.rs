//! WHOIS/RDAP domain registration lookups.
//!
//! Uses the `whois-service` crate, which tries RDAP first and falls back to
//! WHOIS, handles IANA bootstrap for TLD discovery, and provides structured
//! parsing. Lookups here serve two callers with different error policies:
//! the classification path absorbs every failure into an absent domain-age
//! field, while the dedicated WHOIS operation surfaces a not-found vs
//! internal-error distinction.

mod parse;
mod report;

pub use report::WhoisReport;

use chrono::{DateTime, Utc};
use whois_service::WhoisClient;

use crate::error_handling::WhoisError;
use parse::convert_response;

/// Structured WHOIS lookup result.
#[derive(Debug, Clone, Default)]
pub struct WhoisResult {
    /// Registered domain name as reported by the registry.
    pub domain_name: Option<String>,
    /// Registry-assigned domain id.
    pub registry_domain_id: Option<String>,
    /// Domain creation date.
    pub creation_date: Option<DateTime<Utc>>,
    /// Domain expiration date.
    pub expiration_date: Option<DateTime<Utc>>,
    /// Domain updated date.
    pub updated_date: Option<DateTime<Utc>>,
    /// Registrar name.
    pub registrar: Option<String>,
    /// Domain status codes (e.g., "clientTransferProhibited").
    pub status: Option<Vec<String>>,
    /// Nameservers from WHOIS.
    pub nameservers: Option<Vec<String>>,
}

/// Extracts the registrable host from a URL-ish input.
///
/// Strips an optional scheme and a leading `www.`, then truncates at the
/// first path separator. The result is lowercased for registry queries.
pub fn registrable_host(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    stripped
        .split('/')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Performs a WHOIS lookup for a domain.
///
/// # Errors
///
/// Returns [`WhoisError::NotFound`] when the registry query itself fails
/// (most commonly an unregistered domain) and [`WhoisError::Internal`] when
/// the client cannot be constructed.
pub async fn lookup(domain: &str) -> Result<WhoisResult, WhoisError> {
    log::info!("Starting WHOIS lookup for domain: {domain}");

    // The client is lightweight; a fresh instance per lookup avoids shared
    // state across requests.
    let client = WhoisClient::new()
        .await
        .map_err(|e| WhoisError::Internal(format!("failed to create WHOIS client: {e}")))?;

    match client.lookup(domain).await {
        Ok(response) => {
            log::info!("WHOIS lookup successful for {domain}");
            Ok(convert_response(&response))
        }
        Err(e) => {
            log::warn!("WHOIS lookup failed for {domain}: {e}");
            Err(WhoisError::NotFound(domain.to_string()))
        }
    }
}

/// Computes the domain age in days from a creation date.
pub fn age_in_days(creation_date: DateTime<Utc>) -> i64 {
    (Utc::now() - creation_date).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_registrable_host_strips_scheme_and_www() {
        assert_eq!(registrable_host("https://www.example.com/path"), "example.com");
        assert_eq!(registrable_host("http://example.com"), "example.com");
        assert_eq!(registrable_host("example.com/path"), "example.com");
    }

    #[test]
    fn test_registrable_host_keeps_subdomains() {
        assert_eq!(
            registrable_host("https://mail.example.com"),
            "mail.example.com"
        );
    }

    #[test]
    fn test_registrable_host_lowercases() {
        assert_eq!(registrable_host("Example.COM"), "example.com");
    }

    #[test]
    fn test_age_in_days() {
        let created = Utc::now() - Duration::days(400);
        let age = age_in_days(created);
        assert!((399..=401).contains(&age));
    }
}
