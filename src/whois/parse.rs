//! WHOIS response conversion and date parsing.

use chrono::{DateTime, Utc};
use whois_service::WhoisResponse;

use super::WhoisResult;

/// Converts a whois-service response into our [`WhoisResult`].
///
/// Structured fields come from the crate's parsed data when present; the
/// domain name and registry id are recovered from the raw registry text,
/// which the parser does not expose directly.
pub(crate) fn convert_response(response: &WhoisResponse) -> WhoisResult {
    let domain_name = raw_field(&response.raw_data, "Domain Name");
    let registry_domain_id = raw_field(&response.raw_data, "Registry Domain ID");

    let parsed = match &response.parsed_data {
        Some(p) => p,
        None => {
            return WhoisResult {
                domain_name,
                registry_domain_id,
                ..Default::default()
            };
        }
    };

    WhoisResult {
        domain_name,
        registry_domain_id,
        creation_date: parsed.creation_date.as_deref().and_then(parse_date_string),
        expiration_date: parsed
            .expiration_date
            .as_deref()
            .and_then(parse_date_string),
        updated_date: parsed.updated_date.as_deref().and_then(parse_date_string),
        registrar: parsed.registrar.clone(),
        status: if parsed.status.is_empty() {
            None
        } else {
            Some(parsed.status.clone())
        },
        nameservers: if parsed.name_servers.is_empty() {
            None
        } else {
            Some(parsed.name_servers.clone())
        },
    }
}

/// Pulls the first `Key: value` line out of raw registry text.
fn raw_field(raw: &str, key: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        let (field, value) = line.split_once(':')?;
        if field.trim().eq_ignore_ascii_case(key) {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        } else {
            None
        }
    })
}

/// Attempts to parse a date string in common registry formats.
pub(crate) fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_string_iso8601() {
        let dt = parse_date_string("2024-01-15T10:30:45Z").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 10:30:45");
    }

    #[test]
    fn test_parse_date_string_iso8601_with_millis() {
        let dt = parse_date_string("2024-01-15T10:30:45.123Z").unwrap();
        assert!(dt.format("%Y-%m-%d").to_string().starts_with("2024-01-15"));
    }

    #[test]
    fn test_parse_date_string_space_separated() {
        let dt = parse_date_string("2024-01-15 10:30:45").unwrap();
        assert!(dt.format("%Y-%m-%d").to_string().starts_with("2024-01-15"));
    }

    #[test]
    fn test_parse_date_string_date_only_is_midnight() {
        let dt = parse_date_string("2024-01-15").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn test_parse_date_string_dd_mmm_yyyy() {
        let dt = parse_date_string("15-Jan-2024").unwrap();
        assert!(dt.format("%Y-%m-%d").to_string().starts_with("2024-01-15"));
    }

    #[test]
    fn test_parse_date_string_invalid() {
        assert!(parse_date_string("not a date").is_none());
        assert!(parse_date_string("").is_none());
    }

    #[test]
    fn test_raw_field_extracts_first_match() {
        let raw = "Domain Name: EXAMPLE.COM\nRegistry Domain ID: 1234-ABC\nDomain Name: other.com\n";
        assert_eq!(raw_field(raw, "Domain Name").as_deref(), Some("EXAMPLE.COM"));
        assert_eq!(
            raw_field(raw, "Registry Domain ID").as_deref(),
            Some("1234-ABC")
        );
    }

    #[test]
    fn test_raw_field_is_case_insensitive_on_key() {
        let raw = "domain name: example.com\n";
        assert_eq!(raw_field(raw, "Domain Name").as_deref(), Some("example.com"));
    }

    #[test]
    fn test_raw_field_missing_or_empty() {
        assert!(raw_field("Registrar: Example Inc\n", "Domain Name").is_none());
        assert!(raw_field("Domain Name:   \n", "Domain Name").is_none());
    }
}
