//! Caller-facing WHOIS report formatting.
//!
//! Pure formatting of a [`WhoisResult`] into the response shape of the
//! `/whois` operation: every field is a string (or list of strings) with
//! `"N/A"` standing in for anything the registry did not report, and the
//! domain age is expressed in whole years.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{age_in_days, WhoisResult};

/// Structured registration record returned by the WHOIS operation.
#[derive(Debug, Clone, Serialize)]
pub struct WhoisReport {
    /// Registered domain name.
    #[serde(rename = "Domain Name")]
    pub domain_name: String,
    /// Registry-assigned id.
    #[serde(rename = "Registry Domain ID")]
    pub registry_domain_id: String,
    /// Creation date, ISO-8601 or "N/A".
    #[serde(rename = "Registered On")]
    pub registered_on: String,
    /// Expiration date, ISO-8601 or "N/A".
    #[serde(rename = "Expires On")]
    pub expires_on: String,
    /// Last updated date, ISO-8601 or "N/A".
    #[serde(rename = "Updated On")]
    pub updated_on: String,
    /// Age in whole years, e.g. "27 years", or "N/A".
    #[serde(rename = "Domain Age")]
    pub domain_age: String,
    /// Registrar name.
    #[serde(rename = "Registrar")]
    pub registrar: String,
    /// Status codes.
    #[serde(rename = "Domain Status")]
    pub domain_status: Vec<String>,
    /// Nameservers.
    #[serde(rename = "Name Servers")]
    pub name_servers: Vec<String>,
}

impl From<&WhoisResult> for WhoisReport {
    fn from(result: &WhoisResult) -> Self {
        WhoisReport {
            domain_name: format_field(result.domain_name.as_deref()),
            registry_domain_id: format_field(result.registry_domain_id.as_deref()),
            registered_on: format_date(result.creation_date),
            expires_on: format_date(result.expiration_date),
            updated_on: format_date(result.updated_date),
            domain_age: format_age(result.creation_date),
            registrar: format_field(result.registrar.as_deref()),
            domain_status: format_list(result.status.as_deref()),
            name_servers: format_list(result.nameservers.as_deref()),
        }
    }
}

fn format_field(field: Option<&str>) -> String {
    match field {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "N/A".to_string(),
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(dt) => dt.to_rfc3339(),
        None => "N/A".to_string(),
    }
}

fn format_list(list: Option<&[String]>) -> Vec<String> {
    match list {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => vec!["N/A".to_string()],
    }
}

fn format_age(creation_date: Option<DateTime<Utc>>) -> String {
    match creation_date {
        Some(created) => {
            let years = age_in_days(created) / 365;
            format!("{years} years")
        }
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_report_formats_missing_fields_as_na() {
        let report = WhoisReport::from(&WhoisResult::default());
        assert_eq!(report.domain_name, "N/A");
        assert_eq!(report.registry_domain_id, "N/A");
        assert_eq!(report.registered_on, "N/A");
        assert_eq!(report.expires_on, "N/A");
        assert_eq!(report.updated_on, "N/A");
        assert_eq!(report.domain_age, "N/A");
        assert_eq!(report.registrar, "N/A");
        assert_eq!(report.domain_status, vec!["N/A".to_string()]);
        assert_eq!(report.name_servers, vec!["N/A".to_string()]);
    }

    #[test]
    fn test_report_formats_populated_result() {
        let created = Utc.with_ymd_and_hms(1995, 8, 14, 4, 0, 0).unwrap();
        let result = WhoisResult {
            domain_name: Some("EXAMPLE.COM".into()),
            registry_domain_id: Some("2336799_DOMAIN_COM-VRSN".into()),
            creation_date: Some(created),
            registrar: Some("RESERVED-Internet Assigned Numbers Authority".into()),
            status: Some(vec!["clientTransferProhibited".into()]),
            nameservers: Some(vec!["a.iana-servers.net".into(), "b.iana-servers.net".into()]),
            ..Default::default()
        };
        let report = WhoisReport::from(&result);
        assert_eq!(report.domain_name, "EXAMPLE.COM");
        assert!(report.registered_on.starts_with("1995-08-14"));
        assert!(report.domain_age.ends_with(" years"));
        assert_eq!(report.name_servers.len(), 2);
    }

    #[test]
    fn test_domain_age_in_whole_years() {
        let created = Utc::now() - Duration::days(365 * 3 + 100);
        let report = WhoisReport::from(&WhoisResult {
            creation_date: Some(created),
            ..Default::default()
        });
        assert_eq!(report.domain_age, "3 years");
    }

    #[test]
    fn test_report_serializes_with_display_keys() {
        let json = serde_json::to_value(WhoisReport::from(&WhoisResult::default())).unwrap();
        assert_eq!(json["Domain Name"], "N/A");
        assert_eq!(json["Registry Domain ID"], "N/A");
        assert_eq!(json["Domain Age"], "N/A");
    }
}
