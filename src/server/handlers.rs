//! API request handlers.

use std::sync::LazyLock;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use regex::Regex;

use super::types::{
    ClassifyRequest, ClassifyResponse, ErrorBody, WelcomeResponse, WhoisLookupResponse,
    WhoisRequest,
};
use super::AppState;
use crate::config::MAX_URL_LENGTH;
use crate::error_handling::WhoisError;
use crate::whois::{self, WhoisReport};

/// Basic hostname/path shape a submitted URL must match.
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?[a-zA-Z0-9][-a-zA-Z0-9]{0,62}(\.[a-zA-Z0-9][-a-zA-Z0-9]{0,62})+(/\S*)?$")
        .expect("URL shape regex is valid")
});

fn error_response(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

/// Validates the submitted URL's shape.
///
/// Invalid shape is a caller error (400), never an internal failure; the
/// core pipeline only sees URLs that passed this gate.
pub(crate) fn validate_url(url: &str) -> Result<(), &'static str> {
    if url.is_empty() {
        return Err("URL cannot be empty");
    }
    if url.len() > MAX_URL_LENGTH {
        return Err("URL exceeds maximum length");
    }
    if !URL_SHAPE.is_match(url) {
        return Err("Invalid URL format");
    }
    Ok(())
}

/// `POST /predict` - classify a URL.
pub async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Response {
    let url = request.url.trim();
    if let Err(detail) = validate_url(url) {
        return error_response(StatusCode::BAD_REQUEST, detail);
    }

    let prediction = state.detector.predict(url).await;

    Json(ClassifyResponse {
        url: url.to_string(),
        score: prediction.score,
        verdict: prediction.verdict,
        domain_age_days: prediction.domain_age_days,
        date: Utc::now().to_rfc3339(),
    })
    .into_response()
}

/// `POST /whois` - structured registration record for a domain.
///
/// Distinguishes "the registry has no record" (404) from any other failure
/// (500); both carry a `detail` body.
pub async fn whois_handler(Json(request): Json<WhoisRequest>) -> Response {
    let url = request.url.trim();
    if url.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "URL is required");
    }

    let domain = whois::registrable_host(url);
    if domain.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Invalid URL format");
    }

    match whois::lookup(&domain).await {
        Ok(result) => Json(WhoisLookupResponse {
            domain_info: WhoisReport::from(&result),
            method: "rdap+whois",
        })
        .into_response(),
        Err(WhoisError::NotFound(_)) => error_response(
            StatusCode::NOT_FOUND,
            "WHOIS lookup failed. The domain may not be registered.",
        ),
        Err(e) => {
            log::error!("WHOIS lookup error for {domain}: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error while fetching WHOIS data.",
            )
        }
    }
}

/// `GET /` - welcome message.
pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the URL Phishing Detection API. Use /predict to check URLs.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FEATURE_DIM;
    use crate::detector::{Detector, DomainAgeResolver};
    use crate::model::ScoringModel;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;

    struct NoAge;

    impl DomainAgeResolver for NoAge {
        fn resolve<'a>(
            &'a self,
            _url: &'a str,
        ) -> Pin<Box<dyn Future<Output = Option<i64>> + Send + 'a>> {
            Box::pin(async { None })
        }
    }

    struct SafeModel;

    impl ScoringModel for SafeModel {
        fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM] {
            *features
        }
        fn assign(&self, _scaled: &[f64; FEATURE_DIM]) -> usize {
            0
        }
        fn centroid_of(&self, _cluster: usize) -> Option<&[f64; FEATURE_DIM]> {
            Some(&[0.0; FEATURE_DIM])
        }
    }

    fn test_state() -> AppState {
        AppState {
            detector: Arc::new(Detector::new(Arc::new(SafeModel), Arc::new(NoAge))),
        }
    }

    #[test]
    fn test_validate_url_accepts_common_shapes() {
        assert!(validate_url("example.com").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://sub.example.co.uk/path?q=1").is_ok());
        assert!(validate_url("https://secure-login.paypal-security.com/verify").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_empty() {
        assert_eq!(validate_url(""), Err("URL cannot be empty"));
    }

    #[test]
    fn test_validate_url_rejects_bad_shapes() {
        assert!(validate_url("not a url at all!!!").is_err());
        assert!(validate_url("http://").is_err());
        assert!(validate_url("nodots").is_err());
        assert!(validate_url("-leading-dash.com").is_err());
    }

    #[test]
    fn test_validate_url_rejects_overlong() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(validate_url(&url), Err("URL exceeds maximum length"));
    }

    #[tokio::test]
    async fn test_predict_handler_rejects_empty_url() {
        let response = predict_handler(
            State(test_state()),
            Json(ClassifyRequest { url: "   ".into() }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_predict_handler_rejects_invalid_shape() {
        let response = predict_handler(
            State(test_state()),
            Json(ClassifyRequest {
                url: "!!!".into(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_predict_handler_classifies_valid_url() {
        let response = predict_handler(
            State(test_state()),
            Json(ClassifyRequest {
                url: "http://example.com".into(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_whois_handler_rejects_empty_url() {
        let response = whois_handler(Json(WhoisRequest { url: "".into() })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_root_handler_welcomes() {
        let Json(body) = root_handler().await;
        assert!(body.message.contains("/predict"));
    }
}
