//! Verdict orchestration.
//!
//! [`Detector`] ties together the allowlist short-circuit, the feature
//! extractor + scorer, and the informational domain-age lookup. Its boundary
//! contract is strict: `predict` never fails. Internal failures carry a
//! tagged [`ClassifyError`] kind for logging and tests, and are collapsed to
//! `(Error, 0.0, None)` only at the boundary.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::allowlist::is_known_safe;
use crate::config::{Config, KNOWN_SAFE_SCORE};
use crate::error_handling::{ClassifyError, ModelLoadError};
use crate::model::{KMeansModel, ScoringModel};
use crate::models::{Prediction, Verdict};
use crate::whois;

/// Domain-age lookup seam.
///
/// The production implementation queries a WHOIS registry; tests substitute
/// stubs. Implementations never fail: any lookup problem is an absent age.
pub trait DomainAgeResolver: Send + Sync {
    /// Resolves the age in days of the URL's domain, or `None` on any
    /// lookup or parse failure.
    fn resolve<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output = Option<i64>> + Send + 'a>>;
}

/// WHOIS-backed age resolver with a per-request timeout.
///
/// One attempt per request, no retries. Timeout or failure only nulls the
/// age field; it never affects the verdict.
pub struct WhoisAgeResolver {
    timeout: Duration,
}

impl WhoisAgeResolver {
    /// Creates a resolver with the given lookup timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl DomainAgeResolver for WhoisAgeResolver {
    fn resolve<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output = Option<i64>> + Send + 'a>> {
        Box::pin(async move {
            let host = whois::registrable_host(url);
            if host.is_empty() {
                return None;
            }
            match tokio::time::timeout(self.timeout, whois::lookup(&host)).await {
                Ok(Ok(result)) => result.creation_date.map(whois::age_in_days),
                Ok(Err(e)) => {
                    log::warn!("Could not get domain age for {url}: {e}");
                    None
                }
                Err(_) => {
                    log::warn!(
                        "Domain age lookup timed out after {}s for {url}",
                        self.timeout.as_secs()
                    );
                    None
                }
            }
        })
    }
}

/// URL phishing detector.
///
/// Holds the pre-fit model behind [`ScoringModel`] and the age resolver
/// behind [`DomainAgeResolver`]. Both are constructed once at startup and
/// read-only thereafter, so a single instance is safe to share across
/// concurrent requests without locking.
pub struct Detector {
    model: Arc<dyn ScoringModel>,
    age_resolver: Arc<dyn DomainAgeResolver>,
}

impl Detector {
    /// Creates a detector from explicit collaborators.
    pub fn new(model: Arc<dyn ScoringModel>, age_resolver: Arc<dyn DomainAgeResolver>) -> Self {
        Self {
            model,
            age_resolver,
        }
    }

    /// Loads the pre-fit artifacts named by `config` and wires up the
    /// WHOIS-backed age resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError`] when either artifact is missing or
    /// unreadable; callers treat this as fatal at startup.
    pub fn from_config(config: &Config) -> Result<Self, ModelLoadError> {
        let model = KMeansModel::load(&config.scaler_path, &config.model_path)?;
        let resolver = WhoisAgeResolver::new(Duration::from_secs(config.whois_timeout_seconds));
        Ok(Self::new(Arc::new(model), Arc::new(resolver)))
    }

    /// Classifies a URL.
    ///
    /// Never fails: any internal error is logged with its kind and collapsed
    /// to an `Error` verdict with zero confidence and no domain age.
    pub async fn predict(&self, url: &str) -> Prediction {
        match self.classify(url).await {
            Ok(prediction) => prediction,
            Err(e) => {
                log::error!("Prediction error ({}) for {url}: {e}", e.kind());
                Prediction {
                    verdict: Verdict::Error,
                    score: 0.0,
                    domain_age_days: None,
                }
            }
        }
    }

    async fn classify(&self, url: &str) -> Result<Prediction, ClassifyError> {
        if is_known_safe(url) {
            log::info!("{url} is a known safe domain");
            let domain_age_days = self.age_resolver.resolve(url).await;
            return Ok(Prediction {
                verdict: Verdict::Safe,
                score: KNOWN_SAFE_SCORE,
                domain_age_days,
            });
        }

        let features = crate::features::extract(url)?;
        let (verdict, score) = crate::scorer::score(self.model.as_ref(), &features)?;
        let domain_age_days = self.age_resolver.resolve(url).await;

        log::info!(
            "Predicted {url}: verdict={verdict}, score={score:.4}, domain_age={domain_age_days:?}"
        );
        Ok(Prediction {
            verdict,
            score,
            domain_age_days,
        })
    }
}
