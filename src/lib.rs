//! url_verdict library: URL phishing classification.
//!
//! Classifies a URL as Safe or Phishing from five hand-crafted lexical
//! features scored against a pre-fit 2-centroid clustering model, with a
//! known-domain allowlist short-circuit and an informational WHOIS
//! domain-age lookup. The confidence score is a clamped heuristic, not a
//! calibrated probability: Phishing verdicts land in [0.15, 0.59], Safe
//! verdicts in [0.60, 1.0].
//!
//! # Example
//!
//! ```no_run
//! use url_verdict::{Config, Detector};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let detector = Detector::from_config(&config)?;
//!
//! let prediction = detector.predict("https://secure-login.paypal-security.com/verify").await;
//! println!("{}: {:.2}", prediction.verdict, prediction.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The pre-fit scaler and clustering artifacts must exist at the configured
//! paths; [`Detector::from_config`] refuses to construct without them. The
//! async paths require a Tokio runtime.

#![warn(missing_docs)]

mod allowlist;
pub mod config;
mod detector;
mod error_handling;
mod features;
mod initialization;
mod model;
mod models;
mod scorer;
pub mod server;
mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use detector::{Detector, DomainAgeResolver, WhoisAgeResolver};
pub use error_handling::{
    ClassifyError, ExtractionError, InitializationError, ModelLoadError, ScoringError, WhoisError,
};
pub use features::{extract, FeatureVector};
pub use initialization::init_logger_with;
pub use model::{ClusterArtifact, KMeansModel, ScalerArtifact, ScoringModel};
pub use models::{Prediction, Verdict};
pub use server::{run_server, AppState};
pub use whois::WhoisReport;
