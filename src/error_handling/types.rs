//! Error, warning, and failure types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding or serving the HTTP listener.
    #[error("Server initialization error: {0}")]
    ServerError(String),
}

/// Error types for loading the pre-fit scaler and clustering model.
///
/// Any of these is fatal: the process refuses to start without both
/// artifacts present and well-formed.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    /// The artifact file does not exist.
    #[error("model artifact not found: {0}")]
    Missing(PathBuf),

    /// The artifact file could not be read.
    #[error("failed to read model artifact {path}")]
    Io {
        /// Path of the unreadable artifact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The artifact file is not valid JSON for the expected schema.
    #[error("failed to parse model artifact {path}")]
    Parse {
        /// Path of the malformed artifact.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The artifact parsed but its contents are unusable (wrong
    /// dimensionality, non-finite values, zero scale, etc.).
    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Feature extraction produced an unusable value.
///
/// The extraction arithmetic cannot normally yield a non-finite value, but
/// the contract guards it anyway and fails closed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A feature component is NaN or infinite.
    #[error("feature '{0}' is not finite")]
    NonFinite(&'static str),
}

/// Scoring failed during scaling, cluster assignment, or score computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// A non-finite value surfaced at the named stage.
    #[error("non-finite value during {stage}")]
    NonFinite {
        /// Pipeline stage where the value appeared.
        stage: &'static str,
    },

    /// The model assigned a cluster it has no centroid for.
    #[error("assigned cluster {0} has no centroid")]
    UnknownCluster(usize),
}

/// Classification failure kinds, tagged for logging.
///
/// These never escape [`crate::Detector::predict`]; the boundary collapses
/// them to an `Error` verdict with zero confidence. Keeping the kind here
/// (rather than converting early) preserves it for logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Feature extraction failed closed.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Scoring hit a NaN.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl ClassifyError {
    /// Short stable tag for log lines and error statistics.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifyError::Extraction(_) => "extraction",
            ClassifyError::Scoring(_) => "scoring",
        }
    }
}

/// WHOIS lookup failures on the dedicated `/whois` operation.
///
/// Unlike the classification path (where lookups degrade to an absent age
/// field), the caller-facing WHOIS operation distinguishes "the registry has
/// no record" from "something else broke".
#[derive(Error, Debug)]
pub enum WhoisError {
    /// The registry query failed, most likely because the domain is not
    /// registered.
    #[error("WHOIS lookup failed for {0}: domain may not be registered")]
    NotFound(String),

    /// Client construction, timeout, or any other internal failure.
    #[error("WHOIS lookup error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error_kind_tags() {
        let e: ClassifyError = ExtractionError::NonFinite("length").into();
        assert_eq!(e.kind(), "extraction");

        let e: ClassifyError = ScoringError::NonFinite { stage: "transform" }.into();
        assert_eq!(e.kind(), "scoring");
    }

    #[test]
    fn test_model_load_error_messages() {
        let missing = ModelLoadError::Missing(PathBuf::from("artifacts/scaler.json"));
        assert!(missing.to_string().contains("artifacts/scaler.json"));

        let invalid = ModelLoadError::Invalid("scaler has 4 components, expected 5".into());
        assert!(invalid.to_string().contains("expected 5"));
    }

    #[test]
    fn test_whois_error_distinguishes_not_found() {
        let not_found = WhoisError::NotFound("example.com".into());
        assert!(not_found.to_string().contains("may not be registered"));

        let internal = WhoisError::Internal("timed out".into());
        assert!(internal.to_string().contains("timed out"));
    }
}
