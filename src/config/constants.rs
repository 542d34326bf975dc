//! Configuration constants.

use std::time::Duration;

use crate::models::Verdict;

/// Number of components in a feature vector.
pub const FEATURE_DIM: usize = 5;

/// Maximum URL length accepted at the classification boundary.
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Timeout for a single WHOIS lookup on the classification path.
///
/// The lookup is informational only: on timeout the domain-age field is
/// absent and the verdict is unaffected. One attempt per request, no retry.
pub const WHOIS_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed confidence assigned when the allowlist short-circuits the scorer.
pub const KNOWN_SAFE_SCORE: f64 = 0.95;

/// Confidence band for Phishing verdicts: [lower, upper].
pub const PHISHING_SCORE_BAND: [f64; 2] = [0.15, 0.59];

/// Confidence band for Safe verdicts: [lower, upper].
pub const SAFE_SCORE_BAND: [f64; 2] = [0.60, 1.0];

/// Gain applied inside the sigmoid squashing of centroid distance.
pub const SIGMOID_GAIN: f64 = 4.0;

/// Divisor normalizing the centroid distance before squashing.
pub const DISTANCE_SCALE: f64 = 5.0;

/// Cluster-id to verdict mapping.
///
/// This table is an artifact of how the clustering model was trained and is
/// deliberately configuration, not derived. Unmapped ids fall back to
/// [`Verdict::Safe`].
pub const CLUSTER_VERDICTS: [Verdict; 2] = [Verdict::Safe, Verdict::Phishing];

/// Default path of the pre-fit feature scaler artifact.
pub const DEFAULT_SCALER_PATH: &str = "artifacts/scaler.json";

/// Default path of the pre-fit clustering model artifact.
pub const DEFAULT_MODEL_PATH: &str = "artifacts/model.json";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8000;
