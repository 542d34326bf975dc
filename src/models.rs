//! Shared data types: verdicts and prediction results.

use serde::{Deserialize, Serialize};

/// Final classification label for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The URL is considered trustworthy.
    Safe,
    /// The URL matches the phishing cluster.
    Phishing,
    /// Classification failed; confidence is zero.
    Error,
}

impl Verdict {
    /// Returns the canonical string label for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Phishing => "Phishing",
            Verdict::Error => "Error",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single URL.
///
/// The domain age is informational only: its absence never changes the
/// verdict or the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Classification label.
    pub verdict: Verdict,
    /// Confidence in [0, 1]. A clamped heuristic, not a calibrated
    /// probability: Phishing verdicts live in [0.15, 0.59], Safe verdicts in
    /// [0.60, 1.0], and Error is always 0.0.
    pub score: f64,
    /// Days since domain registration, when the registry lookup succeeded.
    pub domain_age_days: Option<i64>,
}
