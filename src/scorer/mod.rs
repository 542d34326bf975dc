//! Verdict and confidence computation from a feature vector.
//!
//! A pure function of the feature vector plus the pre-fit artifacts: scale,
//! assign to the nearest centroid, map the cluster id to a verdict, then
//! squash the centroid distance into a verdict-banded confidence score. The
//! score is a deliberately clamped heuristic, not a calibrated probability:
//! Phishing always lands in [0.15, 0.59] and Safe in [0.60, 1.0], keeping a
//! visible gap between the two bands regardless of the raw distance.

use crate::config::{
    CLUSTER_VERDICTS, DISTANCE_SCALE, PHISHING_SCORE_BAND, SAFE_SCORE_BAND, SIGMOID_GAIN,
};
use crate::error_handling::ScoringError;
use crate::features::FeatureVector;
use crate::model::ScoringModel;
use crate::models::Verdict;

/// Maps a cluster id to its verdict, defaulting to Safe for unmapped ids.
pub fn verdict_for_cluster(cluster: usize) -> Verdict {
    CLUSTER_VERDICTS
        .get(cluster)
        .copied()
        .unwrap_or(Verdict::Safe)
}

/// Scores a feature vector against the pre-fit model.
///
/// # Errors
///
/// Returns [`ScoringError`] if a NaN appears at any stage; the caller
/// converts that to an `Error` verdict with zero confidence.
pub fn score(
    model: &dyn ScoringModel,
    features: &FeatureVector,
) -> Result<(Verdict, f64), ScoringError> {
    let raw = features.as_array();
    let scaled = model.transform(&raw);
    if scaled.iter().any(|v| !v.is_finite()) {
        return Err(ScoringError::NonFinite {
            stage: "scaler transform",
        });
    }

    let cluster = model.assign(&scaled);
    let verdict = verdict_for_cluster(cluster);

    let centroid = model
        .centroid_of(cluster)
        .ok_or(ScoringError::UnknownCluster(cluster))?;
    let distance = euclidean_distance(&scaled, centroid);
    if !distance.is_finite() {
        return Err(ScoringError::NonFinite {
            stage: "centroid distance",
        });
    }

    let raw_score = sigmoid(SIGMOID_GAIN * (distance / DISTANCE_SCALE - 0.5));
    let score = match verdict {
        Verdict::Phishing => raw_score.clamp(PHISHING_SCORE_BAND[0], PHISHING_SCORE_BAND[1]),
        _ => (1.0 - raw_score).clamp(SAFE_SCORE_BAND[0], SAFE_SCORE_BAND[1]),
    };
    if !score.is_finite() {
        return Err(ScoringError::NonFinite {
            stage: "score clamp",
        });
    }

    log::debug!(
        "Scored features: cluster={cluster}, verdict={verdict}, distance={distance:.4}, score={score:.4}"
    );
    Ok((verdict, score))
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
