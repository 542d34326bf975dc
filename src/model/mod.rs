//! Pre-fit model artifacts and the scoring backend interface.
//!
//! The scaler and clustering model are opaque pre-fit objects: this crate
//! never trains them, it only loads their parameters once at startup and
//! reads them for the lifetime of the process. The [`ScoringModel`] trait is
//! the narrow seam the scorer depends on, so alternate backends can be
//! substituted without touching the scoring control flow.

mod artifacts;

pub use artifacts::{ClusterArtifact, ScalerArtifact};

use std::path::Path;

use crate::config::FEATURE_DIM;
use crate::error_handling::ModelLoadError;

/// Narrow interface over the pre-fit scaler + clustering model pair.
///
/// Implementations must be immutable after construction; the scorer assumes
/// concurrent read access without locking.
pub trait ScoringModel: Send + Sync {
    /// Applies the pre-fit standardization transform to a raw feature vector.
    fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM];

    /// Assigns a scaled vector to the nearest cluster, returning its id.
    fn assign(&self, scaled: &[f64; FEATURE_DIM]) -> usize;

    /// Returns the centroid of the given cluster, or `None` for an unknown
    /// id.
    fn centroid_of(&self, cluster: usize) -> Option<&[f64; FEATURE_DIM]>;
}

/// Standard-scaler + nearest-centroid model backed by JSON artifacts.
#[derive(Debug, Clone)]
pub struct KMeansModel {
    mean: [f64; FEATURE_DIM],
    scale: [f64; FEATURE_DIM],
    centroids: Vec<[f64; FEATURE_DIM]>,
}

impl KMeansModel {
    /// Builds a model from validated artifacts.
    pub fn from_artifacts(
        scaler: &ScalerArtifact,
        clusters: &ClusterArtifact,
    ) -> Result<Self, ModelLoadError> {
        let mean = fixed_dim(&scaler.mean, "scaler mean")?;
        let scale = fixed_dim(&scaler.scale, "scaler scale")?;
        let centroids = clusters
            .centroids
            .iter()
            .enumerate()
            .map(|(i, c)| fixed_dim(c, "centroid").map_err(|_| {
                ModelLoadError::Invalid(format!("centroid {i} has wrong dimensionality"))
            }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            mean,
            scale,
            centroids,
        })
    }

    /// Loads the scaler and clustering artifacts from disk and builds the
    /// model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError`] if either file is missing, unreadable,
    /// malformed, or dimensionally inconsistent. Callers treat this as
    /// fatal at process start.
    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, ModelLoadError> {
        let scaler = ScalerArtifact::load(scaler_path)?;
        let clusters = ClusterArtifact::load(model_path)?;
        let model = Self::from_artifacts(&scaler, &clusters)?;
        log::info!(
            "Model and scaler loaded successfully ({} clusters, {FEATURE_DIM} features)",
            model.centroids.len()
        );
        Ok(model)
    }
}

impl ScoringModel for KMeansModel {
    fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM] {
        let mut scaled = [0.0; FEATURE_DIM];
        for i in 0..FEATURE_DIM {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }

    fn assign(&self, scaled: &[f64; FEATURE_DIM]) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (id, centroid) in self.centroids.iter().enumerate() {
            let distance = squared_distance(scaled, centroid);
            if distance < best_distance {
                best_distance = distance;
                best = id;
            }
        }
        best
    }

    fn centroid_of(&self, cluster: usize) -> Option<&[f64; FEATURE_DIM]> {
        self.centroids.get(cluster)
    }
}

fn squared_distance(a: &[f64; FEATURE_DIM], b: &[f64; FEATURE_DIM]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

fn fixed_dim(values: &[f64], what: &str) -> Result<[f64; FEATURE_DIM], ModelLoadError> {
    values.try_into().map_err(|_| {
        ModelLoadError::Invalid(format!(
            "{what} has {} components, expected {FEATURE_DIM}",
            values.len()
        ))
    })
}
