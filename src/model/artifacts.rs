//! Serialized forms of the pre-fit scaler and clustering model.
//!
//! The artifacts are produced by an external training pipeline and shipped
//! alongside the binary as JSON. Loading validates shape and contents
//! strictly: a process that starts with a malformed model would classify
//! garbage, so every check here is fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::FEATURE_DIM;
use crate::error_handling::ModelLoadError;

/// Pre-fit standardization parameters: per-feature mean and scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    /// Per-feature means subtracted during transform.
    pub mean: Vec<f64>,
    /// Per-feature divisors applied after centering.
    pub scale: Vec<f64>,
}

/// Pre-fit cluster centroids in scaled feature space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterArtifact {
    /// Centroid matrix, one row per cluster.
    pub centroids: Vec<Vec<f64>>,
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelLoadError> {
    if !path.exists() {
        return Err(ModelLoadError::Missing(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl ScalerArtifact {
    /// Loads and validates a scaler artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let artifact: ScalerArtifact = read_artifact(path)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.mean.len() != FEATURE_DIM {
            return Err(ModelLoadError::Invalid(format!(
                "scaler mean has {} components, expected {FEATURE_DIM}",
                self.mean.len()
            )));
        }
        if self.scale.len() != FEATURE_DIM {
            return Err(ModelLoadError::Invalid(format!(
                "scaler scale has {} components, expected {FEATURE_DIM}",
                self.scale.len()
            )));
        }
        if self.mean.iter().any(|v| !v.is_finite()) {
            return Err(ModelLoadError::Invalid(
                "scaler mean contains a non-finite value".into(),
            ));
        }
        if self.scale.iter().any(|v| !v.is_finite() || *v == 0.0) {
            return Err(ModelLoadError::Invalid(
                "scaler scale contains a zero or non-finite value".into(),
            ));
        }
        Ok(())
    }
}

impl ClusterArtifact {
    /// Loads and validates a clustering artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let artifact: ClusterArtifact = read_artifact(path)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.centroids.is_empty() {
            return Err(ModelLoadError::Invalid("model has no centroids".into()));
        }
        for (i, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != FEATURE_DIM {
                return Err(ModelLoadError::Invalid(format!(
                    "centroid {i} has {} components, expected {FEATURE_DIM}",
                    centroid.len()
                )));
            }
            if centroid.iter().any(|v| !v.is_finite()) {
                return Err(ModelLoadError::Invalid(format!(
                    "centroid {i} contains a non-finite value"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_scaler_load_valid() {
        let file = write_temp(r#"{"mean":[1,2,3,4,5],"scale":[1,1,1,1,1]}"#);
        let scaler = ScalerArtifact::load(file.path()).unwrap();
        assert_eq!(scaler.mean, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_scaler_load_missing_file() {
        let err = ScalerArtifact::load(Path::new("/nonexistent/scaler.json")).unwrap_err();
        assert!(matches!(err, ModelLoadError::Missing(_)));
    }

    #[test]
    fn test_scaler_load_malformed_json() {
        let file = write_temp("not json");
        let err = ScalerArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Parse { .. }));
    }

    #[test]
    fn test_scaler_rejects_wrong_dimension() {
        let file = write_temp(r#"{"mean":[1,2,3],"scale":[1,1,1]}"#);
        let err = ScalerArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Invalid(_)));
    }

    #[test]
    fn test_scaler_rejects_zero_scale() {
        let file = write_temp(r#"{"mean":[0,0,0,0,0],"scale":[1,1,0,1,1]}"#);
        let err = ScalerArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Invalid(_)));
    }

    #[test]
    fn test_cluster_load_valid() {
        let file = write_temp(r#"{"centroids":[[0,0,0,0,0],[1,1,1,1,1]]}"#);
        let clusters = ClusterArtifact::load(file.path()).unwrap();
        assert_eq!(clusters.centroids.len(), 2);
    }

    #[test]
    fn test_cluster_rejects_empty_matrix() {
        let file = write_temp(r#"{"centroids":[]}"#);
        let err = ClusterArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Invalid(_)));
    }

    #[test]
    fn test_cluster_rejects_ragged_centroid() {
        let file = write_temp(r#"{"centroids":[[0,0,0,0,0],[1,1]]}"#);
        let err = ClusterArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Invalid(_)));
    }
}
