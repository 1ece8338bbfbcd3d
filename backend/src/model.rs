use ndarray::Array1;
use serde::Deserialize;
use shared::{FEATURE_COUNT, FEATURE_NAMES};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model artifact carries {found} {kind}, expected {expected}")]
    Arity {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("model artifact feature order {found:?} does not match {expected:?}")]
    FeatureOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("model artifact has a non-positive scaler std for feature {0}")]
    DegenerateScaler(String),
}

/// Capability the engine needs from a regression backend: one scalar out
/// of a fixed-order feature row. Any trained regressor that honors the
/// `FEATURE_NAMES` order can stand in for the shipped linear artifact.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64;
}

/// On-disk artifact layout. Scaler statistics and coefficients are
/// index-aligned with `feature_names`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub scaler_mean: Vec<f64>,
    pub scaler_std: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Standardized linear regressor:
/// `y = intercept + coef . ((x - mean) / std)`.
pub struct LinearRegressor {
    mean: Array1<f64>,
    std_inv: Array1<f64>,
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegressor {
    pub fn load(path: &str) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_string(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact
            .feature_names
            .iter()
            .map(String::as_str)
            .ne(FEATURE_NAMES)
        {
            return Err(ModelError::FeatureOrder {
                expected: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
                found: artifact.feature_names,
            });
        }

        for (kind, values) in [
            ("scaler means", &artifact.scaler_mean),
            ("scaler stds", &artifact.scaler_std),
            ("coefficients", &artifact.coefficients),
        ] {
            if values.len() != FEATURE_COUNT {
                return Err(ModelError::Arity {
                    kind,
                    expected: FEATURE_COUNT,
                    found: values.len(),
                });
            }
        }

        if let Some(index) = artifact.scaler_std.iter().position(|std| *std <= 0.0) {
            return Err(ModelError::DegenerateScaler(
                artifact.feature_names[index].clone(),
            ));
        }

        Ok(Self {
            mean: Array1::from_vec(artifact.scaler_mean),
            std_inv: artifact.scaler_std.iter().map(|std| 1.0 / std).collect(),
            coefficients: Array1::from_vec(artifact.coefficients),
            intercept: artifact.intercept,
        })
    }
}

impl Predictor for LinearRegressor {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let row = Array1::from_iter(features.iter().copied());
        let standardized = (row - &self.mean) * &self.std_inv;
        standardized.dot(&self.coefficients) + self.intercept
    }
}
