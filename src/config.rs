use std::env;
use std::path::PathBuf;

pub const SCALER_PATH_VAR: &str = "BODYFAT_SCALER_PATH";
pub const MODEL_PATH_VAR: &str = "BODYFAT_MODEL_PATH";

const DEFAULT_SCALER_PATH: &str = "scaler.json";
const DEFAULT_MODEL_PATH: &str = "lasso_model.json";

/// Where the pre-trained artifacts live on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub model: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            scaler: PathBuf::from(DEFAULT_SCALER_PATH),
            model: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ArtifactPaths {
    /// Read the paths from the environment, falling back to the working directory defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };
        Self {
            scaler: pick(SCALER_PATH_VAR, defaults.scaler),
            model: pick(MODEL_PATH_VAR, defaults.model),
        }
    }
}
