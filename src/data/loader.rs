use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use thiserror::Error;

use super::estimator::{Estimator, LinearModel, StandardScaler};
use super::model::{FEATURE_COUNT, feature_names};
use crate::config::ArtifactPaths;

/// Row label carrying the intercept in CSV model files.
pub const INTERCEPT_ROW: &str = "(intercept)";

/// The scaler or model could not be loaded. Prediction is impossible until the
/// files are fixed and the application restarted.
#[derive(Debug, Error)]
#[error("failed to load {}: {reason}", .path.display())]
pub struct ArtifactLoadError {
    pub path: PathBuf,
    pub reason: String,
}

/// The pre-trained collaborators, loaded once at start-up.
pub type LoadedEstimator = Estimator<StandardScaler, LinearModel>;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load scaler and model from the configured paths.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<LoadedEstimator, ArtifactLoadError> {
    let scaler = load_scaler(&paths.scaler).map_err(|e| ArtifactLoadError {
        path: paths.scaler.clone(),
        reason: format!("{e:#}"),
    })?;
    let model = load_model(&paths.model).map_err(|e| ArtifactLoadError {
        path: paths.model.clone(),
        reason: format!("{e:#}"),
    })?;
    log::info!(
        "Loaded scaler from {} and model from {}",
        paths.scaler.display(),
        paths.model.display()
    );
    Ok(Estimator::new(scaler, model))
}

/// Load a fitted standard scaler.  Dispatch by extension.
///
/// * `.json` – `{ "feature_names": [...], "mean": [...], "scale": [...] }`
/// * `.csv`  – header `feature,mean,scale`, one row per feature
pub fn load_scaler(path: &Path) -> Result<StandardScaler> {
    let (names, mean, scale) = match extension(path).as_str() {
        "json" => {
            let file: ScalerJson = read_json(path)?;
            (file.feature_names, file.mean, file.scale)
        }
        "csv" => {
            let rows: Vec<ScalerRow> = read_csv(path)?;
            let names = rows.iter().map(|r| r.feature.clone()).collect();
            let mean = rows.iter().map(|r| r.mean).collect();
            let scale = rows.iter().map(|r| r.scale).collect();
            (Some(names), mean, scale)
        }
        other => bail!("Unsupported scaler file extension: .{other}"),
    };

    check_feature_names(names.as_deref())?;
    check_values("mean", &mean)?;
    check_values("scale", &scale)?;
    Ok(StandardScaler::new(mean, scale)?)
}

/// Load a trained linear model.  Dispatch by extension.
///
/// * `.json` – `{ "feature_names": [...], "coef": [...], "intercept": 0.0 }`
/// * `.csv`  – header `feature,coef`, one row per feature plus one
///   [`INTERCEPT_ROW`] row
pub fn load_model(path: &Path) -> Result<LinearModel> {
    let (names, coef, intercept) = match extension(path).as_str() {
        "json" => {
            let file: ModelJson = read_json(path)?;
            (file.feature_names, file.coef, file.intercept)
        }
        "csv" => {
            let rows: Vec<ModelRow> = read_csv(path)?;
            let mut intercept = None;
            let mut names = Vec::with_capacity(FEATURE_COUNT);
            let mut coef = Vec::with_capacity(FEATURE_COUNT);
            for row in rows {
                if row.feature == INTERCEPT_ROW {
                    ensure!(intercept.is_none(), "duplicate {INTERCEPT_ROW} row");
                    intercept = Some(row.coef);
                } else {
                    names.push(row.feature);
                    coef.push(row.coef);
                }
            }
            let intercept = intercept.with_context(|| format!("missing {INTERCEPT_ROW} row"))?;
            (Some(names), coef, intercept)
        }
        other => bail!("Unsupported model file extension: .{other}"),
    };

    check_feature_names(names.as_deref())?;
    check_values("coef", &coef)?;
    ensure!(intercept.is_finite(), "intercept is not finite: {intercept}");
    Ok(LinearModel::new(coef, intercept))
}

// ---------------------------------------------------------------------------
// File formats
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ScalerJson {
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ModelJson {
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    coef: Vec<f64>,
    intercept: f64,
}

#[derive(Debug, Deserialize)]
struct ScalerRow {
    feature: String,
    mean: f64,
    scale: f64,
}

#[derive(Debug, Deserialize)]
struct ModelRow {
    feature: String,
    coef: f64,
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON")
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;
    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(row_no, rec)| rec.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Names are optional, but when present they must list the features in order.
fn check_feature_names(names: Option<&[String]>) -> Result<()> {
    let Some(names) = names else {
        return Ok(());
    };
    let expected = feature_names();
    ensure!(
        names.len() == expected.len(),
        "expected {} feature names, got {}",
        expected.len(),
        names.len()
    );
    for (i, (got, want)) in names.iter().zip(&expected).enumerate() {
        ensure!(got == want, "feature {i} is '{got}', expected '{want}'");
    }
    Ok(())
}

fn check_values(what: &str, values: &[f64]) -> Result<()> {
    ensure!(
        values.len() == FEATURE_COUNT,
        "{what} has {} entries, expected {FEATURE_COUNT}",
        values.len()
    );
    if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        bail!("{what}[{i}] is not finite: {v}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::data::estimator::{Predictor, Scaler};
    use crate::data::model::{Gender, MeasurementSet};

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn scaler_json(names: Vec<&str>) -> String {
        json!({
            "feature_names": names,
            "mean": vec![1.0; FEATURE_COUNT],
            "scale": vec![2.0; FEATURE_COUNT],
        })
        .to_string()
    }

    fn model_json() -> String {
        json!({
            "coef": (0..FEATURE_COUNT).map(|i| i as f64).collect::<Vec<_>>(),
            "intercept": 20.0,
        })
        .to_string()
    }

    #[test]
    fn loads_json_artifacts() {
        let dir = TempDir::new().unwrap();
        let paths = ArtifactPaths {
            scaler: write(&dir, "scaler.json", &scaler_json(feature_names())),
            model: write(&dir, "model.json", &model_json()),
        };
        let est = load_artifacts(&paths).unwrap();
        let result = est.estimate(&MeasurementSet::from_features([1.0; FEATURE_COUNT]), Gender::Male);
        assert_eq!(result.unwrap().body_fat, 20.0);
    }

    #[test]
    fn loads_csv_artifacts() {
        let dir = TempDir::new().unwrap();
        let mut scaler_csv = String::from("feature,mean,scale\n");
        let mut model_csv = String::from("feature,coef\n");
        for name in feature_names() {
            scaler_csv.push_str(&format!("{name},10.0,5.0\n"));
            model_csv.push_str(&format!("{name}, 1.0\n"));
        }
        model_csv.push_str("(intercept),3.5\n");

        let scaler = load_scaler(&write(&dir, "scaler.csv", &scaler_csv)).unwrap();
        let model = load_model(&write(&dir, "model.csv", &model_csv)).unwrap();

        let scaled = scaler.transform(&[20.0; FEATURE_COUNT]).unwrap();
        assert_eq!(scaled, vec![2.0; FEATURE_COUNT]);
        assert_eq!(model.predict(&scaled).unwrap(), 3.5 + 2.0 * FEATURE_COUNT as f64);
    }

    #[test]
    fn rejects_reordered_feature_names() {
        let dir = TempDir::new().unwrap();
        let mut names = feature_names();
        names.swap(0, 1);
        let err = load_scaler(&write(&dir, "scaler.json", &scaler_json(names))).unwrap_err();
        assert!(format!("{err:#}").contains("feature 0 is 'Age', expected 'Density'"));
    }

    #[test]
    fn rejects_wrong_arity() {
        let dir = TempDir::new().unwrap();
        let text = json!({ "coef": [1.0, 2.0], "intercept": 0.0 }).to_string();
        let err = load_model(&write(&dir, "model.json", &text)).unwrap_err();
        assert!(err.to_string().contains("coef has 2 entries, expected 14"));
    }

    #[test]
    fn rejects_non_finite_csv_values() {
        let dir = TempDir::new().unwrap();
        let mut text = String::from("feature,mean,scale\n");
        for (i, name) in feature_names().into_iter().enumerate() {
            let mean = if i == 3 { "NaN" } else { "0.0" };
            text.push_str(&format!("{name},{mean},1.0\n"));
        }
        let err = load_scaler(&write(&dir, "scaler.csv", &text)).unwrap_err();
        assert!(err.to_string().contains("mean[3] is not finite"));
    }

    #[test]
    fn rejects_missing_intercept_row() {
        let dir = TempDir::new().unwrap();
        let mut text = String::from("feature,coef\n");
        for name in feature_names() {
            text.push_str(&format!("{name},1.0\n"));
        }
        let err = load_model(&write(&dir, "model.csv", &text)).unwrap_err();
        assert!(err.to_string().contains("missing (intercept) row"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let err = load_model(&write(&dir, "lasso_model.joblib", "")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported model file extension: .joblib");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let paths = ArtifactPaths {
            scaler: dir.path().join("absent.json"),
            model: dir.path().join("absent_model.json"),
        };
        let err = load_artifacts(&paths).unwrap_err();
        assert_eq!(err.path, paths.scaler);
        assert!(err.to_string().starts_with("failed to load "));
        assert!(err.reason.contains("reading JSON file"));
    }

    #[test]
    fn missing_model_names_the_model_path() {
        let dir = TempDir::new().unwrap();
        let paths = ArtifactPaths {
            scaler: write(&dir, "scaler.json", &scaler_json(feature_names())),
            model: dir.path().join("absent_model.csv"),
        };
        let err = load_artifacts(&paths).unwrap_err();
        assert_eq!(err.path, paths.model);
        assert!(err.reason.contains("opening CSV"));
    }
}
