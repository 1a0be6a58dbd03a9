use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

/// Feature order shared with the predictor: (name, population mean, standard deviation).
const FEATURES: [(&str, f64, f64); 14] = [
    ("Density", 1.0556, 0.0190),
    ("Age", 44.88, 12.60),
    ("Weight", 81.16, 13.33),
    ("Height", 70.15, 3.66),
    ("Neck", 37.99, 2.43),
    ("Chest", 100.82, 8.43),
    ("Abdomen", 92.56, 10.78),
    ("Hip", 99.90, 7.16),
    ("Thigh", 59.41, 5.25),
    ("Knee", 38.59, 2.41),
    ("Ankle", 23.10, 1.69),
    ("Biceps", 32.27, 3.02),
    ("Forearm", 28.66, 2.02),
    ("Wrist", 18.23, 0.93),
];

/// Siri (1956): body fat % = 495 / density - 450.
fn siri(density: f64) -> f64 {
    495.0 / density - 450.0
}

/// First-order expansion of Siri's equation around the mean density, expressed
/// on the standardised density feature. All other coefficients stay zero, the
/// way a strongly regularised lasso fit ends up.
fn density_coefficient(mean: f64, std_dev: f64) -> f64 {
    -495.0 / (mean * mean) * std_dev
}

/// Scaler and model documents: Siri's equation expanded around the mean density.
fn demo_artifacts() -> (serde_json::Value, serde_json::Value) {
    let names: Vec<&str> = FEATURES.iter().map(|f| f.0).collect();
    let mean: Vec<f64> = FEATURES.iter().map(|f| f.1).collect();
    let scale: Vec<f64> = FEATURES.iter().map(|f| f.2).collect();

    let mut coef = vec![0.0; FEATURES.len()];
    coef[0] = density_coefficient(mean[0], scale[0]);
    let intercept = siri(mean[0]);

    let scaler = json!({ "feature_names": names, "mean": mean, "scale": scale });
    let model = json!({ "feature_names": names, "coef": coef, "intercept": intercept });
    (scaler, model)
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let (scaler, model) = demo_artifacts();

    let scaler_path = out_dir.join("scaler.json");
    write_json(&scaler_path, &scaler)?;

    let model_path = out_dir.join("lasso_model.json");
    write_json(&model_path, &model)?;

    println!(
        "Wrote {} and {} (density coefficient {:.4}, intercept {:.2}%)",
        scaler_path.display(),
        model_path.display(),
        model["coef"][0].as_f64().unwrap_or(f64::NAN),
        model["intercept"].as_f64().unwrap_or(f64::NAN)
    );
    Ok(())
}
