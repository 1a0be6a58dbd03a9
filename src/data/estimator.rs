use thiserror::Error;

use super::model::{FEATURE_COUNT, Gender, MeasurementSet, PredictionResult};
use super::range::HealthyRange;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("{stage}: expected {expected} features, got {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
}

fn check_arity(stage: &'static str, expected: usize, features: &[f64]) -> Result<(), EstimateError> {
    if features.len() != expected {
        return Err(EstimateError::DimensionMismatch {
            stage,
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Pre-fitted feature transform.
pub trait Scaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, EstimateError>;
}

/// Pre-trained regression model.
pub trait Predictor {
    fn predict(&self, features: &[f64]) -> Result<f64, EstimateError>;
}

/// Standardisation `(x - mean) / scale`, as fitted by scikit-learn's `StandardScaler`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// `mean` and `scale` must have the same length. A zero scale entry
    /// (constant feature) divides by one instead.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, EstimateError> {
        check_arity("scaler", mean.len(), &scale)?;
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect();
        Ok(Self { mean, scale })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, EstimateError> {
        check_arity("scaler", self.n_features(), features)?;
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&mu, &s))| (x - mu) / s)
            .collect())
    }
}

/// `intercept + coef · x`, the prediction rule of scikit-learn's linear models.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coef: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Self {
        Self { coef, intercept }
    }

    pub fn n_features(&self) -> usize {
        self.coef.len()
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, EstimateError> {
        check_arity("model", self.n_features(), features)?;
        Ok(self.intercept
            + self
                .coef
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>())
    }
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// Scales a measurement set, runs the model, and classifies the result.
#[derive(Debug, Clone)]
pub struct Estimator<S, P> {
    scaler: S,
    model: P,
}

impl<S: Scaler, P: Predictor> Estimator<S, P> {
    pub fn new(scaler: S, model: P) -> Self {
        Self { scaler, model }
    }

    /// One synchronous prediction. Gender only selects the healthy range;
    /// it is never a model input.
    pub fn estimate(
        &self,
        measurements: &MeasurementSet,
        gender: Gender,
    ) -> Result<PredictionResult, EstimateError> {
        let features: [f64; FEATURE_COUNT] = measurements.to_features();
        let scaled = self.scaler.transform(&features)?;
        log::debug!("Scaled features: {scaled:?}");
        let body_fat = self.model.predict(&scaled)?;

        let healthy_range = HealthyRange::for_gender(gender);
        let within_healthy_range = healthy_range.contains(body_fat);
        log::info!("Predicted body fat {body_fat:.2}% for {gender} (healthy: {within_healthy_range})");

        Ok(PredictionResult {
            body_fat,
            gender,
            healthy_range,
            within_healthy_range,
        })
    }
}
