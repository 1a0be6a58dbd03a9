/// Data layer: measurements, artifacts, and the estimator.
///
/// Architecture:
/// ```text
///  scaler.json / lasso_model.json (.csv also accepted)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → StandardScaler, LinearModel
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐   MeasurementSet, Gender
///   │ estimator  │◄──────────────────────
///   └───────────┘
///        │  scale → predict → HealthyRange lookup
///        ▼
///   PredictionResult
/// ```

pub mod estimator;
pub mod loader;
pub mod model;
pub mod range;
