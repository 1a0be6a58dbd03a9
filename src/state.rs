use crate::color::CategoryColors;
use crate::data::loader::{ArtifactLoadError, LoadedEstimator};
use crate::data::model::{Gender, MeasurementSet, PredictionResult};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Scaler and model, loaded once at start-up. An error here disables prediction.
    pub estimator: Result<LoadedEstimator, ArtifactLoadError>,

    /// Gender selected in the combo box.
    pub gender: Gender,

    /// Current form values.
    pub form: MeasurementSet,

    /// Outcome of the last button press.
    pub result: Option<PredictionResult>,

    /// Colours of the ACE category bands.
    pub colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(estimator: Result<LoadedEstimator, ArtifactLoadError>) -> Self {
        if let Err(e) = &estimator {
            log::error!("{e}");
        }
        Self {
            estimator,
            gender: Gender::default(),
            form: MeasurementSet::default(),
            result: None,
            colors: CategoryColors::default(),
            status_message: None,
        }
    }

    /// Whether the predict button should be offered.
    pub fn can_predict(&self) -> bool {
        self.estimator.is_ok()
    }

    /// Run the estimator once on a snapshot of the form.
    pub fn predict(&mut self) {
        let Ok(estimator) = &self.estimator else {
            return;
        };
        let measurements = self.form;
        match estimator.estimate(&measurements, self.gender) {
            Ok(result) => {
                self.result = Some(result);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Prediction failed: {e}");
                self.result = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Restore every field to its default value.
    pub fn reset_form(&mut self) {
        self.form = MeasurementSet::default();
    }
}
