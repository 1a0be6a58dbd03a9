use std::fmt;

use super::range::HealthyRange;

// ---------------------------------------------------------------------------
// Measurement – one named input of the form
// ---------------------------------------------------------------------------

/// Number of features the scaler and model expect.
pub const FEATURE_COUNT: usize = 14;

/// A single body measurement.
///
/// The variant order is the feature order of the pre-trained scaler and model
/// and must never be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measurement {
    Density,
    Age,
    Weight,
    Height,
    Neck,
    Chest,
    Abdomen,
    Hip,
    Thigh,
    Knee,
    Ankle,
    Biceps,
    Forearm,
    Wrist,
}

impl Measurement {
    /// All measurements in feature order.
    pub const ALL: [Measurement; FEATURE_COUNT] = [
        Measurement::Density,
        Measurement::Age,
        Measurement::Weight,
        Measurement::Height,
        Measurement::Neck,
        Measurement::Chest,
        Measurement::Abdomen,
        Measurement::Hip,
        Measurement::Thigh,
        Measurement::Knee,
        Measurement::Ankle,
        Measurement::Biceps,
        Measurement::Forearm,
        Measurement::Wrist,
    ];

    /// Position of this measurement in the feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used by the training data and stored in the artifacts.
    pub fn feature_name(self) -> &'static str {
        match self {
            Measurement::Density => "Density",
            Measurement::Age => "Age",
            Measurement::Weight => "Weight",
            Measurement::Height => "Height",
            Measurement::Neck => "Neck",
            Measurement::Chest => "Chest",
            Measurement::Abdomen => "Abdomen",
            Measurement::Hip => "Hip",
            Measurement::Thigh => "Thigh",
            Measurement::Knee => "Knee",
            Measurement::Ankle => "Ankle",
            Measurement::Biceps => "Biceps",
            Measurement::Forearm => "Forearm",
            Measurement::Wrist => "Wrist",
        }
    }

    /// Form label, with units.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::Density => "Density",
            Measurement::Age => "Age",
            Measurement::Weight => "Weight (kg)",
            Measurement::Height => "Height (inches)",
            Measurement::Neck => "Neck circumference (cm)",
            Measurement::Chest => "Chest circumference (cm)",
            Measurement::Abdomen => "Abdomen circumference (cm)",
            Measurement::Hip => "Hip circumference (cm)",
            Measurement::Thigh => "Thigh circumference (cm)",
            Measurement::Knee => "Knee circumference (cm)",
            Measurement::Ankle => "Ankle circumference (cm)",
            Measurement::Biceps => "Biceps circumference (cm)",
            Measurement::Forearm => "Forearm circumference (cm)",
            Measurement::Wrist => "Wrist circumference (cm)",
        }
    }

    /// Decimals shown in the form.
    pub fn decimals(self) -> usize {
        match self {
            Measurement::Density => 4,
            _ => 2,
        }
    }

    /// Drag speed of the form widget.
    pub fn drag_speed(self) -> f64 {
        match self {
            Measurement::Density => 0.0001,
            _ => 0.1,
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Measurement::Density => 1.0853,
            Measurement::Age => 22.0,
            Measurement::Weight => 78.58,
            Measurement::Height => 72.25,
            Measurement::Neck => 38.5,
            Measurement::Chest => 93.6,
            Measurement::Abdomen => 83.0,
            Measurement::Hip => 98.7,
            Measurement::Thigh => 58.7,
            Measurement::Knee => 37.3,
            Measurement::Ankle => 23.4,
            Measurement::Biceps => 30.5,
            Measurement::Forearm => 28.9,
            Measurement::Wrist => 18.2,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}

/// Feature names in the order the artifacts must list them.
pub fn feature_names() -> Vec<&'static str> {
    Measurement::ALL.iter().map(|m| m.feature_name()).collect()
}

// ---------------------------------------------------------------------------
// MeasurementSet – one filled-in form
// ---------------------------------------------------------------------------

/// The 14 measurements of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSet {
    values: [f64; FEATURE_COUNT],
}

impl Default for MeasurementSet {
    fn default() -> Self {
        Self::from_features(Measurement::ALL.map(Measurement::default_value))
    }
}

impl MeasurementSet {
    /// Build a set from values already in feature order.
    pub fn from_features(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    #[cfg(test)]
    pub fn get(&self, m: Measurement) -> f64 {
        self.values[m.index()]
    }

    #[cfg(test)]
    pub fn set(&mut self, m: Measurement, value: f64) {
        self.values[m.index()] = value;
    }

    /// Mutable access for form widgets.
    pub fn get_mut(&mut self, m: Measurement) -> &mut f64 {
        &mut self.values[m.index()]
    }

    /// The ordered feature vector handed to the scaler.
    pub fn to_features(&self) -> [f64; FEATURE_COUNT] {
        self.values
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Plural used in result sentences ("for Males").
    pub fn plural(self) -> &'static str {
        match self {
            Gender::Male => "Males",
            Gender::Female => "Females",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

// ---------------------------------------------------------------------------
// PredictionResult
// ---------------------------------------------------------------------------

/// Outcome of one estimate: the predicted percentage and its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub body_fat: f64,
    pub gender: Gender,
    pub healthy_range: HealthyRange,
    pub within_healthy_range: bool,
}

impl PredictionResult {
    /// Percentage with two decimals, e.g. `"17.30 %"`.
    pub fn formatted(&self) -> String {
        format!("{:.2} %", self.body_fat)
    }

    /// Sentence shown under the metric.
    pub fn verdict(&self) -> String {
        if self.within_healthy_range {
            format!(
                "✅ You are in a healthy range for {} ({})",
                self.gender.plural(),
                self.healthy_range
            )
        } else {
            format!(
                "⚠️ Your predicted body fat is outside the healthy range for {} ({})",
                self.gender.plural(),
                self.healthy_range
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_order_is_fixed() {
        assert_eq!(
            feature_names(),
            vec![
                "Density", "Age", "Weight", "Height", "Neck", "Chest", "Abdomen", "Hip",
                "Thigh", "Knee", "Ankle", "Biceps", "Forearm", "Wrist",
            ]
        );
        for (i, m) in Measurement::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn defaults_match_form_defaults() {
        let set = MeasurementSet::default();
        assert_eq!(
            set.to_features(),
            [
                1.0853, 22.0, 78.58, 72.25, 38.5, 93.6, 83.0, 98.7, 58.7, 37.3, 23.4, 30.5,
                28.9, 18.2,
            ]
        );
    }

    #[test]
    fn set_only_touches_one_slot() {
        let mut set = MeasurementSet::default();
        set.set(Measurement::Hip, 101.0);
        assert_eq!(set.get(Measurement::Hip), 101.0);
        assert_eq!(set.to_features()[7], 101.0);
        assert_eq!(set.get(Measurement::Thigh), 58.7);
    }

    #[test]
    fn verdict_text() {
        let ok = PredictionResult {
            body_fat: 17.3,
            gender: Gender::Male,
            healthy_range: HealthyRange::for_gender(Gender::Male),
            within_healthy_range: true,
        };
        assert_eq!(ok.formatted(), "17.30 %");
        assert_eq!(ok.verdict(), "✅ You are in a healthy range for Males (6% – 24%)");

        let bad = PredictionResult {
            body_fat: 40.0,
            gender: Gender::Female,
            healthy_range: HealthyRange::for_gender(Gender::Female),
            within_healthy_range: false,
        };
        assert_eq!(
            bad.verdict(),
            "⚠️ Your predicted body fat is outside the healthy range for Females (14% – 31%)"
        );
    }
}
