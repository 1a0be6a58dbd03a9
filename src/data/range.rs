use std::fmt;

use super::model::Gender;

// ---------------------------------------------------------------------------
// Healthy range table
// ---------------------------------------------------------------------------

/// Inclusive body-fat interval in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthyRange {
    pub lower: f64,
    pub upper: f64,
}

const MALE_HEALTHY: HealthyRange = HealthyRange { lower: 6.0, upper: 24.0 };
const FEMALE_HEALTHY: HealthyRange = HealthyRange { lower: 14.0, upper: 31.0 };

impl HealthyRange {
    pub fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => MALE_HEALTHY,
            Gender::Female => FEMALE_HEALTHY,
        }
    }

    /// `lower <= value <= upper`. NaN is never inside.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl fmt::Display for HealthyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% – {}%", self.lower, self.upper)
    }
}

// ---------------------------------------------------------------------------
// ACE body fat chart
// ---------------------------------------------------------------------------

/// One row of the ACE guideline chart.
#[derive(Debug, Clone, Copy)]
pub struct AceCategory {
    pub name: &'static str,
    pub men: Band,
    pub women: Band,
}

/// A chart cell: `upper` is `None` for the open-ended "25+" style rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub upper: Option<f64>,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "{}–{}", self.lower, upper),
            None => write!(f, "{}+", self.lower),
        }
    }
}

const fn band(lower: f64, upper: f64) -> Band {
    Band { lower, upper: Some(upper) }
}

const fn open_band(lower: f64) -> Band {
    Band { lower, upper: None }
}

/// American Council on Exercise categories.
pub const ACE_CHART: [AceCategory; 5] = [
    AceCategory { name: "Essential Fat", men: band(2.0, 5.0), women: band(10.0, 13.0) },
    AceCategory { name: "Athletes", men: band(6.0, 13.0), women: band(14.0, 20.0) },
    AceCategory { name: "Fitness", men: band(14.0, 17.0), women: band(21.0, 24.0) },
    AceCategory { name: "Acceptable", men: band(18.0, 24.0), women: band(25.0, 31.0) },
    AceCategory { name: "Obese", men: open_band(25.0), women: open_band(32.0) },
];

impl AceCategory {
    pub fn band(&self, gender: Gender) -> Band {
        match gender {
            Gender::Male => self.men,
            Gender::Female => self.women,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_bounds_are_inclusive() {
        let r = HealthyRange::for_gender(Gender::Male);
        assert!(r.contains(6.0));
        assert!(r.contains(24.0));
        assert!(!r.contains(5.999));
        assert!(!r.contains(24.001));
    }

    #[test]
    fn female_bounds_are_inclusive() {
        let r = HealthyRange::for_gender(Gender::Female);
        assert!(r.contains(14.0));
        assert!(r.contains(31.0));
        assert!(!r.contains(13.999));
        assert!(!r.contains(31.001));
    }

    #[test]
    fn nan_is_outside() {
        assert!(!HealthyRange::for_gender(Gender::Male).contains(f64::NAN));
    }

    #[test]
    fn range_labels() {
        assert_eq!(HealthyRange::for_gender(Gender::Male).to_string(), "6% – 24%");
        assert_eq!(HealthyRange::for_gender(Gender::Female).to_string(), "14% – 31%");
    }

    #[test]
    fn ace_chart_cells() {
        let rows: Vec<(String, String, String)> = ACE_CHART
            .iter()
            .map(|c| (c.name.to_string(), c.men.to_string(), c.women.to_string()))
            .collect();
        let expected = [
            ("Essential Fat", "2–5", "10–13"),
            ("Athletes", "6–13", "14–20"),
            ("Fitness", "14–17", "21–24"),
            ("Acceptable", "18–24", "25–31"),
            ("Obese", "25+", "32+"),
        ];
        for (row, (name, men, women)) in rows.iter().zip(expected) {
            assert_eq!(row.0, name);
            assert_eq!(row.1, men);
            assert_eq!(row.2, women);
        }
    }
}
