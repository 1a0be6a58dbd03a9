use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::range::{ACE_CHART, AceCategory};

// ---------------------------------------------------------------------------
// Colour ramp
// ---------------------------------------------------------------------------

/// `n` colours from green (lean) to red (obese), evenly spaced in hue.
pub fn generate_ramp(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let steps = (n.max(2) - 1) as f32;
    (0..n)
        .map(|i| {
            let hue = 200.0 - (i as f32 / steps) * 200.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ACE category → Color32
// ---------------------------------------------------------------------------

/// One colour per row of [`ACE_CHART`].
#[derive(Debug, Clone)]
pub struct CategoryColors {
    colors: Vec<Color32>,
}

impl Default for CategoryColors {
    fn default() -> Self {
        Self {
            colors: generate_ramp(ACE_CHART.len()),
        }
    }
}

impl CategoryColors {
    pub fn color_for(&self, category: &AceCategory) -> Color32 {
        ACE_CHART
            .iter()
            .position(|c| c.name == category.name)
            .and_then(|i| self.colors.get(i).copied())
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_distinct_colour_per_category() {
        let colors = CategoryColors::default();
        let all: Vec<Color32> = ACE_CHART.iter().map(|c| colors.color_for(c)).collect();
        assert_eq!(all.len(), 5);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn ramp_edge_cases() {
        assert!(generate_ramp(0).is_empty());
        assert_eq!(generate_ramp(1).len(), 1);
    }
}
