use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, VLine};

use crate::data::range::ACE_CHART;
use crate::state::AppState;

/// Width drawn for the open-ended top category.
const OPEN_BAND_WIDTH: f64 = 15.0;

// ---------------------------------------------------------------------------
// Range chart (below the result)
// ---------------------------------------------------------------------------

/// ACE categories for the selected gender as coloured bands, with a marker at
/// the last prediction.
pub fn range_plot(ui: &mut Ui, state: &AppState) {
    let gender = state.result.map(|r| r.gender).unwrap_or(state.gender);

    Plot::new("range_plot")
        .height(90.0)
        .legend(Legend::default())
        .x_axis_label(format!("Body fat % ({gender})"))
        .show_axes([true, false])
        .show_grid([true, false])
        .include_y(-1.0)
        .include_y(1.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for category in &ACE_CHART {
                let band = category.band(gender);
                let upper = band.upper.unwrap_or(band.lower + OPEN_BAND_WIDTH);
                let points: PlotPoints = vec![[band.lower, 0.0], [upper, 0.0]].into();

                let line = Line::new(points)
                    .name(format!("{} ({band})", category.name))
                    .color(state.colors.color_for(category))
                    .width(14.0);

                plot_ui.line(line);
            }

            if let Some(result) = &state.result {
                plot_ui.vline(
                    VLine::new(result.body_fat)
                        .name(result.formatted())
                        .color(Color32::WHITE)
                        .width(2.0),
                );
            }
        });
}
