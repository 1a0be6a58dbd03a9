use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Gender, Measurement};
use crate::data::range::ACE_CHART;
use crate::state::AppState;

const SUCCESS: Color32 = Color32::from_rgb(46, 160, 67);
const WARNING: Color32 = Color32::from_rgb(218, 54, 51);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title, intro and artifact status.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.add_space(4.0);
    ui.heading("🏋️‍♀️ Body Fat % Estimator");
    ui.label(
        "Estimate your body fat percentage using body measurements. The prediction is \
         based on Siri's 1956 equation and a machine learning model.",
    );

    if let Err(e) = &state.estimator {
        ui.label(RichText::new(format!("Model unavailable: {e}")).color(Color32::RED));
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Input form
// ---------------------------------------------------------------------------

/// Gender selector and the two columns of measurement inputs.
pub fn measurement_form(ui: &mut Ui, state: &mut AppState) {
    egui::ComboBox::from_label("Select your gender:")
        .selected_text(state.gender.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for g in Gender::ALL {
                ui.selectable_value(&mut state.gender, g, g.to_string());
            }
        });
    ui.add_space(8.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.heading("📏 Enter Your Measurements");
        if ui.small_button("Reset to defaults").clicked() {
            state.reset_form();
        }
    });
    ui.separator();

    let (left, right) = Measurement::ALL.split_at(Measurement::ALL.len() / 2);
    ui.columns(2, |cols: &mut [Ui]| {
        for (ui, fields) in cols.iter_mut().zip([left, right]) {
            egui::Grid::new(ui.id().with(fields[0].feature_name()))
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    for &m in fields {
                        ui.label(m.label());
                        ui.add(
                            egui::DragValue::new(state.form.get_mut(m))
                                .speed(m.drag_speed())
                                .fixed_decimals(m.decimals()),
                        );
                        ui.end_row();
                    }
                });
        }
    });
}

/// The predict button, or the reason it is missing.
pub fn predict_controls(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(8.0);
    if state.can_predict() {
        if ui.button("🔍 Predict Body Fat %").clicked() {
            state.predict();
        }
    } else {
        ui.weak("Prediction disabled until the scaler and model load.");
    }

    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

pub fn result_panel(ui: &mut Ui, state: &AppState) {
    let Some(result) = &state.result else {
        return;
    };

    ui.add_space(12.0);
    ui.heading("📊 Prediction Result");
    ui.label(RichText::new("Predicted Body Fat %").small());
    ui.label(RichText::new(result.formatted()).size(32.0).strong());

    let color = if result.within_healthy_range { SUCCESS } else { WARNING };
    ui.label(RichText::new(result.verdict()).color(color));
}

// ---------------------------------------------------------------------------
// Static information
// ---------------------------------------------------------------------------

/// "About" note and the ACE guideline chart, both collapsed by default.
pub fn info_panels(ui: &mut Ui) {
    ui.add_space(12.0);
    egui::CollapsingHeader::new("ℹ️ About This Prediction")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(
                "This prediction is made using a machine learning model trained on body \
                 measurement data.",
            );
        });

    egui::CollapsingHeader::new("📚 Healthy Body Fat % Chart (ACE Guidelines)")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().at_least(120.0))
                .columns(Column::auto().at_least(80.0), 2)
                .header(20.0, |mut header| {
                    for title in ["Category", "Men (%)", "Women (%)"] {
                        header.col(|ui: &mut Ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for category in &ACE_CHART {
                        body.row(18.0, |mut row| {
                            row.col(|ui: &mut Ui| {
                                ui.label(category.name);
                            });
                            row.col(|ui: &mut Ui| {
                                ui.label(category.men.to_string());
                            });
                            row.col(|ui: &mut Ui| {
                                ui.label(category.women.to_string());
                            });
                        });
                    }
                });
        });
}
