use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BodyFatApp {
    pub state: AppState,
}

impl BodyFatApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for BodyFatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: form, result, info ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::measurement_form(ui, &mut self.state);
                    panels::predict_controls(ui, &mut self.state);
                    panels::result_panel(ui, &self.state);
                    if self.state.result.is_some() {
                        plot::range_plot(ui, &self.state);
                    }
                    panels::info_panels(ui);
                });
        });
    }
}
