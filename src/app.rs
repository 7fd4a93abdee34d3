use eframe::egui;

use crate::state::{AppState, View};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct EnvelopeApp {
    pub state: AppState,
}

impl eframe::App for EnvelopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column selection + fit summary ----
        egui::SidePanel::left("analysis_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plots and tables ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.view, View::Signal, "Signal");
                ui.selectable_value(&mut self.state.view, View::LogFit, "Log fit");
                ui.selectable_value(&mut self.state.view, View::Data, "Data");
                ui.selectable_value(&mut self.state.view, View::Peaks, "Peaks");
            });
            ui.separator();

            match self.state.view {
                View::Signal => plot::signal_plot(ui, &self.state),
                View::LogFit => plot::fit_plot(ui, &self.state),
                View::Data => table::data_table(ui, &self.state),
                View::Peaks => table::peak_table(ui, &self.state),
            }
        });
    }
}
