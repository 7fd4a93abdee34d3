use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

/// Fixed example dataset offered for download (File → Save example data…).
const EXAMPLE_CSV: &str = include_str!("../../assets/example.csv");

// ---------------------------------------------------------------------------
// Left side panel – column selection and fit summary
// ---------------------------------------------------------------------------

/// Render the left analysis panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis");
    ui.separator();

    let headers = match &state.table {
        Some(table) => table.headers.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let mut selection_changed = false;

    ui.strong("Time column");
    egui::ComboBox::from_id_salt("time_column")
        .selected_text(&state.time_column)
        .show_ui(ui, |ui: &mut Ui| {
            for name in &headers {
                if ui
                    .selectable_label(state.time_column == *name, name)
                    .clicked()
                {
                    state.time_column = name.clone();
                    selection_changed = true;
                }
            }
        });

    ui.add_space(4.0);
    ui.strong("Amplitude column");
    egui::ComboBox::from_id_salt("amplitude_column")
        .selected_text(&state.amplitude_column)
        .show_ui(ui, |ui: &mut Ui| {
            for name in &headers {
                if ui
                    .selectable_label(state.amplitude_column == *name, name)
                    .clicked()
                {
                    state.amplitude_column = name.clone();
                    selection_changed = true;
                }
            }
        });

    if selection_changed {
        state.run_analysis();
    }

    ui.separator();
    ui.strong("Fit summary");
    match &state.analysis {
        None => {
            ui.label("Open a file to run the analysis.");
        }
        Some(Err(message)) => {
            ui.label(RichText::new(message).color(Color32::RED));
        }
        Some(Ok(result)) => {
            ui.monospace(format!("slope (decay rate): {:.5}", result.fit.slope));
            ui.monospace(format!("intercept:          {:.5}", result.fit.intercept));
            ui.monospace(format!("R²:                 {:.4}", result.fit.r_squared));
            ui.add_space(4.0);
            ui.label(format!("{} peaks detected", result.envelope.len()));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.result().is_some(), egui::Button::new("Save report…"))
                .clicked()
            {
                save_report_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Save example data…").clicked() {
                save_example_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows × {} columns",
                table.len(),
                table.headers.len()
            ));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open time-series data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.len(),
                    table.headers
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn save_report_dialog(state: &mut AppState) {
    let json = match state.report() {
        Some(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialise report: {e}");
                state.status_message = Some(format!("Error: {e}"));
                return;
            }
        },
        None => return,
    };

    let file = rfd::FileDialog::new()
        .set_title("Save analysis report")
        .set_file_name("envelope_report.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match std::fs::write(&path, json) {
            Ok(()) => {
                log::info!("Saved report to {}", path.display());
                state.status_message = Some(format!("Report saved to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save report: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

fn save_example_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save example data")
        .set_file_name("example_oscillation.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match std::fs::write(&path, EXAMPLE_CSV) {
            Ok(()) => {
                log::info!("Saved example data to {}", path.display());
                state.status_message = Some(format!("Example saved to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save example data: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
