use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Raw data table (read-only)
// ---------------------------------------------------------------------------

/// Render the full loaded table.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view its rows  (File → Open…)");
        });
        return;
    };

    ui.push_id("data_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true).at_least(60.0), table.headers.len())
            .header(20.0, |mut header| {
                for name in &table.headers {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, table.len(), |mut row| {
                    let cells = &table.rows[row.index()];
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Peak table: time, amplitude, ln(amplitude)
// ---------------------------------------------------------------------------

/// Render the detected peaks with their natural logarithms.
pub fn peak_table(ui: &mut Ui, state: &AppState) {
    let Some(result) = state.result() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Peaks appear here once the analysis succeeds");
        });
        return;
    };

    let envelope = &result.envelope;

    ui.push_id("peak_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true).at_least(120.0), 3)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Peak time");
                });
                header.col(|ui| {
                    ui.strong("Peak amplitude");
                });
                header.col(|ui| {
                    ui.strong("ln(peak amplitude)");
                });
            })
            .body(|body| {
                body.rows(18.0, envelope.len(), |mut row| {
                    let i = row.index();
                    row.col(|ui| {
                        ui.label(envelope.times[i].to_string());
                    });
                    row.col(|ui| {
                        ui.label(envelope.amplitudes[i].to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.6}", envelope.log_amplitudes[i]));
                    });
                });
            });
    });
}
