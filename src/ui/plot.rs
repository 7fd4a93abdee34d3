use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Signal plot: amplitude vs time with the envelope overlay
// ---------------------------------------------------------------------------

/// Render the raw signal with the detected envelope points on top.
pub fn signal_plot(ui: &mut Ui, state: &AppState) {
    let Some(series) = &state.series else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view the signal  (File → Open…)");
        });
        return;
    };

    Plot::new("signal_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label(&state.time_column)
        .y_axis_label(&state.amplitude_column)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let signal: PlotPoints = series
                .time
                .iter()
                .zip(series.amplitude.iter())
                .map(|(&t, &a)| [t, a])
                .collect();
            plot_ui.line(
                Line::new(signal)
                    .name("Displacement")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );

            if let Some(result) = state.result() {
                let envelope: PlotPoints = result
                    .envelope
                    .times
                    .iter()
                    .zip(result.envelope.amplitudes.iter())
                    .map(|(&t, &a)| [t, a])
                    .collect();
                plot_ui.points(
                    Points::new(envelope)
                        .name("Envelope")
                        .color(Color32::RED)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Fit plot: ln(amplitude) vs time with the regression line
// ---------------------------------------------------------------------------

/// Render the log-transformed peaks and the fitted decay line.
pub fn fit_plot(ui: &mut Ui, state: &AppState) {
    let Some(result) = state.result() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The fit appears here once the analysis succeeds");
        });
        return;
    };

    let fit_label = format!(
        "Fit: ln(A) = {:.4}t + {:.4}",
        result.fit.slope, result.fit.intercept
    );

    Plot::new("fit_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label(&state.time_column)
        .y_axis_label(format!("ln({})", state.amplitude_column))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let scatter: PlotPoints = result
                .envelope
                .times
                .iter()
                .zip(result.envelope.log_amplitudes.iter())
                .map(|(&t, &ln_a)| [t, ln_a])
                .collect();
            plot_ui.points(
                Points::new(scatter)
                    .name("ln transformed data")
                    .color(Color32::RED)
                    .radius(3.0),
            );

            let fitted: PlotPoints = result
                .envelope
                .times
                .iter()
                .zip(result.fit.predictions.iter())
                .map(|(&t, &pred)| [t, pred])
                .collect();
            plot_ui.line(
                Line::new(fitted)
                    .name(&fit_label)
                    .color(Color32::BLUE)
                    .width(1.5),
            );
        });
}
