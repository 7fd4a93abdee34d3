use serde::Serialize;

use crate::analysis::{self, AnalysisResult};
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which dataset view fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Amplitude vs time with the envelope overlay.
    Signal,
    /// ln(amplitude) vs time with the fitted line.
    LogFit,
    /// The raw table, read-only.
    Data,
    /// The peak table with ln values.
    Peaks,
}

/// The numeric series selected for analysis, cached off the table.
pub struct SignalSeries {
    pub time: Vec<f64>,
    pub amplitude: Vec<f64>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until the user opens a file).
    pub table: Option<Table>,

    /// Selected time column name.
    pub time_column: String,

    /// Selected amplitude (displacement) column name.
    pub amplitude_column: String,

    /// Numeric series extracted from the selected columns.
    pub series: Option<SignalSeries>,

    /// Outcome of the latest analysis run; `Err` holds the user-facing
    /// message for the failure.
    pub analysis: Option<Result<AnalysisResult, String>>,

    /// Active central-panel view.
    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            time_column: String::new(),
            amplitude_column: String::new(),
            series: None,
            analysis: None,
            view: View::Signal,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table: default the column selection to the
    /// first two columns and run the analysis.
    pub fn set_table(&mut self, table: Table) {
        self.time_column = table.headers.first().cloned().unwrap_or_default();
        self.amplitude_column = table.headers.get(1).cloned().unwrap_or_default();
        self.table = Some(table);
        self.status_message = None;
        self.run_analysis();
    }

    /// Re-run the analysis on the currently selected columns.  Triggered by
    /// a file load or a column-selection change; each run is independent
    /// and recomputes everything from the table.
    pub fn run_analysis(&mut self) {
        self.series = None;
        self.analysis = None;

        let Some(table) = &self.table else { return };

        let columns = table
            .numeric_column(&self.time_column)
            .and_then(|time| {
                table
                    .numeric_column(&self.amplitude_column)
                    .map(|amplitude| (time, amplitude))
            });

        match columns {
            Ok((time, amplitude)) => {
                let outcome = analysis::analyze(&time, &amplitude);
                match &outcome {
                    Ok(result) => log::info!(
                        "fit over {} peaks: slope={:.5}, intercept={:.5}, r²={:.4}",
                        result.envelope.len(),
                        result.fit.slope,
                        result.fit.intercept,
                        result.fit.r_squared,
                    ),
                    Err(e) => log::warn!("analysis failed: {e}"),
                }
                self.series = Some(SignalSeries { time, amplitude });
                self.analysis = Some(outcome.map_err(|e| e.to_string()));
            }
            Err(e) => {
                log::warn!("column selection failed: {e}");
                self.analysis = Some(Err(e.to_string()));
            }
        }
    }

    /// Successful analysis result, if the latest run produced one.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.analysis {
            Some(Ok(result)) => Some(result),
            _ => None,
        }
    }

    /// Exportable summary of the current run, if it succeeded.
    pub fn report(&self) -> Option<Report<'_>> {
        let result = self.result()?;
        Some(Report {
            time_column: &self.time_column,
            amplitude_column: &self.amplitude_column,
            samples: self.series.as_ref().map_or(0, |s| s.time.len()),
            decay_rate: result.fit.decay_rate(),
            analysis: result,
        })
    }
}

// ---------------------------------------------------------------------------
// Report export
// ---------------------------------------------------------------------------

/// JSON-serialisable summary of one analysis run.
#[derive(Serialize)]
pub struct Report<'a> {
    pub time_column: &'a str,
    pub amplitude_column: &'a str,
    pub samples: usize,
    pub decay_rate: f64,
    pub analysis: &'a AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Table, Value};

    fn oscillation_table() -> Table {
        let time = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let amplitude = [0.0, 1.0, 0.5, 0.8, 0.3, 0.6, 0.1];
        let rows = time
            .iter()
            .zip(&amplitude)
            .map(|(&t, &a)| vec![Value::Float(t), Value::Float(a)])
            .collect();
        Table::new(vec!["time".to_string(), "displacement".to_string()], rows)
    }

    #[test]
    fn loading_a_table_runs_the_analysis() {
        let mut state = AppState::default();
        state.set_table(oscillation_table());

        assert_eq!(state.time_column, "time");
        assert_eq!(state.amplitude_column, "displacement");

        let result = state.result().expect("analysis should succeed");
        assert_eq!(result.peak_indices, vec![1, 3, 5]);
        assert!(result.fit.slope < 0.0);

        let report = state.report().expect("report available after success");
        assert_eq!(report.samples, 7);
        assert!((report.decay_rate + result.fit.slope).abs() < 1e-12);
    }

    #[test]
    fn bad_column_selection_surfaces_a_message() {
        let mut state = AppState::default();
        state.set_table(oscillation_table());
        state.amplitude_column = "velocity".to_string();
        state.run_analysis();

        assert!(state.result().is_none());
        assert!(state.report().is_none());
        let message = state.analysis.as_ref().unwrap().as_ref().unwrap_err();
        assert!(message.contains("velocity"));
    }

    #[test]
    fn analysis_failure_keeps_the_raw_series() {
        let rows = (0..5)
            .map(|i| vec![Value::Integer(i), Value::Integer(1)])
            .collect();
        let mut state = AppState::default();
        state.set_table(Table::new(vec!["t".to_string(), "a".to_string()], rows));

        // Flat signal: no peaks, but the signal plot still has data.
        assert!(state.result().is_none());
        assert!(state.series.is_some());
    }
}
