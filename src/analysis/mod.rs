/// Analysis core: peak detection, envelope extraction, and the log-linear
/// decay fit.  Pure functions over plain slices; no I/O and no shared state.
///
/// Pipeline:
/// ```text
///   (time, amplitude)
///        │
///        ▼
///   ┌────────────┐
///   │ find_peaks  │  strict local maxima → indices
///   └────────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ extract_envelope  │  (peak time, amplitude, ln amplitude)
///   └──────────────────┘
///        │
///        ▼
///   ┌──────┐
///   │ fit   │  OLS on ln(amplitude) vs time → slope, intercept, r²
///   └──────┘
/// ```
pub mod fit;
pub mod peaks;

use serde::Serialize;
use thiserror::Error;

pub use fit::FitResult;
pub use peaks::Envelope;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Terminal failure states of an analysis run.  Each variant carries a
/// distinct user-facing message; no partial results are produced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    #[error("time column has {time} rows but amplitude column has {amplitude}")]
    LengthMismatch { time: usize, amplitude: usize },
    #[error("the selected columns contain no data")]
    EmptyInput,
    #[error("no peaks detected in the amplitude signal")]
    NoPeaksDetected,
    #[error("peak at t = {time} has non-positive amplitude {amplitude}; its logarithm is undefined")]
    InvalidAmplitude { time: f64, amplitude: f64 },
    #[error("{count} peak(s) found, but at least 2 are required to fit a line")]
    InsufficientData { count: usize },
    #[error("the fit is degenerate: the peak data does not determine a line")]
    DegenerateFit,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Row indices of the detected peaks, ascending.
    pub peak_indices: Vec<usize>,
    pub envelope: Envelope,
    pub fit: FitResult,
}

/// Run the full envelope analysis on one (time, amplitude) series.
///
/// Validates the inputs, detects peaks, extracts the upper envelope, and
/// fits ln(amplitude) vs time.  All-or-nothing: any failure aborts the run
/// with a terminal [`AnalysisError`].
pub fn analyze(time: &[f64], amplitude: &[f64]) -> Result<AnalysisResult, AnalysisError> {
    if time.len() != amplitude.len() {
        return Err(AnalysisError::LengthMismatch {
            time: time.len(),
            amplitude: amplitude.len(),
        });
    }
    if time.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let peak_indices = peaks::find_peaks(amplitude);
    if peak_indices.is_empty() {
        return Err(AnalysisError::NoPeaksDetected);
    }

    let envelope = peaks::extract_envelope(time, amplitude, &peak_indices)?;
    let fit = fit::fit(&envelope.times, &envelope.log_amplitudes)?;

    Ok(AnalysisResult {
        peak_indices,
        envelope,
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            analyze(&[0.0, 1.0], &[1.0]),
            Err(AnalysisError::LengthMismatch { time: 2, amplitude: 1 })
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: [f64; 0] = [];
        assert_eq!(analyze(&empty, &empty), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn flat_signal_has_no_peaks() {
        let time = [0.0, 1.0, 2.0, 3.0, 4.0];
        let amplitude = [1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(analyze(&time, &amplitude), Err(AnalysisError::NoPeaksDetected));
    }

    #[test]
    fn non_positive_peak_fails_before_the_fit() {
        // Exactly one local maximum, and it is negative.
        let time = [0.0, 1.0, 2.0];
        let amplitude = [-3.0, -1.0, -2.0];
        assert_eq!(
            analyze(&time, &amplitude),
            Err(AnalysisError::InvalidAmplitude {
                time: 1.0,
                amplitude: -1.0,
            })
        );
    }

    #[test]
    fn single_peak_is_insufficient_for_a_fit() {
        let time = [0.0, 1.0, 2.0];
        let amplitude = [0.0, 1.0, 0.0];
        assert_eq!(
            analyze(&time, &amplitude),
            Err(AnalysisError::InsufficientData { count: 1 })
        );
    }

    #[test]
    fn decaying_oscillation_end_to_end() {
        let time = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let amplitude = [0.0, 1.0, 0.5, 0.8, 0.3, 0.6, 0.1];

        let result = analyze(&time, &amplitude).unwrap();
        assert_eq!(result.peak_indices, vec![1, 3, 5]);
        assert_eq!(result.envelope.times, vec![1.0, 3.0, 5.0]);

        // Closed-form OLS over (1, ln 1), (3, ln 0.8), (5, ln 0.6).
        let x = [1.0, 3.0, 5.0];
        let y = [1.0f64.ln(), 0.8f64.ln(), 0.6f64.ln()];
        let x_mean = x.iter().sum::<f64>() / 3.0;
        let y_mean = y.iter().sum::<f64>() / 3.0;
        let num: f64 = x
            .iter()
            .zip(&y)
            .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
            .sum();
        let den: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();
        let expected_slope = num / den;
        let expected_intercept = y_mean - expected_slope * x_mean;

        assert!(result.fit.slope < 0.0, "decay must have a negative slope");
        assert!((result.fit.slope - expected_slope).abs() < 1e-12);
        assert!((result.fit.intercept - expected_intercept).abs() < 1e-12);
        assert!((result.fit.decay_rate() + expected_slope).abs() < 1e-12);
        assert!(result.fit.r_squared > 0.0 && result.fit.r_squared <= 1.0);
    }

    #[test]
    fn error_messages_are_distinct() {
        let errors = [
            AnalysisError::LengthMismatch { time: 1, amplitude: 2 }.to_string(),
            AnalysisError::EmptyInput.to_string(),
            AnalysisError::NoPeaksDetected.to_string(),
            AnalysisError::InvalidAmplitude { time: 0.0, amplitude: -1.0 }.to_string(),
            AnalysisError::InsufficientData { count: 1 }.to_string(),
            AnalysisError::DegenerateFit.to_string(),
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in errors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
