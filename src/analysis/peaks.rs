use serde::Serialize;

use super::AnalysisError;

// ---------------------------------------------------------------------------
// Peak finder
// ---------------------------------------------------------------------------

/// Indices of strict local maxima of `amplitude`.
///
/// An interior index `i` qualifies when `amplitude[i]` is strictly greater
/// than both immediate neighbours; plateau points are never reported and the
/// first/last sample are excluded by construction.  An empty result is a
/// valid outcome (monotonic or flat input), left to the caller to interpret.
pub fn find_peaks(amplitude: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    for i in 1..amplitude.len().saturating_sub(1) {
        if amplitude[i] > amplitude[i - 1] && amplitude[i] > amplitude[i + 1] {
            peaks.push(i);
        }
    }
    peaks
}

// ---------------------------------------------------------------------------
// Envelope extraction
// ---------------------------------------------------------------------------

/// The upper envelope of the signal: peak samples in original order, with
/// their natural logarithms.  The three vectors are aligned 1:1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub times: Vec<f64>,
    pub amplitudes: Vec<f64>,
    pub log_amplitudes: Vec<f64>,
}

impl Envelope {
    /// Number of peaks in the envelope.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Map peak indices back to (time, amplitude) pairs and take ln(amplitude).
///
/// `peaks` must hold valid indices into `time`/`amplitude`.  A non-positive
/// peak amplitude has no logarithm and aborts the run with
/// [`AnalysisError::InvalidAmplitude`] instead of letting NaN propagate.
pub fn extract_envelope(
    time: &[f64],
    amplitude: &[f64],
    peaks: &[usize],
) -> Result<Envelope, AnalysisError> {
    let mut times = Vec::with_capacity(peaks.len());
    let mut amplitudes = Vec::with_capacity(peaks.len());
    let mut log_amplitudes = Vec::with_capacity(peaks.len());

    for &i in peaks {
        let a = amplitude[i];
        if a <= 0.0 {
            return Err(AnalysisError::InvalidAmplitude {
                time: time[i],
                amplitude: a,
            });
        }
        times.push(time[i]);
        amplitudes.push(a);
        log_amplitudes.push(a.ln());
    }

    Ok(Envelope {
        times,
        amplitudes,
        log_amplitudes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_are_strict_local_maxima() {
        let amplitude = [0.0, 1.0, 0.5, 0.8, 0.3, 0.6, 0.1];
        let peaks = find_peaks(&amplitude);
        assert_eq!(peaks, vec![1, 3, 5]);
        for &i in &peaks {
            assert!(amplitude[i] > amplitude[i - 1]);
            assert!(amplitude[i] > amplitude[i + 1]);
        }
    }

    #[test]
    fn monotonic_sequences_have_no_peaks() {
        assert!(find_peaks(&[1.0, 2.0, 3.0, 4.0]).is_empty());
        assert!(find_peaks(&[4.0, 3.0, 2.0, 1.0]).is_empty());
    }

    #[test]
    fn plateaus_are_not_peaks() {
        assert!(find_peaks(&[0.0, 1.0, 1.0, 0.0]).is_empty());
        assert!(find_peaks(&[1.0, 1.0, 1.0]).is_empty());
    }

    #[test]
    fn short_inputs_are_handled() {
        assert!(find_peaks(&[]).is_empty());
        assert!(find_peaks(&[1.0]).is_empty());
        assert!(find_peaks(&[1.0, 2.0]).is_empty());
    }

    #[test]
    fn envelope_preserves_order_and_takes_ln() {
        let time = [0.0, 1.0, 2.0, 3.0, 4.0];
        let amplitude = [0.0, 2.0, 0.5, 1.0, 0.1];
        let env = extract_envelope(&time, &amplitude, &[1, 3]).unwrap();

        assert_eq!(env.times, vec![1.0, 3.0]);
        assert_eq!(env.amplitudes, vec![2.0, 1.0]);
        assert!((env.log_amplitudes[0] - 2.0f64.ln()).abs() < 1e-12);
        assert!(env.log_amplitudes[1].abs() < 1e-12);
    }

    #[test]
    fn non_positive_peak_amplitude_is_an_error() {
        let time = [0.0, 1.0, 2.0];
        let amplitude = [-2.0, -0.5, -1.0];
        let err = extract_envelope(&time, &amplitude, &[1]).unwrap_err();
        match err {
            AnalysisError::InvalidAmplitude { time, amplitude } => {
                assert_eq!(time, 1.0);
                assert_eq!(amplitude, -0.5);
            }
            other => panic!("expected InvalidAmplitude, got {other:?}"),
        }
    }
}
