use serde::Serialize;

use super::AnalysisError;

// ---------------------------------------------------------------------------
// Ordinary least-squares line fit
// ---------------------------------------------------------------------------

/// Result of a least-squares line fit `y ≈ slope·x + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// Fitted values `slope·x[i] + intercept`, aligned 1:1 with the input.
    pub predictions: Vec<f64>,
}

impl FitResult {
    /// Decay rate of `A(t) = A0·e^(slope·t)`: the negated slope.
    pub fn decay_rate(&self) -> f64 {
        -self.slope
    }
}

/// Fit a straight line to `(x, y)` by ordinary least squares.
///
/// Closed form: `slope = Σ(x-x̄)(y-ȳ) / Σ(x-x̄)²`, `intercept = ȳ − slope·x̄`.
/// At least two points are required.  Zero variance in `x`, or zero variance
/// in `y` with a nonzero residual, leaves the line undetermined and is
/// reported as [`AnalysisError::DegenerateFit`].
pub fn fit(x: &[f64], y: &[f64]) -> Result<FitResult, AnalysisError> {
    debug_assert_eq!(x.len(), y.len());
    if x.len() < 2 {
        return Err(AnalysisError::InsufficientData { count: x.len() });
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut num = 0.0;
    let mut den = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        num += (xi - x_mean) * (yi - y_mean);
        den += (xi - x_mean).powi(2);
    }
    if den == 0.0 {
        return Err(AnalysisError::DegenerateFit);
    }

    let slope = num / den;
    let intercept = y_mean - slope * x_mean;
    let predictions: Vec<f64> = x.iter().map(|&xi| slope * xi + intercept).collect();

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&yi, &pred) in y.iter().zip(&predictions) {
        ss_res += (yi - pred).powi(2);
        ss_tot += (yi - y_mean).powi(2);
    }

    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res == 0.0 {
        // All y identical and perfectly reproduced: a horizontal line.
        1.0
    } else {
        return Err(AnalysisError::DegenerateFit);
    };

    Ok(FitResult {
        slope,
        intercept,
        r_squared,
        predictions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn exact_line_is_recovered() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        let fit = fit(&x, &y).unwrap();

        assert!((fit.slope - 2.0).abs() < TOL);
        assert!((fit.intercept - 2.0).abs() < TOL);
        assert!((fit.r_squared - 1.0).abs() < TOL);
        for (pred, expected) in fit.predictions.iter().zip(&y) {
            assert!((pred - expected).abs() < TOL);
        }
    }

    #[test]
    fn two_points_fit_exactly() {
        let fit = fit(&[1.0, 3.0], &[5.0, 1.0]).unwrap();
        assert!((fit.slope + 2.0).abs() < TOL);
        assert!((fit.intercept - 7.0).abs() < TOL);
        assert!((fit.r_squared - 1.0).abs() < TOL);
    }

    #[test]
    fn noisy_slope_matches_closed_form() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.1, 0.9, 0.3, 0.2, -0.4];

        // Closed-form OLS computed independently of the implementation.
        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;
        let num: f64 = x
            .iter()
            .zip(&y)
            .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
            .sum();
        let den: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();
        let expected_slope = num / den;

        let fit = fit(&x, &y).unwrap();
        assert!((fit.slope - expected_slope).abs() < TOL);
        assert!((fit.intercept - (y_mean - expected_slope * x_mean)).abs() < TOL);
        assert!(fit.r_squared > 0.0 && fit.r_squared < 1.0);
    }

    #[test]
    fn constant_y_is_a_perfect_horizontal_line() {
        let fit = fit(&[0.0, 1.0, 2.0], &[3.0, 3.0, 3.0]).unwrap();
        assert!(fit.slope.abs() < TOL);
        assert!((fit.intercept - 3.0).abs() < TOL);
        assert!((fit.r_squared - 1.0).abs() < TOL);
    }

    #[test]
    fn fewer_than_two_points_is_insufficient() {
        assert_eq!(
            fit(&[1.0], &[2.0]),
            Err(AnalysisError::InsufficientData { count: 1 })
        );
        let empty: [f64; 0] = [];
        assert_eq!(
            fit(&empty, &empty),
            Err(AnalysisError::InsufficientData { count: 0 })
        );
    }

    #[test]
    fn zero_x_variance_is_degenerate() {
        assert_eq!(
            fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(AnalysisError::DegenerateFit)
        );
    }
}
