//! Closed-form least-squares fitting over the housing points.
//!
//! Everything here is a pure function of its arguments: no caching, no
//! shared state. Recomputing on every input event is fine at this dataset
//! size; callers that want to memoize the fit may do so because the result
//! is deterministic in the (immutable) dataset.

use std::fmt;

use crate::domain::{HousePoint, Line};

/// A fit needs at least two points to determine slope and intercept.
pub const MIN_POINTS_FOR_FIT: usize = 2;

/// Error types for regression operations
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Fewer than two points were supplied to the fit
    InsufficientData { have: usize },
    /// All x-values are identical, the normal-equation denominator is zero
    DegenerateInput,
    /// The prediction query did not parse as a finite number
    InvalidPredictionInput(String),
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::InsufficientData { have } => {
                write!(
                    f,
                    "need at least {} points to fit a line, have {}",
                    MIN_POINTS_FOR_FIT, have
                )
            }
            RegressionError::DegenerateInput => {
                write!(f, "all areas are identical, the fit is undetermined")
            }
            RegressionError::InvalidPredictionInput(raw) => {
                write!(f, "'{}' is not a finite number", raw)
            }
        }
    }
}

impl std::error::Error for RegressionError {}

/// Sum of squared vertical deviations between `line` and the points.
///
/// Total over all real k and m; the result is always >= 0 and is 0 exactly
/// when every point lies on the line.
pub fn sum_squared_error(points: &[HousePoint], line: &Line) -> f64 {
    points
        .iter()
        .map(|p| {
            let residual = line.predict(p.area) - p.price;
            residual * residual
        })
        .sum()
}

/// Ordinary least squares: the unique line minimizing `sum_squared_error`.
///
/// Single pass over the points for the four sums, then the closed-form
/// normal-equation solution. The denominator `n*sum_xx - sum_x²` is zero
/// exactly when all x-values coincide; that case is reported rather than
/// divided through.
pub fn least_squares_fit(points: &[HousePoint]) -> Result<Line, RegressionError> {
    if points.len() < MIN_POINTS_FOR_FIT {
        return Err(RegressionError::InsufficientData { have: points.len() });
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sum_x, sum_y, sum_xy, sum_xx), p| {
            (
                sum_x + p.area,
                sum_y + p.price,
                sum_xy + p.area * p.price,
                sum_xx + p.area * p.area,
            )
        },
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(RegressionError::DegenerateInput);
    }

    let k = (n * sum_xy - sum_x * sum_y) / denominator;
    let m = (sum_y - k * sum_x) / n;
    Ok(Line::new(k, m))
}

/// Parses the free-form prediction input.
///
/// Zero and negative areas are valid inputs (the line is total over ℝ);
/// only non-numeric or non-finite text is rejected, so the caller can
/// suppress the prediction output instead of showing a garbage value.
pub fn parse_prediction_area(raw: &str) -> Result<f64, RegressionError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RegressionError::InvalidPredictionInput(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embedded_dataset;

    fn points(raw: &[(f64, f64)]) -> Vec<HousePoint> {
        raw.iter()
            .enumerate()
            .map(|(i, &(x, y))| HousePoint::new(i, x, y))
            .collect()
    }

    #[test]
    fn perfect_diagonal_fits_exactly() {
        let pts = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let fit = least_squares_fit(&pts).unwrap();
        assert!((fit.k - 1.0).abs() < 1e-12);
        assert!(fit.m.abs() < 1e-12);
        assert!(sum_squared_error(&pts, &fit) < 1e-12);
    }

    #[test]
    fn error_of_zero_line_on_single_point() {
        let pts = points(&[(1.0, 5.0)]);
        assert_eq!(sum_squared_error(&pts, &Line::new(0.0, 0.0)), 25.0);
    }

    #[test]
    fn error_is_nonnegative_and_zero_only_on_the_line() {
        let pts = points(&[(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let on_line = Line::new(2.0, 1.0);
        assert_eq!(sum_squared_error(&pts, &on_line), 0.0);

        let off_line = Line::new(2.0, 1.1);
        assert!(sum_squared_error(&pts, &off_line) > 0.0);
    }

    #[test]
    fn fit_minimizes_error_under_perturbation() {
        let pts = points(&[(1.0, 2.1), (2.0, 2.9), (3.0, 4.2), (4.0, 4.8)]);
        let fit = least_squares_fit(&pts).unwrap();
        let best = sum_squared_error(&pts, &fit);

        for delta in [-0.5, -0.01, 0.01, 0.5] {
            let nudged_k = Line::new(fit.k + delta, fit.m);
            let nudged_m = Line::new(fit.k, fit.m + delta);
            assert!(sum_squared_error(&pts, &nudged_k) >= best);
            assert!(sum_squared_error(&pts, &nudged_m) >= best);
        }
    }

    #[test]
    fn fit_is_deterministic() {
        let pts = points(&[(1.0, 1.5), (4.0, 3.5), (6.0, 5.0)]);
        let first = least_squares_fit(&pts).unwrap();
        let second = least_squares_fit(&pts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn too_few_points_is_reported() {
        assert_eq!(
            least_squares_fit(&[]),
            Err(RegressionError::InsufficientData { have: 0 })
        );
        let one = points(&[(1.0, 1.0)]);
        assert_eq!(
            least_squares_fit(&one),
            Err(RegressionError::InsufficientData { have: 1 })
        );
    }

    #[test]
    fn identical_areas_are_degenerate() {
        let pts = points(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]);
        assert_eq!(least_squares_fit(&pts), Err(RegressionError::DegenerateInput));
    }

    #[test]
    fn embedded_dataset_slope_is_positive() {
        // Price rises with area; a sign flip here means the formula broke.
        let dataset = embedded_dataset().unwrap();
        let fit = least_squares_fit(dataset.points()).unwrap();
        assert!(fit.k > 0.0);

        // Reference values computed from the table with the same formula
        assert!((fit.k - 0.0312457501).abs() < 1e-9);
        assert!((fit.m - 0.2293918589).abs() < 1e-8);
        let sse = sum_squared_error(dataset.points(), &fit);
        assert!((sse - 3.8310009145).abs() < 1e-6);
    }

    #[test]
    fn prediction_input_parsing() {
        assert_eq!(parse_prediction_area("42.5"), Ok(42.5));
        assert_eq!(parse_prediction_area(" 7 "), Ok(7.0));
        assert_eq!(parse_prediction_area("0"), Ok(0.0));
        // Negative areas parse: the distinction the caller needs is
        // numeric-vs-garbage, not plausible-vs-implausible.
        assert_eq!(parse_prediction_area("-10"), Ok(-10.0));

        for bad in ["", "abc", "NaN", "inf", "12,5"] {
            assert!(matches!(
                parse_prediction_area(bad),
                Err(RegressionError::InvalidPredictionInput(_))
            ));
        }
    }
}
