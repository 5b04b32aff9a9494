use log::{debug, warn};

use crate::{error::FitError, point::Point};

/// A fitted line, `y = gradient * x + y_intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub gradient: f64,
    pub y_intercept: f64,
}

impl LinearFit {
    /// Returns true if both parameters are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.gradient.is_finite() && self.y_intercept.is_finite()
    }
}

/// Running sums for a least-squares fit.
#[derive(Debug, Default)]
struct Sums {
    x: f64,
    y: f64,
    xx: f64,
    xy: f64,
    count: f64,
}

impl Sums {
    fn of(points: &[Point]) -> Self {
        points.iter().fold(Self::default(), |mut sums, point| {
            sums.x += point.x;
            sums.y += point.y;
            sums.xx += point.x * point.x;
            sums.xy += point.x * point.y;
            sums.count += 1.0;
            sums
        })
    }

    fn line(&self) -> LinearFit {
        let gradient =
            (self.count * self.xy - self.x * self.y) / (self.count * self.xx - self.x * self.x);
        let y_intercept = self.y / self.count - gradient * self.x / self.count;

        LinearFit {
            gradient,
            y_intercept,
        }
    }
}

/// Fits a line to the points using least squares.
///
/// Input order does not matter. Degenerate input is not trapped: if every
/// point shares the same x the gradient is non-finite, and an empty slice
/// yields NaN for both parameters. Use [`try_fit`] to reject such input.
#[must_use]
pub fn fit(points: &[Point]) -> LinearFit {
    let line = Sums::of(points).line();

    if line.is_finite() {
        debug!(
            "fitted line to {} points: gradient = {}, y-intercept = {}",
            points.len(),
            line.gradient,
            line.y_intercept
        );
    } else {
        warn!(
            "least-squares fit over {} points is degenerate: gradient = {}, y-intercept = {}",
            points.len(),
            line.gradient,
            line.y_intercept
        );
    }

    line
}

/// Fits a line to the points, rejecting degenerate input.
///
/// # Errors
///
/// Returns an error if there are no points, if every point shares the same x,
/// or if the fitted parameters are not finite.
pub fn try_fit(points: &[Point]) -> Result<LinearFit, FitError> {
    let Some(first) = points.first() else {
        return Err(FitError::Empty);
    };

    #[allow(clippy::float_cmp)]
    if points.iter().all(|point| point.x == first.x) {
        return Err(FitError::ZeroVariance);
    }

    let line = fit(points);
    if line.is_finite() {
        Ok(line)
    } else {
        Err(FitError::NonFinite)
    }
}
