use log::{debug, trace};

use crate::{
    config::Config,
    point::{Point, PointSet},
    random::{OsRandom, RandomRange},
    regression::{self, LinearFit},
};

/// Which coordinate a fabricator fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Compute y from x. The x values are left untouched.
    YFromX,
    /// Compute x from y by inverting the line. The y values are left untouched.
    XFromY,
}

/// A linear model fitted to observed points, used to fabricate new ones.
///
/// A fabricator starts out "perfect": the fitted gradient and y-intercept with
/// an error range of zero. Noise is added per point within the error range,
/// and systematic error can be injected by perturbing the gradient or
/// y-intercept.
#[derive(Debug, Clone)]
pub struct Fabricator<R = OsRandom> {
    gradient: f64,
    y_intercept: f64,
    error_range: f64,
    rng: R,
}

impl Fabricator<OsRandom> {
    /// Fits a fabricator to the points, drawing noise from the OS CSPRNG.
    ///
    /// See [`regression::fit`] for behavior on degenerate input.
    #[must_use]
    pub fn fit(points: &PointSet) -> Self {
        Self::fit_with(points, OsRandom)
    }
}

impl<R: RandomRange> Fabricator<R> {
    /// Fits a fabricator to the points using the given source of randomness.
    #[must_use]
    pub fn fit_with(points: &PointSet, rng: R) -> Self {
        let LinearFit {
            gradient,
            y_intercept,
        } = regression::fit(points.as_slice());

        Self {
            gradient,
            y_intercept,
            error_range: 0.0,
            rng,
        }
    }

    #[must_use]
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    #[must_use]
    pub fn y_intercept(&self) -> f64 {
        self.y_intercept
    }

    /// Returns the half-width of the noise window around each fabricated value.
    #[must_use]
    pub fn error_range(&self) -> f64 {
        self.error_range
    }

    /// Returns the current line, ignoring the error range.
    #[must_use]
    pub fn line(&self) -> LinearFit {
        LinearFit {
            gradient: self.gradient,
            y_intercept: self.y_intercept,
        }
    }

    /// Sets the half-width of the noise window around each fabricated value.
    pub fn set_error_range(&mut self, range: f64) {
        self.error_range = range;
    }

    /// Redraws the gradient uniformly within `range` of its current value.
    ///
    /// Repeated calls compound.
    pub fn perturb_gradient(&mut self, range: f64) {
        let previous = self.gradient;
        self.gradient = self.rng.random_range(previous - range, previous + range);
        debug!("perturbed gradient {previous} -> {}", self.gradient);
    }

    /// Redraws the y-intercept uniformly within `range` of its current value.
    ///
    /// Repeated calls compound.
    pub fn perturb_y_intercept(&mut self, range: f64) {
        let previous = self.y_intercept;
        self.y_intercept = self.rng.random_range(previous - range, previous + range);
        debug!("perturbed y-intercept {previous} -> {}", self.y_intercept);
    }

    /// Sets the error range and applies the configured perturbations.
    ///
    /// Zero perturbation ranges leave the corresponding parameter untouched.
    pub fn configure(&mut self, config: &Config) {
        self.set_error_range(config.error_range());

        if config.gradient_error() > 0.0 {
            self.perturb_gradient(config.gradient_error());
        }
        if config.y_intercept_error() > 0.0 {
            self.perturb_y_intercept(config.y_intercept_error());
        }
    }

    /// Fills in one coordinate of every point in the set.
    ///
    /// Each call draws fresh noise per point, so applying to fresh copies of
    /// the same set yields independent trials. Point order is irrelevant.
    pub fn apply(&self, fill: Fill, points: &mut PointSet) {
        self.apply_slice(fill, points.as_mut_slice());
    }

    /// Fills in one coordinate of every point in the slice.
    ///
    /// For [`Fill::XFromY`] the line is inverted and the error range is divided
    /// by the gradient, so a negative gradient flips the noise window and a
    /// zero gradient yields non-finite values.
    pub fn apply_slice(&self, fill: Fill, points: &mut [Point]) {
        trace!("applying {fill:?} to {} points", points.len());

        match fill {
            Fill::YFromX => {
                for point in points {
                    let y = point.x * self.gradient + self.y_intercept;
                    point.y = self
                        .rng
                        .random_range(y - self.error_range, y + self.error_range);
                }
            }
            Fill::XFromY => {
                let gradient = 1.0 / self.gradient;
                let y_intercept = -self.y_intercept / self.gradient;
                let error_range = self.error_range / self.gradient;

                for point in points {
                    let x = point.y * gradient + y_intercept;
                    point.x = self.rng.random_range(x - error_range, x + error_range);
                }
            }
        }
    }

    /// Generates `count` independent trials from a template set.
    ///
    /// The template itself is not modified.
    #[must_use]
    pub fn trials(&self, fill: Fill, template: &PointSet, count: usize) -> Vec<PointSet> {
        (0..count)
            .map(|_| {
                let mut trial = template.clone();
                self.apply(fill, &mut trial);
                trial
            })
            .collect()
    }
}
