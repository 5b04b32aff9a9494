use crate::error::ConfigError;

/// Noise and perturbation settings for a fabricator.
///
/// Applied in one step with [`Fabricator::configure`](crate::Fabricator::configure).
/// The default is a "perfect" fabricator with no noise and no perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    error_range: f64,
    gradient_error: f64,
    y_intercept_error: f64,
}

impl Config {
    /// Creates a new config with validated ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if any range is negative or non-finite.
    pub fn new(
        error_range: f64,
        gradient_error: f64,
        y_intercept_error: f64,
    ) -> Result<Self, ConfigError> {
        if !is_valid_range(error_range) {
            return Err(ConfigError::ErrorRange);
        }
        if !is_valid_range(gradient_error) {
            return Err(ConfigError::GradientError);
        }
        if !is_valid_range(y_intercept_error) {
            return Err(ConfigError::YInterceptError);
        }

        Ok(Self {
            error_range,
            gradient_error,
            y_intercept_error,
        })
    }

    /// Returns the half-width of the per-point noise window.
    #[must_use]
    pub fn error_range(&self) -> f64 {
        self.error_range
    }

    /// Returns the half-width of the window the gradient is redrawn from.
    #[must_use]
    pub fn gradient_error(&self) -> f64 {
        self.gradient_error
    }

    /// Returns the half-width of the window the y-intercept is redrawn from.
    #[must_use]
    pub fn y_intercept_error(&self) -> f64 {
        self.y_intercept_error
    }
}

fn is_valid_range(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_is_perfect() {
        let config = Config::default();
        assert_relative_eq!(config.error_range(), 0.0);
        assert_relative_eq!(config.gradient_error(), 0.0);
        assert_relative_eq!(config.y_intercept_error(), 0.0);
    }

    #[test]
    fn accepts_non_negative_ranges() {
        let config = Config::new(0.1, 0.2, 0.0).expect("valid config");
        assert_relative_eq!(config.error_range(), 0.1);
        assert_relative_eq!(config.gradient_error(), 0.2);
        assert_relative_eq!(config.y_intercept_error(), 0.0);
    }

    #[test]
    fn rejects_negative_ranges() {
        assert_eq!(Config::new(-0.1, 0.0, 0.0), Err(ConfigError::ErrorRange));
        assert_eq!(Config::new(0.0, -1.0, 0.0), Err(ConfigError::GradientError));
        assert_eq!(
            Config::new(0.0, 0.0, -1e-9),
            Err(ConfigError::YInterceptError)
        );
    }

    #[test]
    fn rejects_non_finite_ranges() {
        assert_eq!(
            Config::new(f64::NAN, 0.0, 0.0),
            Err(ConfigError::ErrorRange)
        );
        assert_eq!(
            Config::new(0.0, f64::INFINITY, 0.0),
            Err(ConfigError::GradientError)
        );
    }
}
