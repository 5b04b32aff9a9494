use thiserror::Error;

/// Errors reported by the checked least-squares fit.
///
/// The unchecked [`fit`](crate::fit) never returns these; it lets degenerate
/// input produce non-finite values instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// No points were supplied.
    #[error("cannot fit a line to an empty point set")]
    Empty,

    /// Every point shares the same x, so the gradient is undefined.
    #[error("all points share the same x value")]
    ZeroVariance,

    /// The computed gradient or intercept is not finite.
    #[error("fitted line is not finite")]
    NonFinite,
}

/// Errors that can occur when validating a fabrication config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("error_range must be finite and non-negative")]
    ErrorRange,

    #[error("gradient_error must be finite and non-negative")]
    GradientError,

    #[error("y_intercept_error must be finite and non-negative")]
    YInterceptError,
}
