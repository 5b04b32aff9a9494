//! Fabricate noisy experimental data that follows a fitted linear trend.
//!
//! The crate is built from a few small pieces:
//!
//! - [`Point`] and [`PointSet`] — observed or template samples, kept in
//!   ascending order of x
//! - [`fit`] and [`try_fit`] — least-squares regression of a line
//! - [`Fabricator`] — applies a fitted (optionally perturbed) line to new
//!   points, adding uniform noise within an error range
//! - [`RandomRange`] — the injectable source of that noise, backed by the
//!   operating system's CSPRNG in [`OsRandom`]
//!
//! A typical run fits a fabricator to observations, sets an error range, and
//! generates a handful of trials from a template set:
//!
//! ```no_run
//! use fabricator::{Fill, Point, PointSet};
//!
//! let observed: PointSet = [(0.58, 0.67), (1.0, 1.68), (1.6, 3.69), (2.12, 6.03)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let mut fab = observed.fabricate();
//! fab.set_error_range(0.1);
//!
//! let template: PointSet = [0.7, 1.1, 1.4, 1.8].into_iter().map(|x| Point::new(x, 0.0)).collect();
//! for trial in fab.trials(Fill::YFromX, &template, 3) {
//!     println!("{trial:?}");
//! }
//! ```

mod config;
mod error;
mod fabricator;
mod point;
mod random;
mod regression;

pub use config::Config;
pub use error::{ConfigError, FitError};
pub use fabricator::{Fabricator, Fill};
pub use point::{Point, PointSet};
pub use random::{OsRandom, RESOLUTION, RandomRange, SeededRandom, scale};
pub use regression::{LinearFit, fit, try_fit};
