//! Sampled functions over integer positions, with the probability
//! distributions of dice sums built on top of them.
//!
//! ```
//! let normal = dice_func::dice_prob_func_from_notation("2d6").unwrap();
//! let cumulative = normal.cumulative();
//! assert!((cumulative.get(12).unwrap() - 1.0).abs() < 1e-9);
//! assert_eq!(cumulative.inverse().get(6), Some(0.5));
//! ```

pub mod common;
pub mod config;
pub mod dice;
pub mod error;
pub mod parse;
pub mod plot;
pub mod roll;
pub mod sampled;

pub use config::{ConfigError, PlotConfig};
pub use dice::{dice_conv_func, dice_prob_func, Dice};
pub use error::{Error, Result};
pub use plot::Plotter;
pub use roll::Roller;
pub use sampled::SampledFunc;

/// Parses `notation` (such as `"2d6"`) and builds the triangular probability
/// distribution of those dice.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed notation and
/// [`Error::InvalidInput`] for well-formed notation with non-positive values.
pub fn dice_prob_func_from_notation(notation: &str) -> Result<SampledFunc> {
    notation.parse::<Dice>()?.prob_func()
}
