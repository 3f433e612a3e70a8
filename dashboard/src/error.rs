use bsm_pricing::PricingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// A slider value outside the range offered to the user.
    #[error("{name} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A sample count outside what a grid may hold.
    #[error("{name} = {points} is outside the allowed range [{min}, {max}]")]
    PointsOutOfRange {
        name: &'static str,
        points: usize,
        min: usize,
        max: usize,
    },

    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("could not serialise output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
