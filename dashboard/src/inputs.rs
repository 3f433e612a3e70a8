//! Dashboard inputs and the ranges of the sliders they replace.
//!
//! The ranges keep every value inside the domain of the pricing formulas, so
//! the engine only rejects inputs that bypass this layer.

use bsm_pricing::common::{OptionParameters, OptionType, ThetaConvention};
use clap::{Args, ValueEnum};

use crate::error::{CliError, Result};

/// Closed interval of admissible values for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Slider {
    pub const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    pub fn check(&self, value: f64) -> Result<f64> {
        // NaN fails both comparisons
        if value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(CliError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const SPOT: Slider = Slider::new("spot", 50.0, 1000.0);
pub const STRIKE: Slider = Slider::new("strike", 50.0, 1000.0);
pub const TIME_TO_EXPIRY: Slider = Slider::new("time to expiry", 0.1, 10.0);
pub const RATE: Slider = Slider::new("risk-free rate", 0.0, 0.2);
pub const VOLATILITY: Slider = Slider::new("volatility", 0.1, 1.5);

/// Closed interval of admissible sample counts for one grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointCount {
    pub name: &'static str,
    pub min: usize,
    pub max: usize,
}

impl PointCount {
    pub const fn new(name: &'static str, min: usize, max: usize) -> Self {
        Self { name, min, max }
    }

    pub fn check(&self, points: usize) -> Result<usize> {
        if (self.min..=self.max).contains(&points) {
            Ok(points)
        } else {
            Err(CliError::PointsOutOfRange {
                name: self.name,
                points,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const PAYOFF_POINTS: PointCount = PointCount::new("points", 2, 10_000);
pub const VOL_POINTS: PointCount = PointCount::new("vol points", 2, 1_000);
pub const TIME_POINTS: PointCount = PointCount::new("time points", 2, 1_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Call,
    Put,
}

impl From<Kind> for OptionType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Call => OptionType::Call,
            Kind::Put => OptionType::Put,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theta {
    Reference,
    Textbook,
}

impl From<Theta> for ThetaConvention {
    fn from(theta: Theta) -> Self {
        match theta {
            Theta::Reference => ThetaConvention::Reference,
            Theta::Textbook => ThetaConvention::Textbook,
        }
    }
}

/// Market inputs shared by every command.
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Spot price (S)
    #[arg(short = 's', long, default_value_t = 350.0)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(short = 'k', long, default_value_t = 280.0)]
    pub strike: f64,

    /// Annualized risk-free rate (r)
    #[arg(short = 'r', long, default_value_t = 0.10)]
    pub rate: f64,
}

impl MarketArgs {
    /// `(spot, strike, rate)` after range checks.
    pub fn checked(&self) -> Result<(f64, f64, f64)> {
        Ok((
            SPOT.check(self.spot)?,
            STRIKE.check(self.strike)?,
            RATE.check(self.rate)?,
        ))
    }
}

/// Inputs describing a single option.
#[derive(Debug, Clone, Args)]
pub struct OptionArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Time to expiry in years (T)
    #[arg(short = 't', long, default_value_t = 2.5)]
    pub time: f64,

    /// Annualized volatility (σ)
    #[arg(long = "vol", default_value_t = 0.75)]
    pub volatility: f64,

    /// Option type
    #[arg(long = "type", value_enum, default_value_t = Kind::Call)]
    pub kind: Kind,
}

impl OptionArgs {
    pub fn to_params(&self) -> Result<OptionParameters> {
        let (spot, strike, rate) = self.market.checked()?;
        Ok(OptionParameters::new(
            spot,
            strike,
            TIME_TO_EXPIRY.check(self.time)?,
            rate,
            VOLATILITY.check(self.volatility)?,
            self.kind.into(),
        ))
    }
}
