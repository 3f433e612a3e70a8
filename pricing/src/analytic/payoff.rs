//! Profit and loss at expiry, net of the premium paid.

use ndarray::Array1;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::black_scholes::PricingEngine;
use crate::common::{OptionParameters, OptionType};
use crate::error::PricingOutcome;

/// Terminal spot prices and the matching profit of a long option position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PayoffDiagram {
    pub option_type: OptionType,
    pub strike: f64,
    pub premium: f64,
    pub terminal_spots: Array1<f64>,
    pub profit: Array1<f64>,
}

impl PayoffDiagram {
    pub fn break_even(&self) -> f64 {
        break_even(self.option_type, self.strike, self.premium)
    }
}

/// `max(s - K, 0) - premium` for calls and `max(K - s, 0) - premium` for puts,
/// for every terminal spot `s`.
pub fn payoff(
    option_type: OptionType,
    strike: f64,
    premium: f64,
    terminal_spots: &[f64],
) -> Array1<f64> {
    terminal_spots
        .iter()
        .map(|&s| option_type.intrinsic(s, strike) - premium)
        .collect()
}

/// Terminal spot at which the position neither gains nor loses.
pub fn break_even(option_type: OptionType, strike: f64, premium: f64) -> f64 {
    match option_type {
        OptionType::Call => strike + premium,
        OptionType::Put => strike - premium,
    }
}

/// `points` terminal spots spread linearly from half to one and a half times the current spot.
pub fn terminal_spot_range(spot: f64, points: usize) -> Array1<f64> {
    Array1::linspace(0.5 * spot, 1.5 * spot, points)
}

impl PricingEngine {
    /// Prices the option and sweeps its payoff over [`terminal_spot_range`].
    pub fn payoff_diagram(
        &self,
        params: OptionParameters,
        points: usize,
    ) -> PricingOutcome<PayoffDiagram> {
        let premium = self.premium(params)?;
        let terminal_spots = terminal_spot_range(params.spot, points);
        let profit = payoff(
            params.option_type,
            params.strike,
            premium,
            &terminal_spots.to_vec(),
        );
        Ok(PayoffDiagram {
            option_type: params.option_type,
            strike: params.strike,
            premium,
            terminal_spots,
            profit,
        })
    }
}

/// [`PricingEngine::payoff_diagram`] with the default configuration.
pub fn payoff_diagram(params: OptionParameters, points: usize) -> PricingOutcome<PayoffDiagram> {
    PricingEngine::default().payoff_diagram(params, points)
}
