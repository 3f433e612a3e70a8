use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, ensure_total_volatility, PricingOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Value of the option at expiry for a terminal asset price.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionParameters {
    /// the asset's price at time t
    pub spot: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiry: f64,
    /// the annualized, continuously compounded risk-free interest rate
    pub risk_free_rate: f64,
    /// the annualized standard deviation of the stock's returns
    pub volatility: f64,
    pub option_type: OptionType,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        }
    }

    /// Copy of the parameters with a different option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub fn with_time_to_expiry(self, time_to_expiry: f64) -> Self {
        Self {
            time_to_expiry,
            ..self
        }
    }

    /// Checks that the parameters lie inside the domain of the BSM formula:
    /// spot, strike, time and volatility strictly positive, rate finite, and
    /// σ·√T a positive finite divisor.
    pub fn validate(&self) -> PricingOutcome<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry", self.time_to_expiry)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        ensure_positive("volatility", self.volatility)?;
        ensure_total_volatility(self.volatility, self.time_to_expiry)
    }

    /// e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }
}

/// Premium and first order sensitivities of a single option.
///
/// Vega and rho are raw values, i.e. per unit (100%) change of volatility and rate.
/// Use [`PricingResult::per_one_percent`] for the display convention.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingResult {
    pub premium: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl PricingResult {
    /// Vega and rho rescaled to a 1% move of volatility and rate.
    pub fn per_one_percent(&self) -> PercentGreeks {
        PercentGreeks {
            premium: self.premium,
            delta: self.delta,
            gamma: self.gamma,
            theta: self.theta,
            vega_per_pct: self.vega / 100.0,
            rho_per_pct: self.rho / 100.0,
        }
    }
}

/// Display view of a [`PricingResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PercentGreeks {
    pub premium: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega_per_pct: f64,
    pub rho_per_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use assert_approx_eq::assert_approx_eq;

    fn atm_call() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
    }

    #[test]
    fn intrinsic_value() {
        assert_eq!(OptionType::Call.intrinsic(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.intrinsic(80.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.intrinsic(120.0, 100.0), 0.0);
    }

    #[test]
    fn valid_parameters() {
        assert!(atm_call().validate().is_ok());
        assert!(atm_call().with_option_type(OptionType::Put).validate().is_ok());

        let mut negative_rate = atm_call();
        negative_rate.risk_free_rate = -0.01;
        assert!(negative_rate.validate().is_ok());
    }

    #[test]
    fn invalid_parameters() {
        assert!(atm_call().with_volatility(0.0).validate().is_err());
        assert!(atm_call().with_time_to_expiry(0.0).validate().is_err());

        let mut p = atm_call();
        p.spot = -5.0;
        assert!(p.validate().is_err());

        let mut p = atm_call();
        p.strike = 0.0;
        assert!(p.validate().is_err());

        let mut p = atm_call();
        p.risk_free_rate = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn underflowing_total_volatility_is_invalid() {
        // both positive, but σ·√T rounds to 0
        let p = atm_call().with_volatility(1e-300).with_time_to_expiry(1e-300);
        assert_eq!(p.volatility * p.time_to_expiry.sqrt(), 0.0);
        assert!(matches!(
            p.validate(),
            Err(PricingError::InvalidParameter {
                name: "volatility * sqrt(time_to_expiry)",
                ..
            })
        ));

        // overflow to infinity is rejected as well
        let p = atm_call().with_volatility(1e300).with_time_to_expiry(1e300);
        assert!(p.validate().is_err());
    }

    #[test]
    fn percent_view_only_rescales_vega_and_rho() {
        let raw = PricingResult {
            premium: 10.0,
            delta: 0.6,
            gamma: 0.02,
            theta: -6.0,
            vega: 37.5,
            rho: 53.2,
        };
        let view = raw.per_one_percent();
        assert_eq!(view.premium, raw.premium);
        assert_eq!(view.delta, raw.delta);
        assert_eq!(view.gamma, raw.gamma);
        assert_eq!(view.theta, raw.theta);
        assert_eq!(view.vega_per_pct, 0.375);
        assert_approx_eq!(view.rho_per_pct, 0.532, 1e-12);
    }

    #[test]
    fn option_type_display() {
        assert_eq!(OptionType::Call.to_string(), "Call");
        assert_eq!(OptionType::Put.to_string(), "Put");
    }
}
