use probability::distribution::{Continuous, Distribution, Gaussian};
use tracing::debug;

use crate::common::{EngineConfig, OptionParameters, OptionType, PricingResult, ThetaConvention};
use crate::error::PricingOutcome;

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// d1, d2 and the quantities shared between premium and Greeks.
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    discount: f64,
}

impl Terms {
    fn new(op: &OptionParameters) -> Self {
        let sqrt_t = op.time_to_expiry.sqrt();
        let sigma_exp = op.volatility * sqrt_t;
        let d1 = ((op.spot / op.strike).ln()
            + (op.risk_free_rate + 0.5 * op.volatility.powi(2)) * op.time_to_expiry)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        Self {
            d1,
            d2,
            sqrt_t,
            discount: op.discount_factor(),
        }
    }

    fn call(&self, op: &OptionParameters) -> f64 {
        op.spot * cdf(self.d1) - op.strike * self.discount * cdf(self.d2)
    }

    fn put(&self, op: &OptionParameters) -> f64 {
        op.strike * self.discount * cdf(-self.d2) - op.spot * cdf(-self.d1)
    }
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// Prices are unchecked: parameters outside the domain yield NaN or infinities.
/// Use [`PricingEngine`] for validated prices and Greeks.
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(op: &OptionParameters) -> f64 {
        Terms::new(op).call(op)
    }

    fn put(op: &OptionParameters) -> f64 {
        Terms::new(op).put(op)
    }
}

/// Premium and Greeks of European options under Black-Scholes-Merton.
///
/// The engine holds only its configuration and may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    config: EngineConfig,
}

impl PricingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validated premium of the option described by `params`.
    pub fn premium(&self, params: OptionParameters) -> PricingOutcome<f64> {
        validated(&params)?;
        let terms = Terms::new(&params);
        Ok(match params.option_type {
            OptionType::Call => terms.call(&params),
            OptionType::Put => terms.put(&params),
        })
    }

    /// Premium together with delta, gamma, theta, vega and rho.
    ///
    /// Vega and rho are raw (per unit move), theta is per year.
    pub fn price_and_greeks(&self, params: OptionParameters) -> PricingOutcome<PricingResult> {
        validated(&params)?;

        let op = &params;
        let terms = Terms::new(op);
        let pdf_d1 = pdf(terms.d1);
        let discounted_strike = op.strike * terms.discount;

        // same for call and put
        let gamma = pdf_d1 / (op.spot * op.volatility * terms.sqrt_t);
        let vega = op.spot * pdf_d1 * terms.sqrt_t;
        let decay = -op.spot * pdf_d1 * op.volatility / (2.0 * terms.sqrt_t);

        let result = match op.option_type {
            OptionType::Call => PricingResult {
                premium: terms.call(op),
                delta: cdf(terms.d1),
                gamma,
                theta: decay - op.risk_free_rate * discounted_strike * cdf(terms.d2),
                vega,
                rho: discounted_strike * op.time_to_expiry * cdf(terms.d2),
            },
            OptionType::Put => {
                let carry = op.risk_free_rate * discounted_strike * cdf(-terms.d2);
                let theta = match self.config.theta() {
                    ThetaConvention::Reference => decay - carry,
                    ThetaConvention::Textbook => decay + carry,
                };
                PricingResult {
                    premium: terms.put(op),
                    delta: -cdf(-terms.d1),
                    gamma,
                    theta,
                    vega,
                    rho: -discounted_strike * op.time_to_expiry * cdf(-terms.d2),
                }
            }
        };
        Ok(result)
    }
}

fn validated(params: &OptionParameters) -> PricingOutcome<()> {
    if let Err(err) = params.validate() {
        debug!(error = %err, ?params, "rejected option parameters");
        return Err(err);
    }
    Ok(())
}

/// [`PricingEngine::price_and_greeks`] with the default configuration.
pub fn price_and_greeks(params: OptionParameters) -> PricingOutcome<PricingResult> {
    PricingEngine::default().price_and_greeks(params)
}
