//! Black-Scholes-Merton pricing of European options.
//!
//! - [`analytic::PricingEngine`]: premium and the Greeks delta, gamma, theta, vega and rho
//! - [`analytic::SurfaceGenerator`]: call premiums over a volatility × time grid
//! - [`analytic::payoff()`]: profit at expiry net of the premium
//!
//! Every function is pure; invalid inputs are rejected with
//! [`PricingError::InvalidParameter`] and never clamped.
//!
//! ```rust
//! use bsm_pricing::analytic::price_and_greeks;
//! use bsm_pricing::common::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! let res = price_and_greeks(params).unwrap();
//! assert!((res.premium - 10.4506).abs() < 1e-3);
//! ```

pub mod analytic;
pub mod common;
mod error;

pub use error::{PricingError, PricingOutcome};
