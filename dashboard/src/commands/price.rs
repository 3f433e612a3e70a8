//! Price command implementation
//!
//! Premium and Greeks of a single option, vega and rho shown per 1%.

use bsm_pricing::analytic::PricingEngine;
use bsm_pricing::common::{EngineConfig, OptionParameters, OptionType, PercentGreeks, PricingResult};
use serde::Serialize;
use tracing::info;

use crate::inputs::{OptionArgs, Theta};
use crate::Result;

#[derive(Serialize)]
struct PriceReport {
    parameters: OptionParameters,
    raw: PricingResult,
    display: PercentGreeks,
}

/// Run the price command
pub fn run(args: &OptionArgs, theta: Theta, currency: &str, json: bool) -> Result<()> {
    let params = args.to_params()?;
    info!(?params, ?theta, "pricing option");

    let engine = PricingEngine::new(EngineConfig::builder().theta(theta.into()).build());
    let raw = engine.price_and_greeks(params)?;
    let display = raw.per_one_percent();

    if json {
        let report = PriceReport {
            parameters: params,
            raw,
            display,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render(params.option_type, &display, currency));
    }
    Ok(())
}

pub fn premium_line(option_type: OptionType, premium: f64, currency: &str) -> String {
    format!("{} Option Premium: {}{:.2}", option_type, currency, premium)
}

pub fn render(option_type: OptionType, view: &PercentGreeks, currency: &str) -> String {
    format!(
        "{}\n\nGreeks\n- Delta: {:.4}\n- Gamma: {:.8}\n- Theta: {:.4}\n- Vega: {:.4} per 1%\n- Rho: {:.4} per 1%",
        premium_line(option_type, view.premium, currency),
        view.delta,
        view.gamma,
        view.theta,
        view.vega_per_pct,
        view.rho_per_pct,
    )
}
