//! Payoff command implementation

use std::fmt::Write;

use bsm_pricing::analytic::{PayoffDiagram, PricingEngine};
use tracing::info;

use super::price::premium_line;
use crate::inputs::{OptionArgs, PAYOFF_POINTS};
use crate::Result;

/// Run the payoff command
pub fn run(args: &OptionArgs, points: usize, currency: &str, json: bool) -> Result<()> {
    let points = PAYOFF_POINTS.check(points)?;
    let params = args.to_params()?;
    info!(?params, points, "sweeping payoff at expiry");

    let diagram = PricingEngine::default().payoff_diagram(params, points)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&diagram)?);
    } else {
        println!("{}", render(&diagram, currency));
    }
    Ok(())
}

pub fn render(diagram: &PayoffDiagram, currency: &str) -> String {
    let mut out = premium_line(diagram.option_type, diagram.premium, currency);
    let _ = write!(
        out,
        "\nBreak-even at expiry: {}{:.2}\n\n{:>16}{:>16}",
        currency,
        diagram.break_even(),
        "Spot at expiry",
        "Profit / Loss"
    );
    for (spot, profit) in diagram.terminal_spots.iter().zip(diagram.profit.iter()) {
        let _ = write!(out, "\n{:>16.2}{:>16.2}", spot, profit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsm_pricing::analytic::payoff_diagram;
    use bsm_pricing::common::{OptionParameters, OptionType};
    use crate::inputs::{Kind, MarketArgs};
    use crate::CliError;

    #[test]
    fn render_lists_every_terminal_spot() {
        let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        let diagram = payoff_diagram(params, 5).unwrap();
        let text = render(&diagram, "$");

        assert!(text.starts_with("Call Option Premium: $10.45"));
        assert!(text.contains("Break-even at expiry: $110.45"));
        // premium, break-even, blank, header and one line per spot
        assert_eq!(text.lines().count(), 4 + 5);
        assert!(text.ends_with("150.00           39.55"));
    }

    #[test]
    fn oversized_sweep_is_rejected_before_pricing() {
        let args = OptionArgs {
            market: MarketArgs {
                spot: 350.0,
                strike: 280.0,
                rate: 0.10,
            },
            time: 2.5,
            volatility: 0.75,
            kind: Kind::Call,
        };
        for points in [0, 1, 10_001, usize::MAX] {
            assert!(matches!(
                run(&args, points, "₹", true),
                Err(CliError::PointsOutOfRange { .. })
            ));
        }
    }
}
