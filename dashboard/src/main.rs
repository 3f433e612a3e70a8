//! bsm - Black-Scholes-Merton option dashboard
//!
//! # Commands
//!
//! - `bsm price` - premium and Greeks of a European call or put
//! - `bsm payoff` - profit and loss at expiry over a range of terminal spots
//! - `bsm surface` - call premiums over volatility and time to expiry
//!
//! Inputs are checked against the ranges of the original sliders before they
//! reach the pricing library. Set `RUST_LOG` or pass `--verbose` for logs.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod inputs;

pub use error::{CliError, Result};
use inputs::{MarketArgs, OptionArgs, Theta};

/// Black-Scholes-Merton option dashboard
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Premium and Greeks of one option
    Price {
        #[command(flatten)]
        option: OptionArgs,

        /// Theta formula for puts
        #[arg(long, value_enum, default_value_t = Theta::Reference)]
        theta: Theta,

        /// Currency symbol shown before the premium
        #[arg(long, default_value = "₹")]
        currency: String,
    },

    /// Profit and loss at expiry, net of the premium
    Payoff {
        #[command(flatten)]
        option: OptionArgs,

        /// Number of terminal spots between 0.5 S and 1.5 S (2 to 10000)
        #[arg(long, default_value_t = 100)]
        points: usize,

        /// Currency symbol
        #[arg(long, default_value = "₹")]
        currency: String,
    },

    /// Call premium surface over volatility and time to expiry
    Surface {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of volatility samples (2 to 1000)
        #[arg(long, default_value_t = 50)]
        vol_points: usize,

        /// Number of time to expiry samples (2 to 1000)
        #[arg(long, default_value_t = 50)]
        time_points: usize,

        /// Price the grid cells on all cores
        #[arg(long)]
        parallel: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("verbose mode enabled");

    let outcome = match &cli.command {
        Commands::Price {
            option,
            theta,
            currency,
        } => commands::price::run(option, *theta, currency, cli.json),
        Commands::Payoff {
            option,
            points,
            currency,
        } => commands::payoff::run(option, *points, currency, cli.json),
        Commands::Surface {
            market,
            vol_points,
            time_points,
            parallel,
        } => commands::surface::run(market, *vol_points, *time_points, *parallel, cli.json),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn price_defaults_follow_the_sliders() {
        let cli = Cli::parse_from(["bsm", "price"]);
        match cli.command {
            Commands::Price {
                option,
                theta,
                currency,
            } => {
                assert_eq!(option.market.spot, 350.0);
                assert_eq!(option.market.strike, 280.0);
                assert_eq!(option.time, 2.5);
                assert_eq!(option.volatility, 0.75);
                assert_eq!(option.kind, inputs::Kind::Call);
                assert_eq!(theta, Theta::Reference);
                assert_eq!(currency, "₹");
            }
            _ => panic!("expected price command"),
        }
    }

    #[test]
    fn parses_put_with_overrides() {
        let cli = Cli::parse_from([
            "bsm", "--json", "payoff", "-s", "100", "-k", "90", "--vol", "0.3", "--type", "put",
            "--points", "20",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Payoff { option, points, .. } => {
                assert_eq!(option.market.spot, 100.0);
                assert_eq!(option.market.strike, 90.0);
                assert_eq!(option.volatility, 0.3);
                assert_eq!(option.kind, inputs::Kind::Put);
                assert_eq!(points, 20);
            }
            _ => panic!("expected payoff command"),
        }
    }
}
