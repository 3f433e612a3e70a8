//! Surface command implementation
//!
//! Call premiums over volatility and time to expiry, spot, strike and rate fixed.

use std::fmt::Write;

use bsm_pricing::analytic::{uniform_axis, SurfaceGenerator, SurfaceGrid};
use bsm_pricing::common::{EngineConfig, Evaluation};
use tracing::info;

use crate::inputs::{MarketArgs, TIME_POINTS, TIME_TO_EXPIRY, VOLATILITY, VOL_POINTS};
use crate::Result;
/// Rows and columns shown by the text rendering.
const PREVIEW: usize = 6;

/// Run the surface command
pub fn run(
    market: &MarketArgs,
    vol_points: usize,
    time_points: usize,
    parallel: bool,
    json: bool,
) -> Result<()> {
    let (spot, strike, rate) = market.checked()?;
    let vol_points = VOL_POINTS.check(vol_points)?;
    let time_points = TIME_POINTS.check(time_points)?;

    let vols = uniform_axis(VOLATILITY.min, VOLATILITY.max, vol_points).to_vec();
    let times = uniform_axis(TIME_TO_EXPIRY.min, TIME_TO_EXPIRY.max, time_points).to_vec();
    let config = engine_config(parallel);
    info!(
        spot,
        strike,
        rate,
        vol_points,
        time_points,
        evaluation = ?config.evaluation(),
        "building price surface"
    );

    let grid = SurfaceGenerator::from(&config).surface(spot, strike, rate, &vols, &times)?;

    if json {
        println!("{}", serde_json::to_string(&grid)?);
    } else {
        println!("{}", render(&grid, spot, strike));
    }
    Ok(())
}

fn engine_config(parallel: bool) -> EngineConfig {
    let evaluation = if parallel {
        Evaluation::Parallel
    } else {
        Evaluation::Sequential
    };
    EngineConfig::builder().evaluation(evaluation).build()
}

/// Indices of at most `n` samples spread over `0..len`, first and last included.
fn preview_indices(len: usize, n: usize) -> Vec<usize> {
    if len <= n {
        return (0..len).collect();
    }
    (0..n).map(|k| k * (len - 1) / (n - 1)).collect()
}

pub fn render(grid: &SurfaceGrid, spot: f64, strike: f64) -> String {
    let (rows, cols) = grid.shape();
    let row_idx = preview_indices(rows, PREVIEW);
    let col_idx = preview_indices(cols, PREVIEW);

    let mut out = format!(
        "Call Option Price Surface (S={}, K={}), {} x {} grid\n",
        spot, strike, rows, cols
    );
    let _ = write!(out, "{:>8}", "T \\ σ");
    for &j in &col_idx {
        let _ = write!(out, "{:>10.2}", grid.volatilities[j]);
    }
    for &i in &row_idx {
        let _ = write!(out, "\n{:>8.2}", grid.times[i]);
        for &j in &col_idx {
            let _ = write!(out, "{:>10.2}", grid.premiums[[i, j]]);
        }
    }

    if let (Some(min), Some(max)) = (
        grid.premiums.iter().copied().reduce(f64::min),
        grid.premiums.iter().copied().reduce(f64::max),
    ) {
        let _ = write!(out, "\n\npremium range: {:.2} .. {:.2}", min, max);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use bsm_pricing::analytic::surface;

    #[test]
    fn preview_keeps_first_and_last() {
        assert_eq!(preview_indices(50, 6), vec![0, 9, 19, 29, 39, 49]);
        assert_eq!(preview_indices(3, 6), vec![0, 1, 2]);
        assert!(preview_indices(0, 6).is_empty());
    }

    #[test]
    fn render_small_grid() {
        let grid = surface(350.0, 280.0, 0.10, &[0.1, 1.5], &[0.1, 10.0]).unwrap();
        let text = render(&grid, 350.0, 280.0);
        assert!(text.starts_with("Call Option Price Surface (S=350, K=280), 2 x 2 grid"));
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("premium range:"));
    }

    #[test]
    fn parallel_flag_selects_the_evaluation() {
        assert_eq!(engine_config(true).evaluation(), Evaluation::Parallel);
        assert_eq!(engine_config(false).evaluation(), Evaluation::Sequential);
        assert_eq!(engine_config(false), EngineConfig::default());
    }

    #[test]
    fn point_counts_outside_the_grid_limits_are_rejected() {
        let market = MarketArgs {
            spot: 350.0,
            strike: 280.0,
            rate: 0.10,
        };
        assert!(matches!(
            run(&market, 1, 50, false, true),
            Err(CliError::PointsOutOfRange { points: 1, .. })
        ));
        assert!(matches!(
            run(&market, 50, usize::MAX, true, true),
            Err(CliError::PointsOutOfRange {
                name: "time points",
                ..
            })
        ));
    }
}
