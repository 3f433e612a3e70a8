//! Call premium surfaces over volatility and time to expiry.
//!
//! Rows follow the time axis and columns the volatility axis, so
//! `premiums[[i, j]]` is the call premium for `times[i]` and `volatilities[j]`.

use ndarray::{Array1, Array2, Zip};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::black_scholes::{BlackScholesMerton, OptionPrice};
use crate::common::{EngineConfig, Evaluation, OptionParameters, OptionType};
use crate::error::{ensure_finite, ensure_positive, ensure_total_volatility, PricingOutcome};

/// `(start, end, points)` of the volatility axis used by the dashboard.
pub const DEFAULT_VOL_AXIS: (f64, f64, usize) = (0.1, 1.5, 50);
/// `(start, end, points)` of the time axis used by the dashboard.
pub const DEFAULT_TIME_AXIS: (f64, f64, usize) = (0.1, 10.0, 50);

/// `points` evenly spaced samples from `start` to `end`, both included.
pub fn uniform_axis(start: f64, end: f64, points: usize) -> Array1<f64> {
    Array1::linspace(start, end, points)
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceGrid {
    pub volatilities: Array1<f64>,
    pub times: Array1<f64>,
    /// indexed by `[time, volatility]`
    pub premiums: Array2<f64>,
}

impl SurfaceGrid {
    /// `(time samples, volatility samples)`
    pub fn shape(&self) -> (usize, usize) {
        self.premiums.dim()
    }

    pub fn premium_at(&self, time_idx: usize, vol_idx: usize) -> Option<f64> {
        self.premiums.get((time_idx, vol_idx)).copied()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceGenerator {
    evaluation: Evaluation,
}

impl SurfaceGenerator {
    pub fn new(evaluation: Evaluation) -> Self {
        Self { evaluation }
    }

    /// Call premiums for every `(time, volatility)` pair, spot, strike and rate held fixed.
    ///
    /// All inputs are checked before the first cell is priced, so an invalid
    /// sample anywhere in the axes yields an error and never a partial matrix.
    pub fn surface(
        &self,
        spot: f64,
        strike: f64,
        rate: f64,
        vol_range: &[f64],
        time_range: &[f64],
    ) -> PricingOutcome<SurfaceGrid> {
        if let Err(err) = check_inputs(spot, strike, rate, vol_range, time_range) {
            debug!(error = %err, "rejected surface grid");
            return Err(err);
        }

        let base = OptionParameters::new(spot, strike, 1.0, rate, 1.0, OptionType::Call);
        let cell = |(i, j): (usize, usize)| {
            BlackScholesMerton::call(
                &base
                    .with_time_to_expiry(time_range[i])
                    .with_volatility(vol_range[j]),
            )
        };

        let shape = (time_range.len(), vol_range.len());
        let premiums = match self.evaluation {
            Evaluation::Sequential => Array2::from_shape_fn(shape, cell),
            Evaluation::Parallel => {
                let mut premiums = Array2::zeros(shape);
                Zip::indexed(&mut premiums).par_for_each(|idx, premium| *premium = cell(idx));
                premiums
            }
        };

        debug!(
            rows = shape.0,
            cols = shape.1,
            evaluation = ?self.evaluation,
            "generated price surface"
        );

        Ok(SurfaceGrid {
            volatilities: Array1::from(vol_range.to_vec()),
            times: Array1::from(time_range.to_vec()),
            premiums,
        })
    }
}

impl From<&EngineConfig> for SurfaceGenerator {
    fn from(config: &EngineConfig) -> Self {
        SurfaceGenerator::new(config.evaluation())
    }
}

fn check_inputs(
    spot: f64,
    strike: f64,
    rate: f64,
    vol_range: &[f64],
    time_range: &[f64],
) -> PricingOutcome<()> {
    ensure_positive("spot", spot)?;
    ensure_positive("strike", strike)?;
    ensure_finite("risk_free_rate", rate)?;
    for &v in vol_range {
        ensure_positive("volatility", v)?;
    }
    for &t in time_range {
        ensure_positive("time_to_expiry", t)?;
    }
    for &t in time_range {
        for &v in vol_range {
            ensure_total_volatility(v, t)?;
        }
    }
    Ok(())
}

/// [`SurfaceGenerator::surface`] evaluated sequentially.
pub fn surface(
    spot: f64,
    strike: f64,
    rate: f64,
    vol_range: &[f64],
    time_range: &[f64],
) -> PricingOutcome<SurfaceGrid> {
    SurfaceGenerator::default().surface(spot, strike, rate, vol_range, time_range)
}
