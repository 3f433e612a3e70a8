use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PricingError {
    /// An input lies outside the domain of the Black-Scholes-Merton formula.
    #[error("invalid parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type PricingOutcome<T> = Result<T, PricingError>;

impl PricingError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Rejects zero, negative and non-finite values.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> PricingOutcome<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(name, value, "must be positive"));
    }
    Ok(())
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> PricingOutcome<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, value, "must be finite"));
    }
    Ok(())
}

/// σ·√T is the divisor of d1; it must not underflow to 0 or overflow.
pub(crate) fn ensure_total_volatility(volatility: f64, time_to_expiry: f64) -> PricingOutcome<()> {
    ensure_positive(
        "volatility * sqrt(time_to_expiry)",
        volatility * time_to_expiry.sqrt(),
    )
}
