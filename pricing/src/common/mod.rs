mod config;
mod models;

pub use config::{EngineConfig, EngineConfigBuilder, Evaluation, ThetaConvention};
pub use models::{OptionParameters, OptionType, PercentGreeks, PricingResult};
