mod black_scholes;
mod payoff;
mod surface;

pub use black_scholes::{price_and_greeks, BlackScholesMerton, OptionPrice, PricingEngine};
pub use payoff::{break_even, payoff, payoff_diagram, terminal_spot_range, PayoffDiagram};
pub use surface::{
    surface, uniform_axis, SurfaceGenerator, SurfaceGrid, DEFAULT_TIME_AXIS, DEFAULT_VOL_AXIS,
};
