//! Command implementations
//!
//! Each command builds its inputs, calls the pricing library and renders the
//! result either as text or as JSON.

pub mod payoff;
pub mod price;
pub mod surface;
