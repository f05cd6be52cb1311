//! Fundamental domain value types used throughout the engine.
//!
//! All types are newtypes with validated constructors: a value that exists
//! is a value in range. None of them persist across calls — every entity
//! here is constructed at call entry and consumed before return.

mod decimals;
mod rounding;
mod swap_fee;
mod token_index;

pub use decimals::Decimals;
pub use rounding::Rounding;
pub use swap_fee::SwapFee;
pub use token_index::TokenIndex;
