//! Numerical kernels shared by the curve implementations.
//!
//! - [`newton`]: bounded Newton-Raphson solvers for the StableSwap
//!   invariant (`D` and the complementary reserve `y`).
//! - [`fixed_log`]: Q127 natural logarithm and exponential used for
//!   constant-mean geometric averages.
//!
//! Everything here operates on canonical 18-decimal integers; decimal
//! normalization is the caller's concern (see [`crate::domain::Decimals`]).

pub mod fixed_log;
pub mod newton;

pub use fixed_log::{exp_q127, ln_q127, FIXED_1, LN2_Q127};
pub use newton::{solve_d, solve_y, A_PRECISION, MAX_ITERATIONS};
