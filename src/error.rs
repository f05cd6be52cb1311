//! Unified error type for the curve math engine.
//!
//! Every fallible operation across the crate returns [`CurveError`] through
//! the crate-wide [`Result`] alias. Errors abort the computation atomically:
//! no entry point ever produces a partial result alongside an error, and no
//! component silently downgrades a failure to a default value.

use thiserror::Error;

/// Errors produced by parameter decoding, normalization, and solver math.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The parameter blob is malformed or a decoded field is out of range.
    #[error("invalid curve data: {0}")]
    InvalidData(&'static str),

    /// The swap fee exceeds the engine maximum.
    #[error("swap fee exceeds maximum")]
    InvalidSwapFee,

    /// A zero trade amount was supplied.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// A reserve required by the computation is zero.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The requested trade is too large relative to the reserves for the
    /// solver to remain numerically stable.
    #[error("trade size exceeds reserve ratio limit")]
    RatioExceeded,

    /// An iterative solver exhausted its iteration cap without meeting the
    /// convergence tolerance.
    #[error("solver did not converge: {0}")]
    ConvergenceFailure(&'static str),

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A divisor evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, CurveError>;
