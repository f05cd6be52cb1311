//! Curve implementations and the [`Curve`] abstraction they share.
//!
//! A curve is a stateless pricing policy: it owns no reserves, performs no
//! transfers, and mutates nothing. Callers hold the raw state (integer
//! reserves plus an opaque parameter blob) and ask the curve for derived
//! quantities. Every implementation provides:
//!
//! 1. **Decode** — [`Curve::decode_data`] parses and validates the
//!    parameter blob into a typed parameter struct.
//! 2. **Validate** — [`Curve::is_valid_data`] / [`Curve::can_update_data`]
//!    gate blob acceptance at creation and reconfiguration time.
//! 3. **Measure** — [`Curve::compute_liquidity`] maps reserves to the
//!    curve's scalar liquidity measure.
//!
//! Quoting surfaces differ per family and are inherent methods:
//! [`HybridCurve`] quotes swap amounts in both directions, while
//! [`WeightedCurve`] quotes a spot price.
//!
//! # Implementors
//!
//! - [`HybridCurve`] — StableSwap invariant, low slippage near peg.
//! - [`WeightedCurve`] — constant-mean (Balancer style), arbitrary
//!   two-token weight ratios.

use primitive_types::U256;

use crate::error::Result;

pub mod hybrid;
pub mod weighted;

pub use hybrid::{HybridCurve, HybridParams};
pub use weighted::{WeightedCurve, WeightedParams};

#[cfg(test)]
mod proptest_properties;

/// Stateless pricing curve over two token reserves.
///
/// Reserves are always passed positionally (`reserve0`, `reserve1`) in raw
/// token units; each curve normalizes internally using the decimals
/// recorded in its parameter blob.
pub trait Curve {
    /// Typed view of a decoded parameter blob.
    type Params;

    /// Parses and validates a parameter blob.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidData`](crate::CurveError::InvalidData)
    /// if the blob has an invalid length or any field is out of range.
    fn decode_data(data: &[u8]) -> Result<Self::Params>;

    /// `true` when `data` decodes successfully.
    fn is_valid_data(data: &[u8]) -> bool {
        Self::decode_data(data).is_ok()
    }

    /// `true` when an existing configuration `old` may be replaced by
    /// `new` without invalidating held balances.
    fn can_update_data(old: &[u8], new: &[u8]) -> bool;

    /// Scalar liquidity measure for the given reserves.
    ///
    /// # Errors
    ///
    /// Propagates decode errors and any arithmetic failure of the
    /// underlying solver.
    fn compute_liquidity(reserve0: U256, reserve1: U256, data: &[u8]) -> Result<U256>;
}
