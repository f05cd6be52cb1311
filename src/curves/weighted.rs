//! Weighted constant-mean curve (Balancer style).
//!
//! A two-token pool where each token carries an integer weight; the pool
//! holds the weighted geometric mean of its canonical reserves constant:
//!
//! ```text
//! x₀^(w₀/(w₀+w₁)) · x₁^(w₁/(w₀+w₁)) = L
//! ```
//!
//! An 80/20 pool, for instance, prices token 0 four times as firmly as
//! token 1. Liquidity is computed in log space via [`ln_q127`] /
//! [`exp_q127`] so no fractional-power routine is needed; the spot price
//! is a plain ratio and stays in integer arithmetic, reported as a Q104
//! fixed-point value.

use primitive_types::U256;

use crate::codec;
use crate::curves::Curve;
use crate::domain::{Decimals, TokenIndex};
use crate::error::{CurveError, Result};
use crate::math::fixed_log::{exp_q127, ln_q127};

/// Fractional bits of a reported spot price.
pub const PRICE_SHIFT: usize = 104;

/// Bits available to the packed weight pair (one byte per token).
const WEIGHT_FIELD_BITS: usize = 16;

/// Decoded weighted-pool parameters.
///
/// The trailing blob field packs the two weights into its low 16 bits:
/// `weight0` in the upper byte, `weight1` in the lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedParams {
    /// Decimal places of token 0.
    pub decimals0: Decimals,
    /// Decimal places of token 1.
    pub decimals1: Decimals,
    /// Weight of token 0 (nonzero).
    pub weight0: u8,
    /// Weight of token 1 (nonzero).
    pub weight1: u8,
}

impl WeightedParams {
    /// Weights of the (input, output) tokens for the given direction.
    fn oriented_weights(&self, token_in: TokenIndex) -> (u8, u8) {
        token_in.orient((self.weight0, self.weight1))
    }
}

/// The constant-mean pricing curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedCurve;

impl Curve for WeightedCurve {
    type Params = WeightedParams;

    fn decode_data(data: &[u8]) -> Result<WeightedParams> {
        let raw = codec::decode(data)?;
        if raw.field.bits() > WEIGHT_FIELD_BITS {
            return Err(CurveError::InvalidData("weight field exceeds 2 bytes"));
        }
        let packed = raw.field.low_u64();
        let weight0 = (packed >> 8) as u8;
        let weight1 = (packed & 0xff) as u8;
        if weight0 == 0 || weight1 == 0 {
            return Err(CurveError::InvalidData("weight must be nonzero"));
        }
        Ok(WeightedParams {
            decimals0: raw.decimals0,
            decimals1: raw.decimals1,
            weight0,
            weight1,
        })
    }

    /// Changing either weights or decimals reprices every held balance,
    /// so weighted parameters are immutable once set.
    fn can_update_data(_old: &[u8], _new: &[u8]) -> bool {
        false
    }

    /// Weighted geometric mean of the canonical reserves.
    ///
    /// Computed in log space:
    /// `exp((w₀·ln x₀ + w₁·ln x₁) / (w₀ + w₁))`. An empty side of the
    /// pool collapses the mean, so any zero reserve yields zero.
    fn compute_liquidity(reserve0: U256, reserve1: U256, data: &[u8]) -> Result<U256> {
        let params = Self::decode_data(data)?;
        if reserve0.is_zero() || reserve1.is_zero() {
            return Ok(U256::zero());
        }
        let x0 = params.decimals0.scale_up(reserve0)?;
        let x1 = params.decimals1.scale_up(reserve1)?;

        let w0 = U256::from(params.weight0);
        let w1 = U256::from(params.weight1);
        let weighted_sum = ln_q127(x0)?
            .checked_mul(w0)
            .ok_or(CurveError::Overflow("liquidity: weighted log 0"))?
            .checked_add(
                ln_q127(x1)?
                    .checked_mul(w1)
                    .ok_or(CurveError::Overflow("liquidity: weighted log 1"))?,
            )
            .ok_or(CurveError::Overflow("liquidity: log sum"))?;
        let mean_log = weighted_sum / (w0 + w1);

        Ok(exp_q127(mean_log)? >> 127)
    }
}

impl WeightedCurve {
    /// Spot price of the output token per unit of input token, as Q104.
    ///
    /// ```text
    /// price = (x_out · w_in) / (x_in · w_out) · 2^104
    /// ```
    ///
    /// over canonical reserves. Equal reserves and equal weights quote
    /// exactly `2^104`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`CurveError::Overflow`] if the scaled numerator exceeds 256
    ///   bits.
    pub fn compute_price(
        reserve0: U256,
        reserve1: U256,
        data: &[u8],
        token_in: TokenIndex,
    ) -> Result<U256> {
        let params = Self::decode_data(data)?;
        if reserve0.is_zero() || reserve1.is_zero() {
            return Err(CurveError::InsufficientLiquidity);
        }

        let (reserve_in, reserve_out) = token_in.orient((reserve0, reserve1));
        let (dec_in, dec_out) = token_in.orient((params.decimals0, params.decimals1));
        let (weight_in, weight_out) = params.oriented_weights(token_in);

        let x_in = dec_in.scale_up(reserve_in)?;
        let x_out = dec_out.scale_up(reserve_out)?;

        if x_out.bits() + PRICE_SHIFT > 256 {
            return Err(CurveError::Overflow("price numerator shift"));
        }
        let numerator = (x_out << PRICE_SHIFT)
            .checked_mul(U256::from(weight_in))
            .ok_or(CurveError::Overflow("price numerator"))?;
        let denominator = x_in
            .checked_mul(U256::from(weight_out))
            .ok_or(CurveError::Overflow("price denominator"))?;
        if denominator.is_zero() {
            return Err(CurveError::DivisionByZero);
        }
        Ok(numerator / denominator)
    }
}
