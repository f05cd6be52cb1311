//! Hybrid / StableSwap curve (Curve Finance style).
//!
//! Specialised for low-slippage swaps between similarly-priced (pegged)
//! assets such as stablecoins.
//!
//! # Invariant (n = 2 tokens)
//!
//! ```text
//! A · 2 · (x + y) + D = A · D · 2 + D³ / (4 · x · y)
//! ```
//!
//! where:
//! - `A` — amplification coefficient, carrying two fixed decimal places
//!   (an encoded `A = 100` means an effective amplification of 1).
//! - `D` — invariant parameter (≈ total reserves when at peg).
//! - `x`, `y` — canonical 18-decimal balances of the two tokens.
//!
//! # Quote Algorithm
//!
//! 1. Normalize reserves and amount to the 18-decimal canonical scale.
//! 2. Compute the invariant `D` from the current reserves.
//! 3. Solve the invariant for the post-trade counter-reserve.
//! 4. Deduct the fee from the gross output, then one canonical unit as a
//!    rounding margin.
//! 5. Denormalize, rounding in the pool's favour.
//!
//! # Amplification Behaviour
//!
//! | Effective A | Curve |
//! |---|-------|
//! | 1 | Constant product (`x · y = k`) |
//! | 50–5 000 | Hybrid — low slippage near peg |
//! | → ∞ | Constant sum (1:1 swaps) |

use primitive_types::U256;

use crate::codec;
use crate::curves::Curve;
use crate::domain::{Decimals, Rounding, SwapFee, TokenIndex};
use crate::error::{CurveError, Result};
use crate::math::newton::{solve_d, solve_y};

/// Minimum accepted encoded amplifier (effective amplification 1).
pub const MIN_AMPLIFIER: u64 = 100;

/// Largest accepted trade, as a multiple of the canonical input-side
/// reserve. Beyond this the solver result degrades to noise.
pub const MAX_TRADE_RATIO: u64 = 100;

/// Decoded hybrid parameters.
///
/// The 30-byte parameter field carries the encoded amplifier big-endian;
/// the two leading blob bytes carry the token decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HybridParams {
    /// Decimal places of token 0.
    pub decimals0: Decimals,
    /// Decimal places of token 1.
    pub decimals1: Decimals,
    /// Encoded amplification coefficient (`≥ MIN_AMPLIFIER`).
    pub amplifier: U256,
}

impl HybridParams {
    /// Amplifier times the token count, the `Ann` term of the invariant.
    fn ann(&self) -> U256 {
        self.amplifier * U256::from(2u64)
    }

    /// Decimals of the (input, output) tokens for the given direction.
    fn oriented_decimals(&self, token_in: TokenIndex) -> (Decimals, Decimals) {
        token_in.orient((self.decimals0, self.decimals1))
    }
}

/// The StableSwap pricing curve.
///
/// Stateless: all methods take reserves and the raw parameter blob and
/// return derived amounts without retaining anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HybridCurve;

impl Curve for HybridCurve {
    type Params = HybridParams;

    fn decode_data(data: &[u8]) -> Result<HybridParams> {
        let raw = codec::decode(data)?;
        if raw.field < U256::from(MIN_AMPLIFIER) {
            return Err(CurveError::InvalidData("amplifier below minimum"));
        }
        Ok(HybridParams {
            decimals0: raw.decimals0,
            decimals1: raw.decimals1,
            amplifier: raw.field,
        })
    }

    /// Reconfiguration keeps held balances meaningful only when both
    /// blobs decode and the decimals are untouched; the amplifier alone
    /// may move.
    fn can_update_data(old: &[u8], new: &[u8]) -> bool {
        match (Self::decode_data(old), Self::decode_data(new)) {
            (Ok(old), Ok(new)) => {
                old.decimals0 == new.decimals0 && old.decimals1 == new.decimals1
            }
            _ => false,
        }
    }

    /// Liquidity of a hybrid pool is the invariant `D` over canonical
    /// reserves: twice the per-token balance at peg.
    fn compute_liquidity(reserve0: U256, reserve1: U256, data: &[u8]) -> Result<U256> {
        let params = Self::decode_data(data)?;
        let x = params.decimals0.scale_up(reserve0)?;
        let y = params.decimals1.scale_up(reserve1)?;
        solve_d(x, y, params.ann())
    }
}

impl HybridCurve {
    /// Quotes the output amount for a given input.
    ///
    /// `reserve0` / `reserve1` are positional raw balances; `token_in`
    /// selects the direction.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`CurveError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`CurveError::RatioExceeded`] if the canonical input exceeds
    ///   [`MAX_TRADE_RATIO`] times the canonical input-side reserve.
    /// - Solver errors from [`solve_d`] / [`solve_y`].
    pub fn compute_amount_out(
        amount_in: U256,
        reserve0: U256,
        reserve1: U256,
        data: &[u8],
        swap_fee: SwapFee,
        token_in: TokenIndex,
    ) -> Result<U256> {
        let params = Self::decode_data(data)?;
        if amount_in.is_zero() {
            return Err(CurveError::InsufficientInputAmount);
        }
        if reserve0.is_zero() || reserve1.is_zero() {
            return Err(CurveError::InsufficientLiquidity);
        }

        let (reserve_in, reserve_out) = token_in.orient((reserve0, reserve1));
        let (dec_in, dec_out) = params.oriented_decimals(token_in);

        let x_in = dec_in.scale_up(reserve_in)?;
        let x_out = dec_out.scale_up(reserve_out)?;
        let a_in = dec_in.scale_up(amount_in)?;

        let limit = x_in
            .checked_mul(U256::from(MAX_TRADE_RATIO))
            .ok_or(CurveError::Overflow("trade ratio limit"))?;
        if a_in > limit {
            return Err(CurveError::RatioExceeded);
        }

        let ann = params.ann();
        let d = solve_d(x_in, x_out, ann)?;
        let x_new = x_in
            .checked_add(a_in)
            .ok_or(CurveError::Overflow("post-trade reserve"))?;
        let y_new = solve_y(x_new, d, ann)?;

        let dy = x_out
            .checked_sub(y_new)
            .ok_or(CurveError::InsufficientLiquidity)?;
        // Fee comes off the output side; the extra unit absorbs the
        // solver's one-unit convergence tolerance.
        let net = swap_fee.deduct_from(dy)?.saturating_sub(U256::one());

        Ok(dec_out.scale_down(net, Rounding::Down))
    }

    /// Quotes the input amount required to receive a given output.
    ///
    /// Inverse of [`compute_amount_out`](Self::compute_amount_out): the
    /// requested net output is grossed back up through the fee, the
    /// output reserve is reduced by that gross amount, and the invariant
    /// is solved for the new input-side reserve.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InsufficientInputAmount`] if `amount_out` is zero.
    /// - [`CurveError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`CurveError::RatioExceeded`] if the grossed-up output would
    ///   drain the output-side reserve.
    /// - Solver errors from [`solve_d`] / [`solve_y`].
    pub fn compute_amount_in(
        amount_out: U256,
        reserve0: U256,
        reserve1: U256,
        data: &[u8],
        swap_fee: SwapFee,
        token_in: TokenIndex,
    ) -> Result<U256> {
        let params = Self::decode_data(data)?;
        if amount_out.is_zero() {
            return Err(CurveError::InsufficientInputAmount);
        }
        if reserve0.is_zero() || reserve1.is_zero() {
            return Err(CurveError::InsufficientLiquidity);
        }

        let (reserve_in, reserve_out) = token_in.orient((reserve0, reserve1));
        let (dec_in, dec_out) = params.oriented_decimals(token_in);

        let x_in = dec_in.scale_up(reserve_in)?;
        let x_out = dec_out.scale_up(reserve_out)?;
        let a_out = dec_out.scale_up(amount_out)?;

        let gross = swap_fee.gross_up(a_out)?;
        if gross >= x_out {
            return Err(CurveError::RatioExceeded);
        }

        let ann = params.ann();
        let d = solve_d(x_in, x_out, ann)?;
        let y_new = solve_y(x_out - gross, d, ann)?;

        // For wei-sized requests the true required input can fall inside
        // the solver's one-unit tolerance, quoting zero. The shortfall is
        // capped at one canonical unit, the same margin the forward quote
        // deducts from its output.
        let a_in = y_new.saturating_sub(x_in);
        Ok(dec_in.scale_down(a_in, Rounding::Down))
    }
}
