//! Binary fixed-point natural logarithm and exponential in Q127.
//!
//! One Q127 unit is [`FIXED_1`] = 2^127; a value `v` represents the real
//! number `v / 2^127`. The pair [`ln_q127`] / [`exp_q127`] supports
//! geometric-mean computations over integer reserves: logarithms are taken
//! per token, averaged in log space, and exponentiated back.
//!
//! `log2` is computed by the classic squaring method: normalize the input
//! into `[1, 2)`, then square 127 times, harvesting one fractional bit per
//! round. The natural log follows by multiplying with [`LN2_Q127`], split
//! into integer and fractional parts so the product never needs more than
//! 256 bits. The exponential range-reduces by `ln 2` and sums the Taylor
//! series of `e^r` for the remainder `r ∈ [0, ln 2)`.

use primitive_types::U256;

use crate::error::{CurveError, Result};

/// One in Q127 representation: 2^127.
pub const FIXED_1: U256 = U256([0, 0x8000_0000_0000_0000, 0, 0]);

/// `ln 2` in Q127: `floor(ln(2) · 2^127)`.
pub const LN2_Q127: U256 = U256([0xe4f1_d9cc_01f9_7b57, 0x58b9_0bfb_e8e7_bcd5, 0, 0]);

/// Taylor terms summed by [`exp_q127`]; the series has long converged to
/// zero terms for arguments below `ln 2`.
const EXP_MAX_TERMS: u64 = 64;

/// Base-2 logarithm of a Q127 value `x ≥ FIXED_1`, as Q127.
fn log2_q127(x: U256) -> U256 {
    // Integer part: shift into [1, 2).
    let shift = x.bits() - 128;
    let mut res = U256::from(shift) << 127;
    let mut y = x >> shift;

    // Fractional part: each squaring either stays in [1, 2) or lands in
    // [2, 4) and contributes one result bit.
    let two = FIXED_1 << 1;
    for i in 1..=127u32 {
        if y == FIXED_1 {
            break;
        }
        y = (y * y) >> 127;
        if y >= two {
            y >>= 1;
            res = res + (U256::one() << (127 - i));
        }
    }
    res
}

/// Natural logarithm of the plain integer `value ≥ 1`, returned as Q127.
///
/// # Errors
///
/// [`CurveError::Overflow`] if `value` is zero (the logarithm diverges) or
/// exceeds 128 bits (the internal Q127 representation would overflow).
pub fn ln_q127(value: U256) -> Result<U256> {
    if value.is_zero() {
        return Err(CurveError::Overflow("ln: zero argument"));
    }
    if value.bits() > 128 {
        return Err(CurveError::Overflow("ln: argument too large"));
    }

    let log2 = log2_q127(value << 127);

    // ln x = log2(x) · ln 2, multiplied in two halves: the integer bit
    // count times LN2 plus the fractional Q127 part scaled back down.
    let int_part = log2 >> 127;
    let frac_part = log2 & (FIXED_1 - U256::one());
    Ok(int_part * LN2_Q127 + ((frac_part * LN2_Q127) >> 127))
}

/// Exponential `e^x` of a Q127 argument, returned as Q127.
///
/// Range-reduces by `ln 2` so the Taylor remainder stays below one, then
/// shifts the reduced result back up by the quotient.
///
/// # Errors
///
/// [`CurveError::Overflow`] if the result exceeds 256 bits.
pub fn exp_q127(x: U256) -> Result<U256> {
    // x = n·ln2 + r  ⇒  e^x = e^r · 2^n
    let quotient = x / LN2_Q127;
    // A shift past 256 bits can never fit, whatever e^r contributes;
    // rejecting here also keeps the remainder below ln 2 so the Taylor
    // products stay inside 256 bits.
    if quotient > U256::from(256u64) {
        return Err(CurveError::Overflow("exp: argument too large"));
    }
    let n = quotient.low_u64() as usize;
    let r = x - quotient * LN2_Q127;

    let mut term = FIXED_1;
    let mut res = FIXED_1;
    for k in 1..=EXP_MAX_TERMS {
        term = ((term * r) >> 127) / U256::from(k);
        if term.is_zero() {
            break;
        }
        res = res + term;
    }

    if res.bits() + n > 256 {
        return Err(CurveError::Overflow("exp: result"));
    }
    Ok(res << n)
}
