//! Bounded Newton-Raphson solvers for the StableSwap invariant.
//!
//! The two-token invariant for normalized reserves `x`, `y`, invariant `D`
//! and amplification `Ann = A · n` (n = 2, `A` carrying two decimal places
//! via [`A_PRECISION`]):
//!
//! ```text
//! Ann · (x + y) + D = Ann · D + D³ / (4·x·y)
//! ```
//!
//! Both solvers iterate to absolute-unit convergence (`|next − prev| ≤ 1`
//! in the canonical fixed-point domain) under a hard iteration cap. The
//! execution environment meters computation, so cap exhaustion surfaces as
//! [`CurveError::ConvergenceFailure`] rather than ever looping unboundedly.
//!
//! Division order inside each step is load-bearing: the sequential
//! `D·D/(2x)·D/(2y)` form keeps every intermediate inside 256 bits for
//! reserves up to 2^127 and reproduces the reference results bit-exactly.

use primitive_types::U256;

use crate::error::{CurveError, Result};

/// Maximum Newton-Raphson iterations before declaring non-convergence.
pub const MAX_ITERATIONS: u32 = 256;

/// Precision carried by the encoded amplifier: `A = 100` encodes an
/// effective amplification of 1.
pub const A_PRECISION: u64 = 100;

/// `true` when two iterates differ by at most one canonical unit.
fn within_one(a: U256, b: U256) -> bool {
    let diff = if a > b { a - b } else { b - a };
    diff <= U256::one()
}

/// Computes the invariant `D` for normalized reserves `x`, `y` and
/// amplification `ann = 2·A`.
///
/// Initial guess is `x + y`; two zero reserves yield `D = 0` trivially.
///
/// # Errors
///
/// - [`CurveError::InsufficientLiquidity`] if exactly one reserve is zero
///   (the invariant is undefined there).
/// - [`CurveError::ConvergenceFailure`] if the iteration cap is exhausted.
/// - [`CurveError::Overflow`] if an intermediate exceeds 256 bits.
pub fn solve_d(x: U256, y: U256, ann: U256) -> Result<U256> {
    solve_d_capped(x, y, ann, MAX_ITERATIONS)
}

fn solve_d_capped(x: U256, y: U256, ann: U256, max_iterations: u32) -> Result<U256> {
    let s = x
        .checked_add(y)
        .ok_or(CurveError::Overflow("D: reserve sum"))?;
    if s.is_zero() {
        return Ok(U256::zero());
    }
    if x.is_zero() || y.is_zero() {
        return Err(CurveError::InsufficientLiquidity);
    }

    let p = U256::from(A_PRECISION);
    let two = U256::from(2u64);
    let three = U256::from(3u64);
    let two_x = x
        .checked_mul(two)
        .ok_or(CurveError::Overflow("D: 2x"))?;
    let two_y = y
        .checked_mul(two)
        .ok_or(CurveError::Overflow("D: 2y"))?;
    let ann_s = ann
        .checked_mul(s)
        .ok_or(CurveError::Overflow("D: Ann*S"))?
        / p;
    let ann_less_p = ann
        .checked_sub(p)
        .ok_or(CurveError::Overflow("D: Ann below precision"))?;

    let mut d = s;
    for _ in 0..max_iterations {
        // D_P = D^3 / (4xy), divided stepwise to stay inside 256 bits.
        let d_p = d.checked_mul(d).ok_or(CurveError::Overflow("D: D^2"))? / two_x;
        let d_p = d_p.checked_mul(d).ok_or(CurveError::Overflow("D: D_P"))? / two_y;

        let prev = d;

        let numerator = ann_s
            .checked_add(
                d_p.checked_mul(two)
                    .ok_or(CurveError::Overflow("D: 2*D_P"))?,
            )
            .ok_or(CurveError::Overflow("D: numerator sum"))?
            .checked_mul(d)
            .ok_or(CurveError::Overflow("D: numerator"))?;
        let denominator = ann_less_p
            .checked_mul(d)
            .ok_or(CurveError::Overflow("D: denominator left"))?
            / p
            + d_p
                .checked_mul(three)
                .ok_or(CurveError::Overflow("D: 3*D_P"))?;
        if denominator.is_zero() {
            return Err(CurveError::DivisionByZero);
        }

        d = numerator / denominator;
        if within_one(d, prev) {
            return Ok(d);
        }
    }
    Err(CurveError::ConvergenceFailure("invariant D"))
}

/// Solves the invariant for one reserve: given the other (adjusted)
/// reserve `x`, the invariant `d`, and `ann = 2·A`, finds `y` such that
/// `(x, y)` lies on the curve.
///
/// Rewritten as `y² + b·y = c` with `b = x + D·P/Ann − D` folded into the
/// iteration denominator and `c = D³·P / (4·Ann·x)`:
///
/// ```text
/// y ← (y² + c) / (2y + b − D)
/// ```
///
/// starting from the generous upper bound `y = D`.
///
/// # Errors
///
/// Same taxonomy as [`solve_d`]; a zero `x` is
/// [`CurveError::InsufficientLiquidity`].
pub fn solve_y(x: U256, d: U256, ann: U256) -> Result<U256> {
    solve_y_capped(x, d, ann, MAX_ITERATIONS)
}

fn solve_y_capped(x: U256, d: U256, ann: U256, max_iterations: u32) -> Result<U256> {
    if x.is_zero() {
        return Err(CurveError::InsufficientLiquidity);
    }

    let p = U256::from(A_PRECISION);
    let two = U256::from(2u64);
    let two_x = x
        .checked_mul(two)
        .ok_or(CurveError::Overflow("y: 2x"))?;
    let two_ann = ann
        .checked_mul(two)
        .ok_or(CurveError::Overflow("y: 2*Ann"))?;

    // c = D^3 * P / (4 * Ann * x), divided stepwise.
    let c = d.checked_mul(d).ok_or(CurveError::Overflow("y: D^2"))? / two_x;
    let c = c
        .checked_mul(d)
        .ok_or(CurveError::Overflow("y: c*D"))?
        .checked_mul(p)
        .ok_or(CurveError::Overflow("y: c*P"))?
        / two_ann;
    let b = x
        .checked_add(d.checked_mul(p).ok_or(CurveError::Overflow("y: D*P"))? / ann)
        .ok_or(CurveError::Overflow("y: b"))?;

    let mut y = d;
    for _ in 0..max_iterations {
        let prev = y;
        let numerator = y
            .checked_mul(y)
            .ok_or(CurveError::Overflow("y: y^2"))?
            .checked_add(c)
            .ok_or(CurveError::Overflow("y: numerator"))?;
        let denominator = y
            .checked_mul(two)
            .ok_or(CurveError::Overflow("y: 2y"))?
            .checked_add(b)
            .ok_or(CurveError::Overflow("y: denominator sum"))?
            .checked_sub(d)
            .ok_or(CurveError::Overflow("y: denominator underflow"))?;
        if denominator.is_zero() {
            return Err(CurveError::DivisionByZero);
        }

        y = numerator / denominator;
        if within_one(y, prev) {
            return Ok(y);
        }
    }
    Err(CurveError::ConvergenceFailure("reserve y"))
}
