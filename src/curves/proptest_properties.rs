//! Property-based tests using `proptest` for curve invariant validation.
//!
//! Covers the cross-cutting properties no single example pins down:
//!
//! 1. **Codec round-trip** — encode-then-decode is the identity on
//!    in-range parameters; out-of-range decimals never decode.
//! 2. **Quote monotonicity** — larger input ⇒ larger or equal output;
//!    higher fee ⇒ smaller or equal output.
//! 3. **Output bound** — a quote never exceeds the output reserve.
//! 4. **Inverse consistency** — quoting the input for a quoted output
//!    never exceeds the original input.
//! 5. **Liquidity bounds** — hybrid D equals total reserves at peg;
//!    weighted mean lies between the canonical reserves.

#![allow(clippy::panic)]

use primitive_types::U256;
use proptest::prelude::*;

use crate::codec;
use crate::curves::{Curve, HybridCurve, WeightedCurve};
use crate::domain::{SwapFee, TokenIndex};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn hybrid_data(decimals0: u8, decimals1: u8, amplifier: u64) -> [u8; codec::DATA_LEN] {
    let Ok(blob) = codec::encode_data(decimals0, decimals1, U256::from(amplifier)) else {
        panic!("valid blob");
    };
    blob
}

fn weighted_data(weight0: u8, weight1: u8) -> [u8; codec::DATA_LEN] {
    let packed = U256::from(((weight0 as u64) << 8) | weight1 as u64);
    let Ok(blob) = codec::encode_data(18, 18, packed) else {
        panic!("valid blob");
    };
    blob
}

fn fee(f: u16) -> SwapFee {
    let Ok(f) = SwapFee::new(f) else {
        panic!("valid fee");
    };
    f
}

/// Reserves inside the comfortable canonical range (1 token to 1e9 tokens
/// at 18 decimals).
fn reserve() -> impl Strategy<Value = U256> {
    (1u128..=1_000_000_000).prop_map(|v| U256::from(v) * U256::exp10(18))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn codec_round_trip(d0 in 0u8..=18, d1 in 0u8..=18, amp in 100u64..=500_099) {
        let Ok(blob) = codec::encode_data(d0, d1, U256::from(amp)) else {
            panic!("expected Ok");
        };
        let Ok(raw) = codec::decode(&blob) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(raw.decimals0.get(), d0);
        prop_assert_eq!(raw.decimals1.get(), d1);
        prop_assert_eq!(raw.field, U256::from(amp));
    }

    #[test]
    fn codec_rejects_bad_decimals(d0 in 19u8.., d1 in 0u8..=18) {
        prop_assert!(codec::decode(&[d0, d1]).is_err());
        prop_assert!(codec::decode(&[d1, d0]).is_err());
        prop_assert!(codec::encode_data(d0, d1, U256::from(100u64)).is_err());
    }

    #[test]
    fn quote_is_monotonic_in_input(
        r0 in reserve(),
        r1 in reserve(),
        amp in 100u64..=100_000,
        step in 1u64..=1_000,
    ) {
        let blob = hybrid_data(18, 18, amp);
        let amount = r0 / U256::from(10u64);
        let Ok(small) = HybridCurve::compute_amount_out(
            amount, r0, r1, &blob, fee(3), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        let Ok(large) = HybridCurve::compute_amount_out(
            amount + U256::from(step) * U256::exp10(15), r0, r1, &blob, fee(3), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(large >= small);
    }

    #[test]
    fn quote_is_monotonic_in_fee(
        r0 in reserve(),
        r1 in reserve(),
        amp in 100u64..=100_000,
        low in 0u16..=50,
        bump in 1u16..=50,
    ) {
        let blob = hybrid_data(18, 18, amp);
        let amount = r0 / U256::from(10u64);
        let Ok(cheap) = HybridCurve::compute_amount_out(
            amount, r0, r1, &blob, fee(low), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        let Ok(dear) = HybridCurve::compute_amount_out(
            amount, r0, r1, &blob, fee(low + bump), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(dear <= cheap);
    }

    #[test]
    fn quote_never_exceeds_output_reserve(
        r0 in reserve(),
        r1 in reserve(),
        amp in 100u64..=100_000,
    ) {
        let blob = hybrid_data(18, 18, amp);
        // Largest trade the ratio guard allows.
        let amount = r0 * U256::from(100u64);
        let Ok(out) = HybridCurve::compute_amount_out(
            amount, r0, r1, &blob, fee(3), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(out < r1);
    }

    #[test]
    fn inverse_quote_never_exceeds_forward_input(
        r0 in reserve(),
        r1 in reserve(),
        amp in 100u64..=100_000,
    ) {
        let blob = hybrid_data(18, 18, amp);
        let amount = r0 / U256::from(10u64);
        let Ok(out) = HybridCurve::compute_amount_out(
            amount, r0, r1, &blob, fee(3), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        prop_assume!(!out.is_zero());
        let Ok(back) = HybridCurve::compute_amount_in(
            out, r0, r1, &blob, fee(3), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(back <= amount);
    }

    #[test]
    fn quote_is_symmetric_under_relabeling(
        v0 in 1u128..=1_000_000_000,
        v1 in 1u128..=1_000_000_000,
        amp in 100u64..=100_000,
    ) {
        // Swapping the positional order of reserves and decimals while
        // flipping the direction index is the same trade.
        let r0 = U256::from(v0) * U256::exp10(18); // 18-decimal token
        let r1 = U256::from(v1) * U256::exp10(6); // 6-decimal token
        let amount = r0 / U256::from(10u64);
        let Ok(forward) = HybridCurve::compute_amount_out(
            amount, r0, r1, &hybrid_data(18, 6, amp), fee(3), TokenIndex::Token0,
        ) else {
            panic!("expected Ok");
        };
        let Ok(relabeled) = HybridCurve::compute_amount_out(
            amount, r1, r0, &hybrid_data(6, 18, amp), fee(3), TokenIndex::Token1,
        ) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(forward, relabeled);
    }

    #[test]
    fn balanced_liquidity_is_total_reserves(
        r in reserve(),
        amp in 100u64..=100_000,
    ) {
        let blob = hybrid_data(18, 18, amp);
        let Ok(liq) = HybridCurve::compute_liquidity(r, r, &blob) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(liq, r * U256::from(2u64));
    }

    #[test]
    fn hybrid_liquidity_brackets_reserve_sum(
        r0 in reserve(),
        r1 in reserve(),
        amp in 100u64..=100_000,
    ) {
        let blob = hybrid_data(18, 18, amp);
        let Ok(liq) = HybridCurve::compute_liquidity(r0, r1, &blob) else {
            panic!("expected Ok");
        };
        // D never exceeds the constant-sum limit x + y.
        prop_assert!(liq <= r0 + r1);
    }

    #[test]
    fn weighted_liquidity_lies_between_reserves(
        r0 in reserve(),
        r1 in reserve(),
        w0 in 1u8..=255,
        w1 in 1u8..=255,
    ) {
        let blob = weighted_data(w0, w1);
        let Ok(liq) = WeightedCurve::compute_liquidity(r0, r1, &blob) else {
            panic!("expected Ok");
        };
        let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
        // Two 127-bit log/exp approximations cost at most a few parts in
        // 10^12 at these magnitudes.
        let slack = hi / U256::exp10(12) + U256::one();
        prop_assert!(liq + slack >= lo, "liq = {liq}");
        prop_assert!(liq <= hi + slack, "liq = {liq}");
    }

    #[test]
    fn weighted_price_is_positive_and_directional(
        r0 in reserve(),
        r1 in reserve(),
        w0 in 1u8..=255,
        w1 in 1u8..=255,
    ) {
        let blob = weighted_data(w0, w1);
        let Ok(forward) = WeightedCurve::compute_price(r0, r1, &blob, TokenIndex::Token0) else {
            panic!("expected Ok");
        };
        let Ok(backward) = WeightedCurve::compute_price(r0, r1, &blob, TokenIndex::Token1) else {
            panic!("expected Ok");
        };
        prop_assert!(!forward.is_zero());
        prop_assert!(!backward.is_zero());
        // The two directions straddle parity unless the pool quotes at
        // exactly 1:1 in both.
        let unit = U256::one() << 104;
        if forward > unit {
            prop_assert!(backward <= unit);
        }
    }
}
