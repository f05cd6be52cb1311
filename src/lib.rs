//! # Curve Engine
//!
//! Pure pricing mathematics for two-token automated market makers: quote
//! amounts, spot prices, and liquidity measures computed from caller-held
//! reserves and a compact parameter blob. The engine owns no balances,
//! performs no transfers, and keeps no state between calls.
//!
//! Two curve families are provided:
//!
//! - **Hybrid / StableSwap** (Curve Finance style) — [`HybridCurve`]:
//!   amplified invariant for pegged assets, quoted in both directions via
//!   bounded Newton-Raphson solvers.
//! - **Weighted constant-mean** (Balancer style) — [`WeightedCurve`]:
//!   per-token integer weights, Q104 spot prices, and geometric-mean
//!   liquidity computed through Q127 log/exp fixed-point routines.
//!
//! Both decode the same 32-byte parameter layout (two decimals bytes plus
//! a 30-byte curve-specific field, see [`codec`]) and normalize every
//! reserve to a canonical 18-decimal domain before doing arithmetic, so
//! tokens of different native precision compose freely.
//!
//! # Quick Start
//!
//! Quote a stable-pair swap: a pool holding one canonical unit of each
//! token, amplification 50 (encoded `5 000`), a 0.3% fee, selling 0.1 of
//! token 0:
//!
//! ```rust
//! use curve_engine::codec;
//! use curve_engine::curves::{Curve, HybridCurve};
//! use curve_engine::domain::{SwapFee, TokenIndex};
//! use primitive_types::U256;
//!
//! let data = codec::encode_data(18, 18, U256::from(5_000u64)).expect("valid parameters");
//! let fee = SwapFee::new(3).expect("0.3% is valid");
//!
//! let reserve = U256::exp10(18);
//! let amount_in = U256::exp10(17);
//!
//! let amount_out = HybridCurve::compute_amount_out(
//!     amount_in, reserve, reserve, &data, fee, TokenIndex::Token0,
//! )
//! .expect("quote succeeded");
//!
//! assert_eq!(amount_out, U256::from_dec_str("99503006734612204").expect("literal"));
//!
//! // Liquidity of the balanced pool is the invariant D: total reserves.
//! let liquidity = HybridCurve::compute_liquidity(reserve, reserve, &data)
//!     .expect("liquidity succeeded");
//! assert_eq!(liquidity, reserve * U256::from(2u64));
//! ```
//!
//! # Module Guide
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`codec`] | Shared 32-byte parameter blob encoding/decoding |
//! | [`curves`] | [`Curve`] trait, [`HybridCurve`], [`WeightedCurve`] |
//! | [`domain`] | Validated value types: [`Decimals`], [`SwapFee`], [`TokenIndex`], [`Rounding`] |
//! | [`error`] | [`CurveError`] taxonomy and the crate [`Result`] |
//! | [`math`] | Newton-Raphson invariant solvers, Q127 log/exp kernels |
//! | [`prelude`] | One-stop re-exports |
//!
//! # Numeric Conventions
//!
//! - All amounts are `U256`; intermediate products use checked arithmetic
//!   and surface [`CurveError::Overflow`] instead of wrapping.
//! - Canonical scale is 18 decimals; raw token amounts are rescaled on
//!   entry and floor-rescaled on exit so rounding always favours the pool.
//! - Iterative solvers are hard-capped and report
//!   [`CurveError::ConvergenceFailure`] rather than spinning.

pub mod codec;
pub mod curves;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;

pub use curves::{Curve, HybridCurve, WeightedCurve};
pub use domain::{Decimals, Rounding, SwapFee, TokenIndex};
pub use error::{CurveError, Result};
