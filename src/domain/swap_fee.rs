//! Swap fee expressed in parts per thousand.

use core::fmt;

use primitive_types::U256;

use crate::error::{CurveError, Result};

/// The fee denominator: fees are parts out of 1000.
const FEE_DENOMINATOR: u16 = 1_000;

/// Maximum fee the engine accepts (100/1000 = 10%).
const MAX_SWAP_FEE: u16 = 100;

/// A swap fee in parts per thousand (`3` = 0.3%), capped at 10%.
///
/// The fee is charged on the gross output of a trade:
/// [`deduct_from`](Self::deduct_from) floors so the trader receives at
/// most the exact post-fee amount, and [`gross_up`](Self::gross_up) ceils
/// so a requested output is never under-funded.
///
/// # Examples
///
/// ```
/// use curve_engine::domain::SwapFee;
/// use primitive_types::U256;
///
/// let fee = SwapFee::new(3).expect("0.3% is valid");
/// let net = fee.deduct_from(U256::from(1_000u64)).expect("no overflow");
/// assert_eq!(net, U256::from(997u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SwapFee(u16);

impl SwapFee {
    /// Zero fee.
    pub const ZERO: Self = Self(0);

    /// The maximum accepted fee (10%).
    pub const MAX: Self = Self(MAX_SWAP_FEE);

    /// Creates a new `SwapFee` after validating against the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidSwapFee`] if `value` exceeds 100.
    pub const fn new(value: u16) -> Result<Self> {
        if value > MAX_SWAP_FEE {
            return Err(CurveError::InvalidSwapFee);
        }
        Ok(Self(value))
    }

    /// Returns the raw fee in parts per thousand.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Applies the fee to a gross amount: `amount * (1000 - fee) / 1000`,
    /// floored.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the intermediate product does not
    /// fit in 256 bits.
    pub fn deduct_from(&self, amount: U256) -> Result<U256> {
        let kept = amount
            .checked_mul(U256::from(FEE_DENOMINATOR - self.0))
            .ok_or(CurveError::Overflow("fee deduction"))?;
        Ok(kept / U256::from(FEE_DENOMINATOR))
    }

    /// Inverts [`deduct_from`](Self::deduct_from): the smallest gross amount
    /// whose post-fee value covers `net`, i.e. `ceil(net * 1000 / (1000 - fee))`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the intermediate product does not
    /// fit in 256 bits.
    pub fn gross_up(&self, net: U256) -> Result<U256> {
        let numerator = net
            .checked_mul(U256::from(FEE_DENOMINATOR))
            .ok_or(CurveError::Overflow("fee gross-up"))?;
        let denominator = U256::from(FEE_DENOMINATOR - self.0);
        let quotient = numerator / denominator;
        if (numerator % denominator).is_zero() {
            Ok(quotient)
        } else {
            Ok(quotient + U256::one())
        }
    }
}

impl fmt::Display for SwapFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, FEE_DENOMINATOR)
    }
}
