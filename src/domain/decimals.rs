//! Token decimal precision and canonical-scale normalization.

use primitive_types::U256;

use super::Rounding;
use crate::error::{CurveError, Result};

/// Maximum allowed decimal places (the canonical scale itself).
const MAX_DECIMALS: u8 = 18;

/// The number of decimal places of a token, in the range `0..=18`.
///
/// All invariant math runs in the canonical 18-decimal fixed-point domain.
/// `Decimals` carries a token's native precision and performs the rescale
/// in both directions: [`scale_up`](Self::scale_up) multiplies a raw value
/// by `10^(18 - decimals)`, [`scale_down`](Self::scale_down) divides a
/// canonical value by the same factor with an explicit [`Rounding`]
/// direction chosen by the caller's context.
///
/// # Examples
///
/// ```
/// use curve_engine::domain::{Decimals, Rounding};
/// use primitive_types::U256;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// let canonical = d.scale_up(U256::from(1_000_000u64)).expect("no overflow");
/// assert_eq!(canonical, U256::from(10u64).pow(U256::from(18u64)));
/// assert_eq!(d.scale_down(canonical, Rounding::Down), U256::from(1_000_000u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// The canonical 18-decimal precision.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidData`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(CurveError::InvalidData("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^(18 - decimals)`, the factor between this token's raw
    /// units and the canonical 18-decimal domain.
    #[must_use]
    pub fn canonical_factor(&self) -> U256 {
        U256::exp10((MAX_DECIMALS - self.0) as usize)
    }

    /// Rescales a raw token value into the canonical 18-decimal domain.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if `raw * 10^(18 - decimals)` does
    /// not fit in 256 bits.
    pub fn scale_up(&self, raw: U256) -> Result<U256> {
        raw.checked_mul(self.canonical_factor())
            .ok_or(CurveError::Overflow("canonical scale-up"))
    }

    /// Rescales a canonical 18-decimal value back to raw token units.
    ///
    /// The rounding direction is supplied by the caller: quoting an output
    /// floors, quoting a required input ceils. The normalizer itself has
    /// no implicit bias.
    #[must_use]
    pub fn scale_down(&self, canonical: U256, rounding: Rounding) -> U256 {
        let factor = self.canonical_factor();
        let quotient = canonical / factor;
        match rounding {
            Rounding::Down => quotient,
            Rounding::Up => {
                if (canonical % factor).is_zero() {
                    quotient
                } else {
                    quotient + U256::one()
                }
            }
        }
    }
}
