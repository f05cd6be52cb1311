//! Compact binary encoding of curve parameters.
//!
//! Every curve variant shares one blob layout:
//!
//! | Bytes | Field | Encoding |
//! |-------|-------|----------|
//! | 0 | `decimals0` | `u8`, must be ≤ 18 |
//! | 1 | `decimals1` | `u8`, must be ≤ 18 |
//! | 2.. | curve-specific field | big-endian unsigned, at most 30 bytes |
//!
//! The curve-specific field is the amplifier for the hybrid curve and the
//! packed weight pair for the weighted curve; its validation belongs to the
//! curve, not to this module. Decoding is all-or-nothing: a blob with any
//! out-of-range field yields no partially-decoded value.

use primitive_types::U256;

use crate::domain::Decimals;
use crate::error::{CurveError, Result};

/// Canonical encoded length: 2 decimal bytes plus the 30-byte field.
pub const DATA_LEN: usize = 32;

/// Number of bits available to the curve-specific field.
const FIELD_BITS: usize = 240;

/// Curve parameters as they appear on the wire, before curve-specific
/// interpretation of the trailing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParams {
    /// Decimal precision of token 0.
    pub decimals0: Decimals,
    /// Decimal precision of token 1.
    pub decimals1: Decimals,
    /// Big-endian trailing field (amplifier or packed weights).
    pub field: U256,
}

/// Slices and validates the common layer of a parameter blob.
///
/// Accepts blobs of 2 to 32 bytes; a short field is treated as
/// zero-extended on the left, exactly like a big-endian integer.
///
/// # Errors
///
/// Returns [`CurveError::InvalidData`] if the blob is shorter than 2 bytes,
/// longer than 32 bytes, or either decimals byte exceeds 18.
pub fn decode(data: &[u8]) -> Result<RawParams> {
    if data.len() < 2 {
        return Err(CurveError::InvalidData("blob shorter than 2 bytes"));
    }
    if data.len() > DATA_LEN {
        return Err(CurveError::InvalidData("blob longer than 32 bytes"));
    }
    let decimals0 = Decimals::new(data[0])?;
    let decimals1 = Decimals::new(data[1])?;
    let field = U256::from_big_endian(&data[2..]);
    Ok(RawParams {
        decimals0,
        decimals1,
        field,
    })
}

/// Builds the canonical 32-byte blob from its three fields.
///
/// The inverse of [`decode`] for in-range inputs:
/// `decode(&encode_data(d0, d1, f)?)` round-trips exactly.
///
/// # Errors
///
/// Returns [`CurveError::InvalidData`] if either decimals value exceeds 18
/// or `field` does not fit in 240 bits.
pub fn encode_data(decimals0: u8, decimals1: u8, field: U256) -> Result<[u8; DATA_LEN]> {
    let d0 = Decimals::new(decimals0)?;
    let d1 = Decimals::new(decimals1)?;
    if field.bits() > FIELD_BITS {
        return Err(CurveError::InvalidData("field exceeds 240 bits"));
    }
    let mut wide = [0u8; 32];
    field.to_big_endian(&mut wide);
    let mut blob = [0u8; DATA_LEN];
    blob[0] = d0.get();
    blob[1] = d1.get();
    blob[2..].copy_from_slice(&wide[2..]);
    Ok(blob)
}
