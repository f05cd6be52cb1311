//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use curve_engine::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the [`Curve`] trait with both
//! implementations, the codec entry points, and the error types so that
//! consumers don't need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{Decimals, Rounding, SwapFee, TokenIndex};

// Re-export the curve trait and implementations
pub use crate::curves::{Curve, HybridCurve, HybridParams, WeightedCurve, WeightedParams};

// Re-export the parameter codec
pub use crate::codec::{decode, encode_data, RawParams, DATA_LEN};

// Re-export error types
pub use crate::error::{CurveError, Result};
