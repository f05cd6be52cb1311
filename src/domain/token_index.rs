//! Selection of the trade's input token within a two-token pool.

/// Identifies which of the two pool assets is supplied in a trade.
///
/// The index determines the in/out orientation of every positional pair in
/// a call: reserves, decimals, and weights. [`orient`](Self::orient) maps a
/// `(value0, value1)` pair to `(in, out)` order.
///
/// # Examples
///
/// ```
/// use curve_engine::domain::TokenIndex;
///
/// assert_eq!(TokenIndex::Token1.orient((10u8, 20u8)), (20, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenIndex {
    /// Token 0 is the input side.
    Token0,
    /// Token 1 is the input side.
    Token1,
}

impl TokenIndex {
    /// Reorders a positional `(value0, value1)` pair into `(in, out)`.
    #[must_use]
    pub fn orient<T>(&self, pair: (T, T)) -> (T, T) {
        match self {
            Self::Token0 => pair,
            Self::Token1 => (pair.1, pair.0),
        }
    }

    /// Returns the opposite index.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Token0 => Self::Token1,
            Self::Token1 => Self::Token0,
        }
    }
}

impl From<bool> for TokenIndex {
    /// `false` selects token 0, `true` selects token 1.
    fn from(is_token1: bool) -> Self {
        if is_token1 {
            Self::Token1
        } else {
            Self::Token0
        }
    }
}
