//! Explicit rounding direction for lossy division.

/// Specifies the rounding direction for a division that may lose precision.
///
/// The engine never rounds implicitly: every denormalization and fee
/// gross-up names its direction, and the direction is always chosen so
/// that rounding error favors the pool, never the trader.
///
/// # Examples
///
/// ```
/// use curve_engine::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_is_up() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Up.is_down());
    }

    #[test]
    fn down_is_down() {
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Down.is_up());
    }

    #[test]
    fn equality() {
        assert_eq!(Rounding::Up, Rounding::Up);
        assert_ne!(Rounding::Up, Rounding::Down);
    }
}
