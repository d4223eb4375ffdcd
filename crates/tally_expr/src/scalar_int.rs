//! Integer newtype that prevents unchecked arithmetic.
//!
//! `ScalarInt` wraps `i64` and intentionally does NOT implement `Add` or
//! `Sub`. The two operations the expression language defines go through
//! checked methods returning `Option<ScalarInt>`, so integer overflow is
//! impossible to miss at a call site.

use std::fmt;

/// A 64-bit signed integer that prevents unchecked arithmetic.
///
/// Using `+` or `-` directly on `ScalarInt` is a compile error; callers must
/// go through [`checked_add`](Self::checked_add) and
/// [`checked_sub`](Self::checked_sub).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct ScalarInt(i64);

impl ScalarInt {
    /// The zero value.
    pub const ZERO: Self = Self(0);

    /// The one value.
    pub const ONE: Self = Self(1);

    /// The minimum value (`i64::MIN`).
    pub const MIN: Self = Self(i64::MIN);

    /// The maximum value (`i64::MAX`).
    pub const MAX: Self = Self(i64::MAX);

    /// Create a new `ScalarInt` from a raw `i64`.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Extract the raw `i64` value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

// Conversions

impl From<i64> for ScalarInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ScalarInt> for i64 {
    #[inline]
    fn from(value: ScalarInt) -> Self {
        value.0
    }
}

// Formatting

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_extraction() {
        let n = ScalarInt::new(42);
        assert_eq!(n.raw(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(ScalarInt::ZERO.raw(), 0);
        assert_eq!(ScalarInt::ONE.raw(), 1);
        assert_eq!(ScalarInt::MIN.raw(), i64::MIN);
        assert_eq!(ScalarInt::MAX.raw(), i64::MAX);
    }

    #[test]
    fn checked_add_basic() {
        assert_eq!(
            ScalarInt::new(2).checked_add(ScalarInt::new(3)),
            Some(ScalarInt::new(5))
        );
    }

    #[test]
    fn checked_add_negative_operands() {
        assert_eq!(
            ScalarInt::new(-2).checked_add(ScalarInt::new(-3)),
            Some(ScalarInt::new(-5))
        );
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(ScalarInt::MAX.checked_add(ScalarInt::ONE), None);
    }

    #[test]
    fn checked_add_underflow() {
        assert_eq!(ScalarInt::MIN.checked_add(ScalarInt::new(-1)), None);
    }

    #[test]
    fn checked_add_min_plus_max() {
        assert_eq!(
            ScalarInt::MIN.checked_add(ScalarInt::MAX),
            Some(ScalarInt::new(-1))
        );
    }

    #[test]
    fn checked_add_identity_at_boundaries() {
        assert_eq!(
            ScalarInt::MAX.checked_add(ScalarInt::ZERO),
            Some(ScalarInt::MAX)
        );
        assert_eq!(
            ScalarInt::MIN.checked_add(ScalarInt::ZERO),
            Some(ScalarInt::MIN)
        );
    }

    #[test]
    fn checked_sub_basic() {
        assert_eq!(
            ScalarInt::new(5).checked_sub(ScalarInt::new(3)),
            Some(ScalarInt::new(2))
        );
    }

    #[test]
    fn checked_sub_reversed_goes_negative() {
        assert_eq!(
            ScalarInt::new(3).checked_sub(ScalarInt::new(5)),
            Some(ScalarInt::new(-2))
        );
    }

    #[test]
    fn checked_sub_overflow() {
        assert_eq!(ScalarInt::MIN.checked_sub(ScalarInt::ONE), None);
    }

    #[test]
    fn checked_sub_max_minus_neg1_overflows() {
        assert_eq!(ScalarInt::MAX.checked_sub(ScalarInt::new(-1)), None);
    }

    #[test]
    fn checked_sub_zero_minus_min_overflows() {
        assert_eq!(ScalarInt::ZERO.checked_sub(ScalarInt::MIN), None);
    }

    #[test]
    fn checked_sub_self_cancellation() {
        for val in [ScalarInt::MIN, ScalarInt::new(-1), ScalarInt::ZERO, ScalarInt::MAX] {
            assert_eq!(val.checked_sub(val), Some(ScalarInt::ZERO));
        }
    }

    #[test]
    fn conversions_round_trip() {
        let n: ScalarInt = 42i64.into();
        let raw: i64 = n.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(format!("{}", ScalarInt::new(42)), "42");
        assert_eq!(format!("{}", ScalarInt::new(-5)), "-5");
        assert_eq!(format!("{:?}", ScalarInt::ZERO), "0");
    }

    #[test]
    fn ordering() {
        assert!(ScalarInt::new(-1) < ScalarInt::ZERO);
        assert!(ScalarInt::MIN < ScalarInt::MAX);
    }
}
