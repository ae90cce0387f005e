//! Code for num_traits

use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};
use std::convert::TryFrom;

use crate::{Decimal, DecimalError};

impl Zero for Decimal {
    #[inline]
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl One for Decimal {
    #[inline]
    fn one() -> Decimal {
        Decimal::ONE
    }
}

impl Num for Decimal {
    type FromStrRadixErr = DecimalError;

    /// Creates and initializes a Decimal. Only base-10 is supported.
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<Decimal, DecimalError> {
        if radix != 10 {
            return Err(DecimalError::InvalidOperation("the radix for decimal MUST be 10"));
        }
        crate::parsing::parse_decimal(s)
    }
}

impl Signed for Decimal {
    #[inline]
    fn abs(&self) -> Decimal {
        Decimal::abs(self)
    }

    fn abs_sub(&self, other: &Decimal) -> Decimal {
        if self <= other {
            Decimal::ZERO
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Decimal {
        if self.is_zero() {
            Decimal::ZERO
        } else if self.is_sign_negative() {
            -Decimal::ONE
        } else {
            Decimal::ONE
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        !self.is_zero() && self.is_sign_positive()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        !self.is_zero() && self.is_sign_negative()
    }
}

impl FromPrimitive for Decimal {
    #[inline]
    fn from_i64(n: i64) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Decimal> {
        Decimal::try_from(n).ok()
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Decimal> {
        Decimal::try_from(n).ok()
    }
}

impl ToPrimitive for Decimal {
    fn to_i64(&self) -> Option<i64> {
        let magnitude = self.trunc(0).ok()?.coefficient();
        if self.is_sign_negative() {
            if magnitude > 1u128 << 63 {
                None
            } else {
                Some((-(magnitude as i128)) as i64)
            }
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    fn to_u64(&self) -> Option<u64> {
        let truncated = self.trunc(0).ok()?;
        if truncated.is_sign_negative() && !truncated.is_zero() {
            return None;
        }
        u64::try_from(truncated.coefficient()).ok()
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.trunc(0).ok()?.coefficient() as i128;
        Some(if self.is_sign_negative() { -magnitude } else { magnitude })
    }

    fn to_u128(&self) -> Option<u128> {
        let truncated = self.trunc(0).ok()?;
        if truncated.is_sign_negative() && !truncated.is_zero() {
            return None;
        }
        Some(truncated.coefficient())
    }

    fn to_f64(&self) -> Option<f64> {
        let magnitude = self.coefficient() as f64 / 10f64.powi(self.scale() as i32);
        Some(if self.is_sign_negative() { -magnitude } else { magnitude })
    }

    fn to_f32(&self) -> Option<f32> {
        self.to_f64().map(|f| f as f32)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_one() {
        assert!(Decimal::zero().is_zero());
        assert_eq!(Decimal::one() * dec("12.5"), dec("12.5"));
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(Decimal::from_str_radix("1.5", 10).unwrap(), dec("1.5"));
        assert!(Decimal::from_str_radix("ff", 16).is_err());
    }

    #[test]
    fn test_signum() {
        assert_eq!(dec("-12").signum(), dec("-1"));
        assert_eq!(dec("12").signum(), dec("1"));
        assert_eq!(dec("0").signum(), dec("0"));
        assert!(!dec("0").is_positive());
        assert!(!dec("-0").is_negative());
    }

    #[test]
    fn test_abs_sub() {
        assert_eq!(dec("3").abs_sub(&dec("5")), Decimal::ZERO);
        assert_eq!(dec("5").abs_sub(&dec("3")), dec("2"));
    }

    #[test]
    fn test_to_primitives() {
        assert_eq!(dec("12.7").to_i64(), Some(12));
        assert_eq!(dec("-12.7").to_i64(), Some(-12));
        assert_eq!(dec("-1").to_u64(), None);
        assert_eq!(dec("-0.5").to_u64(), Some(0));
        assert_eq!(dec("9223372036854775807").to_i64(), Some(i64::MAX));
        assert_eq!(dec("-9223372036854775808").to_i64(), Some(i64::MIN));
        assert_eq!(dec("9223372036854775808").to_i64(), None);
        assert_eq!(dec("79228162514264337593543950335").to_u128(), Some(crate::MAX_COEFFICIENT));
        assert_eq!(dec("0.5").to_f64(), Some(0.5));
        assert_eq!(dec("-2.25").to_f32(), Some(-2.25f32));
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Decimal::from_i64(-3), Some(dec("-3")));
        assert_eq!(Decimal::from_u64(3), Some(dec("3")));
        assert_eq!(Decimal::from_u128(u128::MAX), None);
    }
}
