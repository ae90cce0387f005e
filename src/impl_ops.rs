//! Implement negation and iterator sums

use crate::Decimal;
use std::iter::Sum;
use std::ops::Neg;

impl Neg for Decimal {
    type Output = Decimal;

    /// Flip the sign bit
    ///
    /// This is the one operation that produces −0: arithmetic always
    /// normalizes a zero result to +0.
    #[inline]
    fn neg(self) -> Decimal {
        Decimal::from_raw_parts(
            self.coefficient(),
            self.scale() as u8,
            !self.is_sign_negative(),
        )
    }
}

impl<'a> Neg for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        Neg::neg(*self)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::ZERO, |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::ZERO, |acc, n| acc + *n)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_neg_zero_keeps_sign_bit() {
        let z = -Decimal::ZERO;
        assert!(z.is_sign_negative());
        assert!(z.is_zero());
        assert_eq!(z, Decimal::ZERO);
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn test_neg_round_trips() {
        let n = Decimal::from_str("12.34").unwrap();
        assert_eq!(-(-n), n);
        assert!((-n).is_sign_negative());
    }

    #[test]
    fn test_sum() {
        let parts: Vec<Decimal> = ["1.1", "2.2", "3.3"]
            .iter()
            .map(|s| Decimal::from_str(s).unwrap())
            .collect();
        let total: Decimal = parts.iter().sum();
        assert_eq!(total.to_string(), "6.6");
        let total: Decimal = parts.into_iter().sum();
        assert_eq!(total.to_string(), "6.6");
    }
}
