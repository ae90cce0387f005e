//! coefficient multiplication

use super::u256::U256;
use super::from_wide_parts;
use crate::{Decimal, DecimalError};

/// Product of two decimals
///
/// The 96×96 bit product is taken in full 256-bit width, the scales
/// add, and the result narrows back into the envelope: fractional
/// digits round off half-to-even first, then excess coefficient width.
pub(crate) fn mul(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
    let negative = lhs.is_sign_negative() ^ rhs.is_sign_negative();
    let product = U256::mul128(lhs.coefficient(), rhs.coefficient());
    let scale = lhs.scale() as i64 + rhs.scale() as i64;
    from_wide_parts(product, scale, negative)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_mul() {
        let vals = vec![
            ("2", "3", "6"),
            ("0.1", "0.1", "0.01"),
            ("1.5", "1.5", "2.25"),
            ("-2", "3", "-6"),
            ("-2", "-3", "6"),
            ("12.34", "1.234", "15.22756"),
            ("0.5", "0.5", "0.25"),
            ("1", "79228162514264337593543950335", "79228162514264337593543950335"),
            // product is exactly 2^96 - 1
            ("3", "26409387504754779197847983445", "79228162514264337593543950335"),
            ("0.0000000000000000000000000001", "0.1", "0.0000000000000000000000000000"),
            ("0.0000000000000000000000000002", "0.1", "0.0000000000000000000000000000"),
            ("0.0000000000000000000000000015", "0.1", "0.0000000000000000000000000002"),
        ];
        for &(x, y, expected) in vals.iter() {
            let product = dec(x).checked_mul(dec(y)).unwrap();
            assert_eq!(product.to_string(), expected, "{} * {}", x, y);
            let comm = dec(y).checked_mul(dec(x)).unwrap();
            assert_eq!(product, comm, "{} * {} is not commutative", x, y);
        }
    }

    #[test]
    fn test_mul_negative_zero_normalizes() {
        let product = dec("-0").checked_mul(dec("1")).unwrap();
        assert!(product.is_zero());
        assert!(product.is_sign_positive());
        assert_eq!(product.to_string(), "0");
    }

    #[test]
    fn test_mul_trims_fractional_digits_not_integer() {
        // 29 significant digits at scale 2 times ten: one fractional
        // digit survives
        let product = dec("792281625142643375935439503.35").checked_mul(dec("10")).unwrap();
        assert_eq!(product.to_string(), "7922816251426433759354395033.5");
    }

    #[test]
    fn test_mul_overflow() {
        let r = dec("79228162514264337593543950335").checked_mul(dec("2"));
        assert!(matches!(r, Err(DecimalError::Overflow(_))));

        let r = dec("100000000000000000000").checked_mul(dec("1000000000"));
        assert!(matches!(r, Err(DecimalError::Overflow(_))));
    }

    #[test]
    fn test_mul_keeps_small_scales_exact() {
        let product = dec("1.20").checked_mul(dec("2")).unwrap();
        assert_eq!(product.to_string(), "2.40");
        assert_eq!(product.scale(), 2);
    }
}
