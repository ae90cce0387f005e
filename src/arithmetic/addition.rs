//! scale-aligned additive arithmetic

use std::cmp::Ordering;

use super::u256::U256;
use super::{from_wide_parts, ten_to_the_u128};
use crate::{Decimal, DecimalError};

/// Align both coefficients to the larger scale, widening to 256 bits
///
/// The smaller-scale operand may leave 96 bits here; the caller narrows
/// the combined result afterwards.
fn aligned(lhs: &Decimal, rhs: &Decimal) -> (U256, U256, i64) {
    let scale = lhs.scale().max(rhs.scale());
    let a = U256::mul128(lhs.coefficient(), ten_to_the_u128(scale - lhs.scale()));
    let b = U256::mul128(rhs.coefficient(), ten_to_the_u128(scale - rhs.scale()));
    (a, b, scale as i64)
}

/// Sum of two decimals
pub(crate) fn add(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
    let (a, b, scale) = aligned(lhs, rhs);

    if lhs.is_sign_negative() == rhs.is_sign_negative() {
        let sum = match a.checked_add(b) {
            Some(sum) => sum,
            None => return Err(DecimalError::Internal("aligned addition overflowed 256 bits")),
        };
        return from_wide_parts(sum, scale, lhs.is_sign_negative());
    }

    // opposite signs: the difference takes the sign of the larger magnitude
    match a.cmp(&b) {
        Ordering::Equal => Ok(Decimal::from_raw_parts(0, scale as u8, false)),
        Ordering::Greater => from_wide_parts(a - b, scale, lhs.is_sign_negative()),
        Ordering::Less => from_wide_parts(b - a, scale, rhs.is_sign_negative()),
    }
}

/// Difference of two decimals; addition with the right sign flipped
pub(crate) fn sub(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
    add(lhs, &(-*rhs))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_add() {
        let vals = vec![
            ("1.1", "2.2", "3.3"),
            ("12.34", "1.234", "13.574"),
            ("1", "0.1", "1.1"),
            ("0.1", "-0.1", "0.0"),
            ("-5", "5", "0"),
            ("-5", "-5", "-10"),
            ("5", "-7", "-2"),
            ("-3.2", "1.05", "-2.15"),
            ("0", "0", "0"),
            ("79228162514264337593543950335", "-1", "79228162514264337593543950334"),
            // aligning the integer pushes it past 96 bits; the sum
            // re-rounds into the envelope
            ("79228162514264337593543950335", "0.45", "79228162514264337593543950335"),
            ("0.0000000000000000000000000001", "0.0000000000000000000000000001", "0.0000000000000000000000000002"),
        ];
        for &(x, y, expected) in vals.iter() {
            let sum = dec(x).checked_add(dec(y)).unwrap();
            assert_eq!(sum.to_string(), expected, "{} + {}", x, y);
            let comm = dec(y).checked_add(dec(x)).unwrap();
            assert_eq!(sum, comm, "{} + {} is not commutative", x, y);
        }
    }

    #[test]
    fn test_add_scale_of_aligned_zero() {
        let sum = dec("1.25").checked_add(dec("-1.25")).unwrap();
        assert_eq!(sum.to_string(), "0.00");
        assert_eq!(sum.scale(), 2);
        assert!(sum.is_sign_positive());
    }

    #[test]
    fn test_add_overflow() {
        let r = dec("79228162514264337593543950335").checked_add(dec("1"));
        assert!(matches!(r, Err(DecimalError::Overflow(_))));

        let r = dec("-79228162514264337593543950335").checked_add(dec("-1"));
        assert!(matches!(r, Err(DecimalError::Overflow(_))));
    }

    #[test]
    fn test_sub() {
        let vals = vec![
            ("3.3", "2.2", "1.1"),
            ("1", "3", "-2"),
            ("-1", "-3", "2"),
            ("5.00", "5", "0.00"),
            ("0.1", "0.01", "0.09"),
            ("79228162514264337593543950335", "79228162514264337593543950335", "0"),
        ];
        for &(x, y, expected) in vals.iter() {
            let diff = dec(x).checked_sub(dec(y)).unwrap();
            assert_eq!(diff.to_string(), expected, "{} - {}", x, y);
        }
    }

    #[test]
    fn test_sub_self_is_positive_zero() {
        let x = dec("-4.5");
        let diff = x.checked_sub(x).unwrap();
        assert!(diff.is_zero());
        assert!(diff.is_sign_positive());
    }
}
