//! square root implementation

use super::u256::U256;
use super::{count_decimal_digits_u128, from_wide_parts, ten_to_the};
use crate::{Decimal, DecimalError};

/// Decimal digits given to the working radicand before iterating,
/// yielding at least 29 significant digits in the integer root while
/// staying far inside 256 bits
const WORKING_DIGITS: u32 = 60;

/// Square root by Newton–Raphson over the integer coefficient
///
/// The radicand is the coefficient scaled up so the combined scale is
/// even; the integer root then lands at half that scale and narrows
/// into the envelope, giving 28 fractional digits for small values.
pub(crate) fn sqrt(value: &Decimal) -> Result<Decimal, DecimalError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DecimalError::InvalidOperation("square root of a negative number"));
    }
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let digits = count_decimal_digits_u128(value.coefficient());
    let mut shift = WORKING_DIGITS.saturating_sub(digits);
    if (value.scale() + shift) % 2 == 1 {
        shift += 1;
    }

    let radicand = match ten_to_the(shift).checked_mul(value.coefficient()) {
        Some(wide) => wide,
        None => return Err(DecimalError::Internal("square-root radicand overflowed 256 bits")),
    };

    // the power-of-two seed bounds the root from above, so the
    // iteration decreases monotonically until it reaches the floor
    let mut x = U256::ONE << (radicand.bits() / 2 + 1);
    loop {
        let next = (x + radicand.div_rem(x).0) >> 1;
        if next >= x {
            break;
        }
        x = next;
    }

    let scale = (value.scale() + shift) / 2;
    from_wide_parts(x, scale as i64, false)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sqrt() {
        let vals = vec![
            ("0", "0"),
            ("1", "1.0000000000000000000000000000"),
            ("4", "2.0000000000000000000000000000"),
            ("49", "7.0000000000000000000000000000"),
            ("2", "1.4142135623730950488016887242"),
            ("3", "1.7320508075688772935274463415"),
            ("0.25", "0.5000000000000000000000000000"),
            ("100", "10.000000000000000000000000000"),
            ("0.0152399025", "0.1234500000000000000000000000"),
            ("152399025", "12345.000000000000000000000000"),
            ("2e-28", "0.0000000000000141421356237310"),
            ("0.0000000000000000000000000001", "0.0000000000000100000000000000"),
            ("79228162514264337593543950335", "281474976710656.00000000000000"),
        ];
        for &(x, expected) in vals.iter() {
            let root = Decimal::from_str(x).unwrap().sqrt().unwrap();
            assert_eq!(root.to_string(), expected, "sqrt({})", x);
        }
    }

    #[test]
    fn test_sqrt_negative() {
        let r = Decimal::from_str("-1").unwrap().sqrt();
        assert!(matches!(r, Err(DecimalError::InvalidOperation(_))));

        // -0 is still zero
        let r = (-Decimal::ZERO).sqrt().unwrap();
        assert!(r.is_zero());
    }

    #[test]
    fn test_sqrt_squares_back() {
        for x in ["2", "3", "5", "7.7", "123.456", "0.002"] {
            let d = Decimal::from_str(x).unwrap();
            let root = d.sqrt().unwrap();
            let squared = root.checked_mul(root).unwrap();
            let diff = if squared > d {
                squared.checked_sub(d).unwrap()
            } else {
                d.checked_sub(squared).unwrap()
            };
            // drift is bounded by twice the root times its ulp
            let tolerance = Decimal::from_str("0.0000000000000000000000001").unwrap();
            assert!(diff <= tolerance, "sqrt({})^2 drifted by {}", x, diff);
        }
    }
}
