//! long division on the decimal coefficient

use num_integer::Integer;

use super::u256::U256;
use super::{count_decimal_digits_u128, from_wide_parts, ten_to_the_u128, MAX_COEFFICIENT_DIGITS};
use crate::rounding::RoundingMode;
use crate::{Decimal, DecimalError, MAX_SCALE};

/// Quotient of two decimals
///
/// Quotient digits are produced one at a time until the division
/// terminates exactly or the quotient fills the precision/scale
/// envelope; the first surplus digit then rounds the result
/// half-to-even. Exact divisions stop early, keeping the scale small.
pub(crate) fn div(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
    if rhs.is_zero() {
        return Err(if lhs.is_zero() {
            DecimalError::InvalidOperation("0 / 0 is undefined")
        } else {
            DecimalError::DivisionByZero
        });
    }

    let negative = lhs.is_sign_negative() ^ rhs.is_sign_negative();

    if lhs.is_zero() {
        let scale = (lhs.scale() as i64 - rhs.scale() as i64).clamp(0, MAX_SCALE as i64);
        return Ok(Decimal::from_raw_parts(0, scale as u8, false));
    }

    let divisor = rhs.coefficient();
    let mut scale = lhs.scale() as i64 - rhs.scale() as i64;
    let mut num = lhs.coefficient();

    // shift digits in until the first division produces a nonzero quotient
    while num < divisor {
        scale += 1;
        num *= 10;
    }

    let (mut quotient, mut remainder) = num.div_rem(&divisor);

    if remainder != 0 {
        let mut precision = count_decimal_digits_u128(quotient);
        remainder *= 10;
        while remainder != 0 && precision < MAX_COEFFICIENT_DIGITS && scale < MAX_SCALE as i64 {
            let (q, r) = remainder.div_rem(&divisor);
            quotient = quotient * 10 + q;
            remainder = r * 10;
            precision += 1;
            scale += 1;
        }
        if remainder != 0 {
            // round the last digit against the rest of the expansion
            let digit = (remainder / divisor) as u8;
            let exact = remainder % divisor == 0;
            let pair = ((quotient % 10) as u8, digit);
            if RoundingMode::HalfEven.round_pair(pair, exact) != pair.0 {
                quotient += 1;
            }
        }
    }

    from_wide_parts(U256::from_u128(quotient), scale, negative)
}

/// Remainder of two decimals
///
/// Truncated remainder with the sign of the dividend: aligning the
/// coefficients to the larger scale makes the integer remainder exact,
/// and it always fits 96 bits because it is smaller than whichever
/// aligned operand kept its original coefficient.
pub(crate) fn rem(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
    if rhs.is_zero() {
        return Err(if lhs.is_zero() {
            DecimalError::InvalidOperation("0 % 0 is undefined")
        } else {
            DecimalError::DivisionByZero
        });
    }

    let scale = lhs.scale().max(rhs.scale());
    if lhs.is_zero() {
        return Ok(Decimal::from_raw_parts(0, scale as u8, false));
    }

    let a = U256::mul128(lhs.coefficient(), ten_to_the_u128(scale - lhs.scale()));
    let b = U256::mul128(rhs.coefficient(), ten_to_the_u128(scale - rhs.scale()));
    let (_, r) = a.div_rem(b);
    from_wide_parts(r, scale as i64, lhs.is_sign_negative())
}
