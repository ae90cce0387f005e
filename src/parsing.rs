//! Routines for parsing text into Decimals

use crate::arithmetic::{count_decimal_digits_u128, ten_to_the_u128, MAX_COEFFICIENT_DIGITS};
use crate::rounding::RoundingMode;
use crate::{Decimal, DecimalError, MAX_COEFFICIENT, MAX_SCALE};

/// Coefficient bound past which further digits fold into the rounding
/// state instead of accumulating: 10^29, so at most 30 digits are kept
const COEFFICIENT_CAP: u128 = 100_000_000_000_000_000_000_000_000_000;

/// Exponent digits saturate here; the true magnitude only matters up to
/// "larger than any representable scale"
const EXPONENT_CAP: i64 = 1_000_000_000_000;

/// Parse a decimal literal
///
/// Grammar: optional sign, digits with at most one decimal point (at
/// least one digit overall), and an optional `e`/`E` exponent.
/// Surrounding whitespace is trimmed and underscores between digits are
/// ignored. Fractional digits beyond scale 28 round half-to-even;
/// integer magnitudes beyond 96 bits fail with `Overflow`.
pub(crate) fn parse_decimal(input: &str) -> Result<Decimal, DecimalError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DecimalError::ConversionSyntax("empty string".to_string()));
    }

    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = match bytes[0] {
        b'+' => {
            i += 1;
            false
        }
        b'-' => {
            i += 1;
            true
        }
        _ => false,
    };

    let mut coeff: u128 = 0;
    let mut any_digits = false;
    let mut seen_point = false;
    let mut frac_digits: i64 = 0;
    let mut dropped: i64 = 0;
    let mut insig_digit: u8 = 0;
    let mut insig_sticky = false;

    while i < bytes.len() {
        match bytes[i] {
            d @ b'0'..=b'9' => {
                any_digits = true;
                if coeff < COEFFICIENT_CAP {
                    coeff = coeff * 10 + (d - b'0') as u128;
                } else {
                    insig_sticky = insig_sticky || insig_digit != 0;
                    insig_digit = d - b'0';
                    dropped += 1;
                }
                if seen_point {
                    frac_digits += 1;
                }
            }
            b'.' if !seen_point => seen_point = true,
            b'.' => {
                return Err(DecimalError::ConversionSyntax(format!(
                    "multiple decimal points in {:?}",
                    s
                )));
            }
            b'_' => {}
            b'e' | b'E' => break,
            _ => {
                return Err(DecimalError::ConversionSyntax(format!(
                    "invalid character in {:?}",
                    s
                )));
            }
        }
        i += 1;
    }

    if !any_digits {
        return Err(DecimalError::ConversionSyntax(format!("no digits in {:?}", s)));
    }

    let mut exponent: i64 = 0;
    if i < bytes.len() {
        // bytes[i] is the exponent separator
        i += 1;
        let exp_negative = match bytes.get(i) {
            Some(&b'+') => {
                i += 1;
                false
            }
            Some(&b'-') => {
                i += 1;
                true
            }
            _ => false,
        };
        let mut any_exp_digits = false;
        while i < bytes.len() {
            match bytes[i] {
                d @ b'0'..=b'9' => {
                    any_exp_digits = true;
                    if exponent < EXPONENT_CAP {
                        exponent = exponent * 10 + (d - b'0') as i64;
                    }
                }
                b'_' => {}
                _ => {
                    return Err(DecimalError::ConversionSyntax(format!(
                        "invalid character in exponent of {:?}",
                        s
                    )));
                }
            }
            i += 1;
        }
        if !any_exp_digits {
            return Err(DecimalError::ConversionSyntax(format!(
                "exponent has no digits in {:?}",
                s
            )));
        }
        if exp_negative {
            exponent = -exponent;
        }
    }

    // net digits right of the decimal point for the kept coefficient
    let mut scale = frac_digits - exponent - dropped;

    // fold off low-order digits until coefficient and scale fit the envelope
    loop {
        if scale > MAX_SCALE as i64 {
            if coeff == 0 {
                // only sticky state remains below this point
                insig_sticky = insig_sticky || insig_digit != 0;
                insig_digit = 0;
                scale = MAX_SCALE as i64;
            } else {
                insig_sticky = insig_sticky || insig_digit != 0;
                insig_digit = (coeff % 10) as u8;
                coeff /= 10;
                scale -= 1;
            }
        } else if coeff > MAX_COEFFICIENT {
            if scale <= 0 {
                return Err(DecimalError::Overflow("integer part exceeds 96 bits"));
            }
            insig_sticky = insig_sticky || insig_digit != 0;
            insig_digit = (coeff % 10) as u8;
            coeff /= 10;
            scale -= 1;
        } else {
            break;
        }
    }

    // one rounding step for everything folded off
    if insig_digit > 0 || insig_sticky {
        let pair = ((coeff % 10) as u8, insig_digit);
        if RoundingMode::HalfEven.round_pair(pair, !insig_sticky) != pair.0 {
            coeff += 1;
            if coeff > MAX_COEFFICIENT {
                // the carry ran past 96 bits: one more digit comes off
                if scale <= 0 {
                    return Err(DecimalError::Overflow("integer part exceeds 96 bits"));
                }
                let digit = (coeff % 10) as u8;
                coeff /= 10;
                scale -= 1;
                let pair = ((coeff % 10) as u8, digit);
                if RoundingMode::HalfEven.round_pair(pair, true) != pair.0 {
                    coeff += 1;
                }
            }
        }
    }

    if scale < 0 {
        if coeff == 0 {
            scale = 0;
        } else {
            let digits = count_decimal_digits_u128(coeff) as i64;
            if digits - scale > MAX_COEFFICIENT_DIGITS as i64 {
                return Err(DecimalError::Overflow("integer part exceeds 96 bits"));
            }
            coeff *= ten_to_the_u128((-scale) as u32);
            if coeff > MAX_COEFFICIENT {
                return Err(DecimalError::Overflow("integer part exceeds 96 bits"));
            }
            scale = 0;
        }
    }

    if coeff == 0 {
        return Ok(Decimal::from_raw_parts(0, scale as u8, false));
    }
    Ok(Decimal::from_raw_parts(coeff, scale as u8, negative))
}
