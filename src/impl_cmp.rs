//! Implementation of comparison operations
//!
//! Comparison is value-based: scales are aligned before coefficients
//! compare, so `5.00 == 5`, and −0 == +0.

use std::cmp::Ordering;

use crate::arithmetic::u256::U256;
use crate::arithmetic::ten_to_the_u128;
use crate::Decimal;

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, rhs: &Decimal) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.is_sign_negative() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (false, true) => {
                return if self.is_sign_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            (false, false) => {}
        }

        if self.is_sign_negative() != other.is_sign_negative() {
            return if self.is_sign_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let ordering = cmp_magnitude(self, other);
        if self.is_sign_negative() {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Compare coefficients after aligning scales in 256-bit width
fn cmp_magnitude(lhs: &Decimal, rhs: &Decimal) -> Ordering {
    let scale = lhs.scale().max(rhs.scale());
    let a = U256::mul128(lhs.coefficient(), ten_to_the_u128(scale - lhs.scale()));
    let b = U256::mul128(rhs.coefficient(), ten_to_the_u128(scale - rhs.scale()));
    a.cmp(&b)
}
