//! Subtraction operator trait implementation
//!

use crate::Decimal;
use std::ops::{Sub, SubAssign};

impl Sub<Decimal> for Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics when the difference overflows; use
    /// [`Decimal::checked_sub`] to handle overflow as a value.
    #[inline]
    fn sub(self, rhs: Decimal) -> Decimal {
        match self.checked_sub(rhs) {
            Ok(diff) => diff,
            Err(e) => panic!("decimal subtraction failed: {}", e),
        }
    }
}

forward_ref_binop!(impl Sub for Decimal, sub);

impl SubAssign<Decimal> for Decimal {
    #[inline]
    fn sub_assign(&mut self, rhs: Decimal) {
        *self = *self - rhs;
    }
}

forward_ref_assignop!(impl SubAssign for Decimal, sub_assign);
