//! Remainder operator trait implementation
//!

use crate::Decimal;
use std::ops::{Rem, RemAssign};

impl Rem<Decimal> for Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics on a zero divisor; use [`Decimal::checked_rem`] to
    /// handle it as a value.
    #[inline]
    fn rem(self, rhs: Decimal) -> Decimal {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(e) => panic!("decimal remainder failed: {}", e),
        }
    }
}

forward_ref_binop!(impl Rem for Decimal, rem);

impl RemAssign<Decimal> for Decimal {
    #[inline]
    fn rem_assign(&mut self, rhs: Decimal) {
        *self = *self % rhs;
    }
}

forward_ref_assignop!(impl RemAssign for Decimal, rem_assign);
