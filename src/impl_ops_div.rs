//! Division operator trait implementation
//!

use crate::Decimal;
use std::ops::{Div, DivAssign};

impl Div<Decimal> for Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics on a zero divisor or overflow; use
    /// [`Decimal::checked_div`] to handle either as a value.
    #[inline]
    fn div(self, rhs: Decimal) -> Decimal {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("decimal division failed: {}", e),
        }
    }
}

forward_ref_binop!(impl Div for Decimal, div);

impl DivAssign<Decimal> for Decimal {
    #[inline]
    fn div_assign(&mut self, rhs: Decimal) {
        *self = *self / rhs;
    }
}

forward_ref_assignop!(impl DivAssign for Decimal, div_assign);
