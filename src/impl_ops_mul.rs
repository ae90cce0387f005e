//! Multiplication operator trait implementation
//!

use crate::Decimal;
use std::ops::{Mul, MulAssign};

impl Mul<Decimal> for Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics when the product overflows; use
    /// [`Decimal::checked_mul`] to handle overflow as a value.
    #[inline]
    fn mul(self, rhs: Decimal) -> Decimal {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(e) => panic!("decimal multiplication failed: {}", e),
        }
    }
}

forward_ref_binop!(impl Mul for Decimal, mul);

impl MulAssign<Decimal> for Decimal {
    #[inline]
    fn mul_assign(&mut self, rhs: Decimal) {
        *self = *self * rhs;
    }
}

forward_ref_assignop!(impl MulAssign for Decimal, mul_assign);
