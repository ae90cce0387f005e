//! Addition operator trait implementation
//!

use crate::Decimal;
use std::ops::{Add, AddAssign};

impl Add<Decimal> for Decimal {
    type Output = Decimal;

    /// # Panics
    ///
    /// Panics when the sum overflows; use [`Decimal::checked_add`] to
    /// handle overflow as a value.
    #[inline]
    fn add(self, rhs: Decimal) -> Decimal {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("decimal addition failed: {}", e),
        }
    }
}

forward_ref_binop!(impl Add for Decimal, add);

impl AddAssign<Decimal> for Decimal {
    #[inline]
    fn add_assign(&mut self, rhs: Decimal) {
        *self = *self + rhs;
    }
}

forward_ref_assignop!(impl AddAssign for Decimal, add_assign);
