//! From<T> and TryFrom<T> impls for integer primitives

use std::convert::TryFrom;

use crate::{Decimal, DecimalError, MAX_COEFFICIENT};

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            #[inline]
            fn from(n: $t) -> Decimal {
                Decimal::from_raw_parts(n.unsigned_abs() as u128, 0, n < 0)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            #[inline]
            fn from(n: $t) -> Decimal {
                Decimal::from_raw_parts(n as u128, 0, false)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl TryFrom<i128> for Decimal {
    type Error = DecimalError;

    fn try_from(n: i128) -> Result<Decimal, DecimalError> {
        let magnitude = n.unsigned_abs();
        if magnitude > MAX_COEFFICIENT {
            return Err(DecimalError::Overflow("integer exceeds 96 bits"));
        }
        Ok(Decimal::from_raw_parts(magnitude, 0, n < 0))
    }
}

impl TryFrom<u128> for Decimal {
    type Error = DecimalError;

    fn try_from(n: u128) -> Result<Decimal, DecimalError> {
        if n > MAX_COEFFICIENT {
            return Err(DecimalError::Overflow("integer exceeds 96 bits"));
        }
        Ok(Decimal::from_raw_parts(n, 0, false))
    }
}
