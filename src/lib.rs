// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-size decimal numbers
//!
//! `Decimal` stores a signed decimal in 128 bits: a 96-bit unsigned
//! coefficient, a scale in `0..=28` giving the number of digits right
//! of the decimal point, and a sign bit. Arithmetic is exact wherever
//! the result fits that envelope and rounds half-to-even where it does
//! not, which avoids the drift binary floating point brings to
//! monetary sums (where 0.1 + 0.2 ≠ 0.3).
//!
//! The in-memory interchange layout matches the Microsoft `DECIMAL` /
//! .NET `System.Decimal` encoding; see [`Decimal::to_bits`].
//!
//! # Example
//!
//! ```
//! use fixed_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let price = Decimal::from_str("29.95").unwrap();
//! let quantity = Decimal::from(3);
//! assert_eq!((price * quantity).to_string(), "89.85");
//! ```

#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_integer::Integer;
pub use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

#[macro_use]
mod macros;

// "low level" functions
mod arithmetic;

// From<T>, TryFrom<T> impls
mod impl_convert;
mod impl_trait_from_str;

// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_div;
mod impl_ops_mul;
mod impl_ops_rem;
mod impl_ops_sub;

// PartialEq / PartialOrd
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Implementations of std::fmt traits
mod impl_fmt;

// Implementations for serialization
#[cfg(feature = "serde")]
mod impl_serde;

// construct Decimals from strings
mod parsing;

// Routines for rounding
pub mod rounding;
pub use rounding::RoundingMode;

use arithmetic::ten_to_the_u128;

/// Maximum scale: digits allowed right of the decimal point
pub const MAX_SCALE: u32 = 28;

/// Largest coefficient, 2^96 − 1
pub const MAX_COEFFICIENT: u128 = 79_228_162_514_264_337_593_543_950_335;

// flags-word layout of the interchange format
const SIGN_MASK: u32 = 1 << 31;
const SCALE_MASK: u32 = 0x001F_0000;
const SCALE_SHIFT: u32 = 16;

/// A fixed-size decimal number
///
/// Represents (−1)^sign · coefficient · 10^(−scale), with the
/// coefficient below 2^96 and the scale between 0 and 28. Values are
/// plain `Copy` data and no operation mutates its operands.
///
/// The pair (coefficient, scale) is deliberately not normalized:
/// `5.00` and `5` are distinct representations that compare equal and
/// format differently.
#[derive(Clone, Copy)]
pub struct Decimal {
    /// unsigned coefficient, always below 2^96
    coeff: u128,
    /// digits right of the decimal point, 0..=28
    scale: u8,
    /// a zero coefficient may carry either sign but compares equal to +0
    negative: bool,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal::from_raw_parts(0, 0, false);
    pub const ONE: Decimal = Decimal::from_raw_parts(1, 0, false);
    pub const TWO: Decimal = Decimal::from_raw_parts(2, 0, false);
    pub const TEN: Decimal = Decimal::from_raw_parts(10, 0, false);

    /// Largest representable value, (2^96 − 1) at scale zero
    pub const MAX: Decimal = Decimal::from_raw_parts(MAX_COEFFICIENT, 0, false);

    /// Smallest representable value, −(2^96 − 1) at scale zero
    pub const MIN: Decimal = Decimal::from_raw_parts(MAX_COEFFICIENT, 0, true);

    /// Construct from parts already satisfying the invariants
    pub(crate) const fn from_raw_parts(coeff: u128, scale: u8, negative: bool) -> Decimal {
        debug_assert!(coeff <= MAX_COEFFICIENT);
        debug_assert!(scale as u32 <= MAX_SCALE);
        Decimal {
            coeff,
            scale,
            negative,
        }
    }

    /// Construct from the three coefficient words of the interchange
    /// layout plus scale and sign
    ///
    /// `lo`, `mid` and `hi` are bits 0–31, 32–63 and 64–95 of the
    /// coefficient. Fails with `InvalidOperation` when the scale
    /// exceeds 28.
    pub fn from_parts(
        lo: u32,
        mid: u32,
        hi: u32,
        scale: u32,
        negative: bool,
    ) -> Result<Decimal, DecimalError> {
        if scale > MAX_SCALE {
            return Err(DecimalError::InvalidOperation("scale exceeds the maximum of 28"));
        }
        let coeff = ((hi as u128) << 64) | ((mid as u128) << 32) | lo as u128;
        Ok(Decimal::from_raw_parts(coeff, scale as u8, negative))
    }

    /// Unpack the 128-bit interchange representation
    ///
    /// Fails with `InvalidOperation` when a reserved flag bit is set or
    /// the scale is out of range.
    pub fn from_bits(bits: u128) -> Result<Decimal, DecimalError> {
        let flags = (bits >> 96) as u32;
        if flags & !(SIGN_MASK | SCALE_MASK) != 0 {
            return Err(DecimalError::InvalidOperation("reserved flag bits are set"));
        }
        let scale = (flags & SCALE_MASK) >> SCALE_SHIFT;
        if scale > MAX_SCALE {
            return Err(DecimalError::InvalidOperation("scale exceeds the maximum of 28"));
        }
        let coeff = bits & ((1u128 << 96) - 1);
        Ok(Decimal::from_raw_parts(coeff, scale as u8, flags & SIGN_MASK != 0))
    }

    /// Pack into the 128-bit interchange representation
    ///
    /// Bits 0–95 hold the coefficient, bits 112–116 the scale, bit 127
    /// the sign; every other bit is zero.
    pub fn to_bits(&self) -> u128 {
        let mut flags = (self.scale as u32) << SCALE_SHIFT;
        if self.negative {
            flags |= SIGN_MASK;
        }
        ((flags as u128) << 96) | self.coeff
    }

    /// Little-endian byte form of [`to_bits`][Self::to_bits]
    pub fn to_le_bytes(&self) -> [u8; 16] {
        self.to_bits().to_le_bytes()
    }

    /// Unpack from the little-endian byte form
    pub fn from_le_bytes(bytes: [u8; 16]) -> Result<Decimal, DecimalError> {
        Decimal::from_bits(u128::from_le_bytes(bytes))
    }

    /// The unsigned coefficient
    #[inline]
    pub const fn coefficient(&self) -> u128 {
        self.coeff
    }

    /// Number of digits right of the decimal point, 0..=28
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale as u32
    }

    #[inline]
    pub const fn is_sign_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub const fn is_sign_positive(&self) -> bool {
        !self.negative
    }

    /// True for both +0 and −0
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.coeff == 0
    }

    /// Absolute value
    #[inline]
    pub const fn abs(&self) -> Decimal {
        Decimal {
            coeff: self.coeff,
            scale: self.scale,
            negative: false,
        }
    }

    /// The equivalent value with trailing coefficient zeros stripped
    ///
    /// ```
    /// # use fixed_decimal::Decimal;
    /// # use std::str::FromStr;
    /// let n = Decimal::from_str("5.00").unwrap();
    /// assert_eq!(n.normalize().to_string(), "5");
    /// ```
    pub fn normalize(&self) -> Decimal {
        if self.coeff == 0 {
            return Decimal::ZERO;
        }
        let mut coeff = self.coeff;
        let mut scale = self.scale;
        while scale > 0 && coeff % 10 == 0 {
            coeff /= 10;
            scale -= 1;
        }
        Decimal::from_raw_parts(coeff, scale, self.negative)
    }

    /// Return the value rescaled to exactly `new_scale` digits right of
    /// the decimal point
    ///
    /// Lowering the scale rounds digits off under `mode`; raising it
    /// multiplies the coefficient, failing with `Overflow` when that
    /// leaves 96 bits. A requested scale above 28 is an
    /// `InvalidOperation`.
    ///
    /// ```
    /// # use fixed_decimal::{Decimal, RoundingMode};
    /// # use std::str::FromStr;
    /// let n = Decimal::from_str("129.41675").unwrap();
    ///
    /// assert_eq!(n.with_scale_round(2, RoundingMode::Up).unwrap().to_string(), "129.42");
    /// assert_eq!(n.with_scale_round(4, RoundingMode::HalfEven).unwrap().to_string(), "129.4168");
    /// assert_eq!(n.with_scale_round(7, RoundingMode::Down).unwrap().to_string(), "129.4167500");
    /// ```
    pub fn with_scale_round(
        &self,
        new_scale: u32,
        mode: RoundingMode,
    ) -> Result<Decimal, DecimalError> {
        if new_scale > MAX_SCALE {
            return Err(DecimalError::InvalidOperation("scale exceeds the maximum of 28"));
        }
        match new_scale.cmp(&self.scale()) {
            Ordering::Equal => Ok(*self),
            Ordering::Greater => {
                let diff = new_scale - self.scale();
                self.coeff
                    .checked_mul(ten_to_the_u128(diff))
                    .filter(|c| *c <= MAX_COEFFICIENT)
                    .map(|c| Decimal::from_raw_parts(c, new_scale as u8, self.negative))
                    .ok_or(DecimalError::Overflow("coefficient exceeds 96 bits"))
            }
            Ordering::Less => Ok(self.reduce_scale(new_scale, mode)),
        }
    }

    /// Round half-to-even to `scale` decimal places
    ///
    /// ```
    /// # use fixed_decimal::Decimal;
    /// # use std::str::FromStr;
    /// let n = Decimal::from_str("2.5").unwrap();
    /// assert_eq!(n.round(0).unwrap().to_string(), "2");
    /// ```
    #[inline]
    pub fn round(&self, scale: u32) -> Result<Decimal, DecimalError> {
        self.with_scale_round(scale, RoundingMode::HalfEven)
    }

    /// Truncate towards zero to `scale` decimal places
    #[inline]
    pub fn trunc(&self, scale: u32) -> Result<Decimal, DecimalError> {
        self.with_scale_round(scale, RoundingMode::Down)
    }

    /// Largest integral value not greater than `self`
    pub fn floor(&self) -> Decimal {
        if self.scale == 0 {
            return *self;
        }
        let mode = if self.negative {
            RoundingMode::Up
        } else {
            RoundingMode::Down
        };
        self.reduce_scale(0, mode)
    }

    /// Smallest integral value not less than `self`
    pub fn ceil(&self) -> Decimal {
        if self.scale == 0 {
            return *self;
        }
        let mode = if self.negative {
            RoundingMode::Down
        } else {
            RoundingMode::Up
        };
        self.reduce_scale(0, mode)
    }

    /// Drop digits down to `new_scale` (at most the current scale),
    /// rounding the last kept digit under `mode`
    fn reduce_scale(&self, new_scale: u32, mode: RoundingMode) -> Decimal {
        debug_assert!(new_scale < self.scale());
        let k = self.scale() - new_scale;
        let pow = ten_to_the_u128(k);
        let (quotient, remainder) = self.coeff.div_rem(&pow);

        let leading = pow / 10;
        let digit = (remainder / leading) as u8;
        let trailing_zeros = remainder % leading == 0;
        let pair = ((quotient % 10) as u8, digit);
        let quotient = if mode.round_pair(pair, trailing_zeros) != pair.0 {
            quotient + 1
        } else {
            quotient
        };
        Decimal::from_raw_parts(quotient, new_scale as u8, self.negative)
    }

    /// Checked addition; `Overflow` when the sum leaves the envelope
    #[inline]
    pub fn checked_add(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        arithmetic::addition::add(&self, &rhs)
    }

    /// Checked subtraction; `Overflow` when the difference leaves the envelope
    #[inline]
    pub fn checked_sub(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        arithmetic::addition::sub(&self, &rhs)
    }

    /// Checked multiplication; `Overflow` when the product leaves the envelope
    #[inline]
    pub fn checked_mul(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        arithmetic::multiplication::mul(&self, &rhs)
    }

    /// Checked division; `DivisionByZero` for a zero divisor and
    /// `InvalidOperation` for 0 / 0
    #[inline]
    pub fn checked_div(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        arithmetic::division::div(&self, &rhs)
    }

    /// Checked remainder, with the sign of the dividend
    #[inline]
    pub fn checked_rem(self, rhs: Decimal) -> Result<Decimal, DecimalError> {
        arithmetic::division::rem(&self, &rhs)
    }

    /// Square root; `InvalidOperation` for negative values
    ///
    /// ```
    /// # use fixed_decimal::Decimal;
    /// let root = Decimal::TWO.sqrt().unwrap();
    /// assert_eq!(root.to_string(), "1.4142135623730950488016887242");
    /// ```
    #[inline]
    pub fn sqrt(&self) -> Result<Decimal, DecimalError> {
        arithmetic::sqrt::sqrt(self)
    }
}

/// Errors from decimal construction and arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// Input text is not a valid decimal number
    ConversionSyntax(String),
    /// The result cannot fit a 96-bit coefficient at scale zero
    Overflow(&'static str),
    /// Division with a zero divisor and nonzero dividend
    DivisionByZero,
    /// The operation is undefined for its operands
    InvalidOperation(&'static str),
    /// A wide-integer invariant was violated; always a bug
    Internal(&'static str),
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DecimalError::*;

        match self {
            ConversionSyntax(reason) => write!(f, "invalid decimal literal: {}", reason),
            Overflow(reason) => write!(f, "decimal overflow: {}", reason),
            DivisionByZero => "decimal division by zero".fmt(f),
            InvalidOperation(reason) => write!(f, "invalid decimal operation: {}", reason),
            Internal(reason) => write!(f, "internal decimal arithmetic error: {}", reason),
        }
    }
}

impl std::error::Error for DecimalError {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // equal values must hash alike: 5.00 == 5 and -0 == +0
        let n = self.normalize();
        n.coeff.hash(state);
        n.scale.hash(state);
        n.negative.hash(state);
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Decimal {
        Decimal::ZERO
    }
}
