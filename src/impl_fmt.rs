//! Implementation of std::fmt traits
//!

use crate::Decimal;
use std::fmt;

impl fmt::Display for Decimal {
    /// Exact minimal form: the scale fixes the digits after the point,
    /// so trailing zeros are preserved and no exponent is ever used
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.coefficient().to_string();
        let scale = self.scale() as usize;

        let text = if scale == 0 {
            digits
        } else if digits.len() > scale {
            let mut t = digits;
            t.insert(t.len() - scale, '.');
            t
        } else {
            // no integer digits in the coefficient
            let mut t = String::with_capacity(scale + 2);
            t.push_str("0.");
            for _ in 0..scale - digits.len() {
                t.push('0');
            }
            t.push_str(&digits);
            t
        };

        // a bare sign bit on zero never prints
        let non_negative = self.is_sign_positive() || self.is_zero();
        f.pad_integral(non_negative, "", &text)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "Decimal(\"{}\")", self)
        } else {
            write!(
                f,
                "Decimal(sign={}, scale={}, coefficient={})",
                if self.is_sign_negative() { "-" } else { "+" },
                self.scale(),
                self.coefficient()
            )
        }
    }
}
