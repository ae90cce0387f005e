use crate::{Decimal, DecimalError};
use std::str::FromStr;

impl FromStr for Decimal {
    type Err = DecimalError;

    #[inline]
    fn from_str(s: &str) -> Result<Decimal, DecimalError> {
        crate::parsing::parse_decimal(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $coeff:literal, $scale:literal, $negative:literal) => {
            #[test]
            fn $name() {
                let dec = Decimal::from_str($input).unwrap();
                assert_eq!(dec.coefficient(), $coeff);
                assert_eq!(dec.scale(), $scale);
                assert_eq!(dec.is_sign_negative(), $negative);
            }
        };
    }

    impl_case!(case_1331d107: "1331.107" => 1331107, 3, false);
    impl_case!(case_1d0: "1.0" => 10, 1, false);
    impl_case!(case_2e1: "2e1" => 20, 0, false);
    impl_case!(case_0d00123: "0.00123" => 123, 5, false);
    impl_case!(case_n123: "-123" => 123, 0, true);
    impl_case!(case_12d3: "12.3" => 123, 1, false);
    impl_case!(case_123en1: "123e-1" => 123, 1, false);
    impl_case!(case_1d23ep1: "1.23e+1" => 123, 1, false);
    impl_case!(case_1d23ep3: "1.23E+3" => 1230, 0, false);
    impl_case!(case_1d23en8: "1.23E-8" => 123, 10, false);
    impl_case!(case_n1d23en10: "-1.23E-10" => 123, 12, true);
    impl_case!(case_plus_5: "+5" => 5, 0, false);
    impl_case!(case_leading_dot: ".25" => 25, 2, false);
    impl_case!(case_trailing_dot: "25." => 25, 0, false);
    impl_case!(case_whitespace: "  3.14  " => 314, 2, false);
    impl_case!(case_123_: "123_" => 123, 0, false);
    impl_case!(case_31_862_140d830_686_979: "31_862_140.830_686_979" => 31862140830686979, 9, false);
    impl_case!(case_n1_1d2_2: "-1_1.2_2" => 1122, 2, true);
    impl_case!(case_999d521_939: "999.521_939" => 999521939, 6, false);
    impl_case!(case_679d35_84_03en2: "679.35_84_03E-2" => 679358403, 8, false);
    impl_case!(case_271576662d_e4: "271576662.__E4" => 2715766620000, 0, false);

    impl_case!(case_neg_zero: "-0" => 0, 0, false);
    impl_case!(case_zero_scaled: "0.000" => 0, 3, false);
    impl_case!(case_max: "79228162514264337593543950335" => 79228162514264337593543950335, 0, false);
    impl_case!(case_max_frac: "7.9228162514264337593543950335" => 79228162514264337593543950335, 28, false);
    impl_case!(case_smallest: "0.0000000000000000000000000001" => 1, 28, false);

    // scale 29 rounds half-to-even back into range
    impl_case!(case_round_excess_scale: "0.12345678901234567890123456785" => 1234567890123456789012345678, 28, false);
    impl_case!(case_round_excess_scale_up: "0.12345678901234567890123456786" => 1234567890123456789012345679, 28, false);
    impl_case!(case_underflow_to_zero: "1e-50" => 0, 28, false);
    impl_case!(case_zero_with_large_exponent: "0e50" => 0, 0, false);
    impl_case!(case_half_ulp_ties_down: "0.000000000000000000000000000050" => 0, 28, false);
    impl_case!(case_just_over_half_ulp: "0.000000000000000000000000000051" => 1, 28, false);

    // 30 significant digits round into 29 by spending fractional digits
    impl_case!(case_thirty_digits_frac: "12345678901234567890123456789.1" => 12345678901234567890123456789, 0, false);
    impl_case!(case_thirty_digits_carry: "7922816251426433759354395033.56" => 7922816251426433759354395034, 0, false);
}
