// tests for the rounding engine; pulled into rounding.rs

mod test_round_pair {
    use super::RoundingMode::*;

    macro_rules! impl_case {
        ($name:ident: $mode:expr, $pair:expr, $trailing:literal => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!($mode.round_pair($pair, $trailing), $expected);
            }
        };
    }

    impl_case!(case_down_4_5: Down, (4, 5), true => 4);
    impl_case!(case_down_4_9: Down, (4, 9), false => 4);
    impl_case!(case_up_4_0_trailing: Up, (4, 0), true => 4);
    impl_case!(case_up_4_0_sticky: Up, (4, 0), false => 5);
    impl_case!(case_up_4_1: Up, (4, 1), true => 5);
    impl_case!(case_halfup_4_5: HalfUp, (4, 5), true => 5);
    impl_case!(case_halfup_4_4: HalfUp, (4, 4), false => 4);
    impl_case!(case_halfeven_4_5_exact: HalfEven, (4, 5), true => 4);
    impl_case!(case_halfeven_5_5_exact: HalfEven, (5, 5), true => 6);
    impl_case!(case_halfeven_4_5_sticky: HalfEven, (4, 5), false => 5);
    impl_case!(case_halfeven_2_6: HalfEven, (2, 6), true => 3);
    impl_case!(case_halfeven_9_5_carries: HalfEven, (9, 5), true => 10);
}

mod test_round_to_digits {
    use super::*;
    use crate::arithmetic::u256::U256;
    use crate::arithmetic::ten_to_the;

    fn round_u128(value: u128, n: u32, mode: RoundingMode) -> u128 {
        round_to_digits(U256::from_u128(value), n, mode).low()
    }

    #[test]
    fn case_keep_all_digits() {
        assert_eq!(round_u128(12345, 5, RoundingMode::HalfEven), 12345);
        assert_eq!(round_u128(12345, 9, RoundingMode::Down), 12345);
    }

    #[test]
    fn case_carry_through_nines() {
        assert_eq!(round_u128(997, 2, RoundingMode::HalfEven), 100);
        assert_eq!(round_u128(999, 2, RoundingMode::Up), 100);
    }

    #[test]
    fn case_thirty_digit_value_to_29() {
        // truncation lands exactly on the maximum coefficient, and the
        // dropped 6 rounds it one past
        let v = U256::mul128(crate::MAX_COEFFICIENT, 10) + U256::from_u128(6);
        let rounded = round_to_digits(v, 29, RoundingMode::HalfEven);
        assert_eq!(
            rounded,
            U256::from_u128(79_228_162_514_264_337_593_543_950_336)
        );
    }

    #[test]
    fn case_keep_zero_digits() {
        assert_eq!(round_u128(7, 0, RoundingMode::HalfEven), 1);
        assert_eq!(round_u128(4, 0, RoundingMode::HalfEven), 0);
        assert_eq!(round_u128(5, 0, RoundingMode::HalfEven), 0);
        assert_eq!(round_u128(5, 0, RoundingMode::HalfUp), 1);
        assert_eq!(round_u128(1, 0, RoundingMode::Up), 1);
    }

    #[test]
    fn case_modes_disagree_at_half() {
        assert_eq!(round_u128(250, 2, RoundingMode::Down), 25);
        assert_eq!(round_u128(250, 2, RoundingMode::Up), 25);
        assert_eq!(round_u128(255, 2, RoundingMode::Down), 25);
        assert_eq!(round_u128(255, 2, RoundingMode::Up), 26);
        assert_eq!(round_u128(255, 2, RoundingMode::HalfUp), 26);
        assert_eq!(round_u128(255, 2, RoundingMode::HalfEven), 26);
        assert_eq!(round_u128(245, 2, RoundingMode::HalfEven), 24);
        assert_eq!(round_u128(2451, 2, RoundingMode::HalfEven), 25);
    }

    #[test]
    fn case_wide_tie_to_even() {
        // 10^40 + 5·10^10 kept to 30 digits drops exactly the half-point;
        // the even quotient 10^29 stays put
        let v = ten_to_the(40) + (ten_to_the(11) >> 1);
        let rounded = round_to_digits(v, 30, RoundingMode::HalfEven);
        assert_eq!(rounded, ten_to_the(29));
    }
}

mod test_truncate_to_max_coefficient {
    use super::*;
    use crate::arithmetic::u256::U256;
    use crate::arithmetic::ten_to_the;

    #[test]
    fn case_already_fits() {
        assert_eq!(truncate_to_max_coefficient(U256::from_u128(123)), (123, 0));
        assert_eq!(
            truncate_to_max_coefficient(U256::from_u128(crate::MAX_COEFFICIENT)),
            (crate::MAX_COEFFICIENT, 0)
        );
    }

    #[test]
    fn case_29_digits_above_max() {
        // 2^96 has 29 digits but does not fit the coefficient
        let v = U256::from_u128(1u128 << 96);
        assert_eq!(truncate_to_max_coefficient(v), (7_922_816_251_426_433_759_354_395_034, 1));
    }

    #[test]
    fn case_rounding_carries_past_max() {
        // truncating to 29 digits gives exactly MAX and the dropped 6
        // carries past 96 bits; a second digit must go
        let v = U256::mul128(crate::MAX_COEFFICIENT, 10) + U256::from_u128(6);
        assert_eq!(truncate_to_max_coefficient(v), (7_922_816_251_426_433_759_354_395_034, 2));
    }

    #[test]
    fn case_plain_reduction() {
        // 10^30 + 44 has 31 digits; two come off and the 44 rounds away
        let v = ten_to_the(30) + U256::from_u128(44);
        assert_eq!(truncate_to_max_coefficient(v), (ten_to_the(28).low(), 2));
    }

    #[test]
    fn case_product_of_two_max_coefficients() {
        let v = U256::mul128(crate::MAX_COEFFICIENT, crate::MAX_COEFFICIENT);
        let (coeff, removed) = truncate_to_max_coefficient(v);
        assert!(coeff <= crate::MAX_COEFFICIENT);
        assert_eq!(removed, 29);
        // (2^96 - 1)^2 = 2^192 - 2^97 + 1
        //             = 6277101735386680763835789423049210091073826769276946612225
        // keeping 29 of its 58 digits
        assert_eq!(coeff, 62_771_017_353_866_807_638_357_894_230);
    }
}
