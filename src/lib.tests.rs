// scenario and law tests pulled into lib.rs

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

mod scenarios {
    use super::*;

    #[test]
    fn addition_keeps_scale() {
        let sum = dec("1.1") + dec("2.2");
        assert_eq!(sum.to_string(), "3.3");
        assert_eq!(sum.scale(), 1);
    }

    #[test]
    fn multiplication_adds_scales() {
        let product = dec("0.1") * dec("0.1");
        assert_eq!(product.to_string(), "0.01");
        assert_eq!(product.scale(), 2);
    }

    #[test]
    fn division_fills_the_envelope() {
        let quotient = dec("1") / dec("3");
        assert_eq!(quotient.to_string(), "0.3333333333333333333333333333");
        assert_eq!(quotient.scale(), 28);
    }

    #[test]
    fn sqrt_of_two() {
        let root = dec("2").sqrt().unwrap();
        assert_eq!(root.to_string(), "1.4142135623730950488016887242");
    }

    #[test]
    fn adding_one_to_max_overflows() {
        let r = dec("79228162514264337593543950335").checked_add(dec("1"));
        assert!(matches!(r, Err(DecimalError::Overflow(_))));
    }

    #[test]
    fn round_half_to_even() {
        assert_eq!(dec("2.5").round(0).unwrap().to_string(), "2");
        assert_eq!(dec("3.5").round(0).unwrap().to_string(), "4");
    }

    #[test]
    fn negative_zero_times_one_is_positive_zero() {
        let product = dec("-0") * dec("1");
        assert_eq!(product.to_string(), "0");
        assert!(product.is_sign_positive());
    }
}

mod format_parse_round_trip {
    use super::*;

    #[test]
    fn test_round_trip() {
        let vals = vec![
            "0",
            "0.00",
            "1",
            "-1",
            "1.0",
            "5.00",
            "0.5",
            "-0.5",
            "123.456",
            "0.00000001",
            "1331.107",
            "1.414213562373095048801688724",
            "0.0000000000000000000000000001",
            "-0.0000000000000000000000000001",
            "79228162514264337593543950335",
            "-79228162514264337593543950335",
            "7.9228162514264337593543950335",
            "2.7182818284590452353602874714",
        ];
        for s in vals {
            let expected = dec(s);
            let display = format!("{}", expected);
            assert_eq!(display, s, "canonical form differs");
            let parsed = dec(&display);
            assert_eq!(expected, parsed, "[{}] didn't round trip", s);
            assert_eq!(expected.scale(), parsed.scale());
            assert_eq!(expected.coefficient(), parsed.coefficient());
        }
    }

    #[test]
    fn test_round_trip_after_arithmetic() {
        for (x, y) in [("1.5", "0.25"), ("-11", "7"), ("0.001", "999")] {
            for value in [
                dec(x) + dec(y),
                dec(x) - dec(y),
                dec(x) * dec(y),
                dec(x) / dec(y),
            ] {
                let reparsed = dec(&value.to_string());
                assert_eq!(value, reparsed);
                assert_eq!(value.scale(), reparsed.scale());
            }
        }
    }
}

mod algebraic_laws {
    use super::*;

    #[test]
    fn test_commutativity() {
        for (x, y) in [("1.5", "-0.25"), ("1e-28", "4"), ("123", "0.456")] {
            assert_eq!(dec(x) + dec(y), dec(y) + dec(x));
            assert_eq!(dec(x) * dec(y), dec(y) * dec(x));
        }
    }

    #[test]
    fn test_identities() {
        for s in ["0", "-7", "1.5", "0.0000000000000000000000000001", "79228162514264337593543950335"] {
            let x = dec(s);
            assert_eq!(x + Decimal::ZERO, x);
            assert_eq!(x * Decimal::ONE, x);
            let diff = x - x;
            assert!(diff.is_zero());
            assert!(diff.is_sign_positive());
        }
    }

    #[test]
    fn test_mul_div_inverse() {
        for (x, y) in [("7", "3"), ("0.125", "8"), ("-12.5", "0.4")] {
            let product = dec(x) * dec(y);
            assert_eq!(product / dec(y), dec(x), "({} * {}) / {}", x, y, y);
        }
    }

    #[test]
    fn test_rounding_to_own_scale_is_identity() {
        for s in ["0", "1.50", "-0.001", "7.9228162514264337593543950335"] {
            let x = dec(s);
            for mode in [
                RoundingMode::Up,
                RoundingMode::Down,
                RoundingMode::HalfUp,
                RoundingMode::HalfEven,
            ] {
                assert_eq!(x.with_scale_round(x.scale(), mode).unwrap(), x);
            }
        }
    }

    #[test]
    fn test_half_even_keeps_parity() {
        // exact halves land on the even neighbor
        for (input, expected) in [
            ("0.05", "0.0"),
            ("0.15", "0.2"),
            ("0.25", "0.2"),
            ("0.35", "0.4"),
            ("2.5", "2"),
            ("3.5", "4"),
            ("-2.5", "-2"),
            ("-3.5", "-4"),
        ] {
            let rounded = dec(input)
                .with_scale_round(dec(expected).scale(), RoundingMode::HalfEven)
                .unwrap();
            assert_eq!(rounded.to_string(), expected, "round({})", input);
        }
    }
}

mod with_scale_round {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $scale:literal => $( $mode:ident : $expected:literal ),+) => {
            paste! {
                $(
                    #[test]
                    fn [< $name _ $mode:snake >]() {
                        let d = dec($input);
                        let r = d.with_scale_round($scale, RoundingMode::$mode).unwrap();
                        assert_eq!(r.to_string(), $expected);
                        assert_eq!(r.scale(), $scale);
                    }
                )+
            }
        };
    }

    impl_case!(case_2d5_to_0: "2.5", 0 => HalfEven: "2", HalfUp: "3", Down: "2", Up: "3");
    impl_case!(case_2d51_to_0: "2.51", 0 => HalfEven: "3", HalfUp: "3", Down: "2", Up: "3");
    impl_case!(case_n2d5_to_0: "-2.5", 0 => HalfEven: "-2", HalfUp: "-3", Down: "-2", Up: "-3");
    impl_case!(case_1d449_to_1: "1.449", 1 => HalfEven: "1.4", HalfUp: "1.4", Down: "1.4", Up: "1.5");
    impl_case!(case_0d999_to_2: "0.999", 2 => HalfEven: "1.00", HalfUp: "1.00", Down: "0.99", Up: "1.00");
    impl_case!(case_scale_up: "1.5", 3 => HalfEven: "1.500", Down: "1.500");

    #[test]
    fn test_scale_above_max_rejected() {
        let r = dec("1").with_scale_round(29, RoundingMode::HalfEven);
        assert!(matches!(r, Err(DecimalError::InvalidOperation(_))));
    }

    #[test]
    fn test_scale_up_overflow() {
        let r = dec("79228162514264337593543950335").with_scale_round(1, RoundingMode::HalfEven);
        assert!(matches!(r, Err(DecimalError::Overflow(_))));
    }

    #[test]
    fn test_trunc() {
        assert_eq!(dec("2.9").trunc(0).unwrap().to_string(), "2");
        assert_eq!(dec("-2.9").trunc(0).unwrap().to_string(), "-2");
        assert_eq!(dec("2.999").trunc(1).unwrap().to_string(), "2.9");
    }

    #[test]
    fn test_floor_ceil() {
        assert_eq!(dec("2.1").floor().to_string(), "2");
        assert_eq!(dec("-2.1").floor().to_string(), "-3");
        assert_eq!(dec("2.1").ceil().to_string(), "3");
        assert_eq!(dec("-2.1").ceil().to_string(), "-2");
        assert_eq!(dec("7").floor().to_string(), "7");
        assert_eq!(dec("7").ceil().to_string(), "7");
        assert_eq!(dec("-0.5").floor().to_string(), "-1");
        assert_eq!(dec("-0.5").ceil().to_string(), "0");
    }
}

mod interchange_layout {
    use super::*;

    #[test]
    fn test_pack_fields() {
        let d = dec("-123.45");
        let bits = d.to_bits();
        assert_eq!(bits & ((1u128 << 96) - 1), 12345);
        assert_eq!((bits >> 112) & 0x1F, 2); // scale
        assert_eq!(bits >> 127, 1); // sign
        assert_eq!(Decimal::from_bits(bits).unwrap(), d);
    }

    #[test]
    fn test_unpack_rejects_reserved_bits() {
        let r = Decimal::from_bits(1u128 << 96);
        assert!(matches!(r, Err(DecimalError::InvalidOperation(_))));

        let r = Decimal::from_bits(1u128 << 111);
        assert!(matches!(r, Err(DecimalError::InvalidOperation(_))));

        // scale 29 is out of range even though it fits the field
        let r = Decimal::from_bits(29u128 << 112);
        assert!(matches!(r, Err(DecimalError::InvalidOperation(_))));
    }

    #[test]
    fn test_byte_round_trip() {
        for s in ["0", "-1", "79228162514264337593543950335", "0.0000000000000000000000000001"] {
            let d = dec(s);
            let back = Decimal::from_le_bytes(d.to_le_bytes()).unwrap();
            assert_eq!(back.coefficient(), d.coefficient());
            assert_eq!(back.scale(), d.scale());
            assert_eq!(back.is_sign_negative(), d.is_sign_negative());
        }
    }

    #[test]
    fn test_from_parts_words() {
        let d = Decimal::from_parts(0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0, false).unwrap();
        assert_eq!(d, Decimal::MAX);

        assert!(Decimal::from_parts(1, 0, 0, 29, false).is_err());
    }
}

mod hashing {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(d: &Decimal) -> u64 {
        let mut hasher = DefaultHasher::new();
        d.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_values_hash_alike() {
        assert_eq!(hash_of(&dec("5.00")), hash_of(&dec("5")));
        assert_eq!(hash_of(&dec("-0")), hash_of(&dec("0.000")));
        assert_eq!(hash_of(&(-Decimal::ZERO)), hash_of(&Decimal::ZERO));
        assert_ne!(hash_of(&dec("5")), hash_of(&dec("-5")));
    }
}

mod boundary_values {
    use super::*;

    #[test]
    fn test_max_at_both_scales() {
        let max0 = dec("79228162514264337593543950335");
        assert_eq!(max0, Decimal::MAX);
        assert_eq!(max0.coefficient(), MAX_COEFFICIENT);

        let max28 = dec("7.9228162514264337593543950335");
        assert_eq!(max28.coefficient(), MAX_COEFFICIENT);
        assert_eq!(max28.scale(), 28);
    }

    #[test]
    fn test_smallest_positive() {
        let ulp = dec("0.0000000000000000000000000001");
        assert_eq!(ulp.coefficient(), 1);
        assert_eq!(ulp.scale(), 28);
        assert!(ulp > Decimal::ZERO);
        let sum = ulp + ulp;
        assert_eq!(sum.coefficient(), 2);
    }

    #[test]
    fn test_product_landing_exactly_on_96_bits() {
        let product = dec("3") * dec("26409387504754779197847983445");
        assert_eq!(product, Decimal::MAX);
    }

    #[test]
    fn test_min_is_negated_max() {
        assert_eq!(-Decimal::MAX, Decimal::MIN);
        assert!(Decimal::MIN < Decimal::ZERO);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Decimal::default(), Decimal::ZERO);
    }
}
