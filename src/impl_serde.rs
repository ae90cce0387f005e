//! Routines for serialization and deserialization with serde
//!
//! Decimals serialize as their display string, which round-trips the
//! scale exactly; numeric forms are accepted on deserialization.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Decimal;

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or formatted decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Decimal::from_str(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Decimal, E> {
        Decimal::try_from(v).map_err(E::custom)
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Decimal, E> {
        Decimal::try_from(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        // shortest round-trip form of the float, parsed exactly
        Decimal::from_str(&v.to_string()).map_err(E::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_serialize_as_string() {
        let d = Decimal::from_str("-1.50").unwrap();
        assert_tokens(&d, &[Token::Str("-1.50")]);

        let d = Decimal::from_str("0.0000000000000000000000000001").unwrap();
        assert_tokens(&d, &[Token::Str("0.0000000000000000000000000001")]);
    }

    #[test]
    fn test_deserialize_from_numbers() {
        let d = Decimal::from_str("25").unwrap();
        assert_de_tokens(&d, &[Token::I64(25)]);
        assert_de_tokens(&d, &[Token::U64(25)]);

        let d = Decimal::from_str("2.5").unwrap();
        assert_de_tokens(&d, &[Token::F64(2.5)]);
    }
}
