//! Integers serialize as their decimal string,
//! so that formats with bounded integers lose no precision.

use {
    super::BigInteger,
    serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{self, Visitor},
    },
    std::fmt,
};

impl Serialize for BigInteger
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInteger
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        deserializer.deserialize_any(BigIntegerVisitor)
    }
}

struct BigIntegerVisitor;

impl<'de> Visitor<'de> for BigIntegerVisitor
{
    type Value = BigInteger;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "a decimal integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(BigInteger::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where E: de::Error
    {
        Ok(BigInteger::from(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where E: de::Error
    {
        value.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn serializes_as_string()
    {
        let a: BigInteger = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        assert_eq!(serde_json::from_str::<BigInteger>(&json).unwrap(), a);
    }

    #[test]
    fn deserializes_from_number()
    {
        let a: BigInteger = serde_json::from_str("-42").unwrap();
        assert_eq!(a, BigInteger::from(-42));
        let b: BigInteger = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(b, BigInteger::from(u64::MAX));
    }

    #[test]
    fn rejects_malformed_string()
    {
        let err = serde_json::from_str::<BigInteger>("\"12x\"").unwrap_err();
        assert!(err.to_string().contains("Invalid digit 'x' at offset 2"));
        assert!(serde_json::from_str::<BigInteger>("1.5").is_err());
    }
}
