//! Lenient decoding of boolean flags.
//!
//! Older exports store flags as `0/1` integers or strings, newer ones as JSON
//! booleans. Both forms are accepted; serialization always emits a boolean.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, 0/1 or a string flag")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        Ok(v == 1)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        Ok(v == 1)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<bool, E> {
        Ok(v == 1.0)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.trim().to_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<bool, D::Error> {
        d.deserialize_any(FlagVisitor)
    }
}

/// `#[serde(deserialize_with = "...")]` helper for flag fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlagVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::deserialize", default)]
        flag: bool,
    }

    fn parse(json: &str) -> bool {
        serde_json::from_str::<Probe>(json).unwrap().flag
    }

    #[test]
    fn test_accepts_numeric_and_string_forms() {
        assert!(parse(r#"{"flag": 1}"#));
        assert!(!parse(r#"{"flag": 0}"#));
        assert!(parse(r#"{"flag": "1"}"#));
        assert!(!parse(r#"{"flag": "0"}"#));
        assert!(parse(r#"{"flag": true}"#));
        assert!(parse(r#"{"flag": "TRUE"}"#));
        assert!(!parse(r#"{"flag": null}"#));
        assert!(!parse(r#"{}"#));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"flag": "maybe"}"#).is_err());
    }
}
