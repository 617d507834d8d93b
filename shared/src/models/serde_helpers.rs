//! Serde helpers for loosely typed backend records
//!
//! Records written from dashboard form fields may carry ids as strings
//! (`"5"`) and availability flags as `0`/`1` or `"true"`/`"false"`.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::Deserializer;
use serde::de::{self, Visitor};

/// Integer given as a JSON number or a numeric string
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64> + TryFrom<u64>,
{
    deserializer.deserialize_any(NumberVisitor(PhantomData))
}

struct NumberVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for NumberVisitor<T>
where
    T: FromStr + TryFrom<i64> + TryFrom<u64>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a numeric string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<T, E>
    where
        E: de::Error,
    {
        T::try_from(value).map_err(|_| E::custom(format!("integer out of range: {value}")))
    }

    fn visit_u64<E>(self, value: u64) -> Result<T, E>
    where
        E: de::Error,
    {
        T::try_from(value).map_err(|_| E::custom(format!("integer out of range: {value}")))
    }

    fn visit_f64<E>(self, value: f64) -> Result<T, E>
    where
        E: de::Error,
    {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            self.visit_i64(value as i64)
        } else {
            Err(E::custom(format!("expected an integer, got {value}")))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        value
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid integer: '{value}'")))
    }
}

/// Flag given as a bool, a number or a `"true"`/`"false"` string
///
/// Numbers follow truthiness (`0` is false); `null` is false.
pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlagVisitor)
}

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a bool, 0/1 or \"true\"/\"false\"")
    }

    fn visit_bool<E>(self, value: bool) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value != 0)
    }

    fn visit_u64<E>(self, value: u64) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value != 0)
    }

    fn visit_f64<E>(self, value: f64) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value != 0.0)
    }

    fn visit_str<E>(self, value: &str) -> Result<bool, E>
    where
        E: de::Error,
    {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(E::custom(format!("invalid flag: '{other}'"))),
        }
    }

    fn visit_unit<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_none<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }
}
