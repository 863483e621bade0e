//! Query-string helpers.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Deserialize an optional value, treating an empty string as absent.
///
/// HTML search forms submit every field, so an untouched price box
/// arrives as `minimum_price_per_night=`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}
