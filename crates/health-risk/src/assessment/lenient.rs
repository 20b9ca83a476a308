//! Forgiving field decoders for questionnaire payloads.
//!
//! The questionnaire transmits most values as strings, so numbers arrive as `"55"` and unset
//! selections arrive as `""`. These helpers normalise both shapes and treat anything that does
//! not parse as an absent value instead of failing the whole payload.

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl RawScalar {
    fn as_number(&self) -> Option<f64> {
        let value = match self {
            RawScalar::Number(value) => Some(*value),
            RawScalar::Text(text) => text.trim().parse::<f64>().ok(),
            RawScalar::Flag(_) => None,
        };
        value.filter(|value| value.is_finite())
    }
}

/// Decode a non-negative decimal, accepting numbers or numeric strings.
pub(crate) fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(RawScalar::as_number)
        .filter(|value| *value >= 0.0))
}

/// Decode a non-negative whole number; fractional input is truncated. Plausibility ranges are
/// left to the intake guard.
pub(crate) fn optional_whole<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(RawScalar::as_number)
        .map(f64::trunc)
        .filter(|value| (0.0..=f64::from(u16::MAX)).contains(value))
        .map(|value| value as u16))
}

/// Decode a yes/no answer given either as a boolean or as text.
pub(crate) fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawScalar::Flag(flag)) => Some(flag),
        Some(RawScalar::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Some(true),
            "no" | "false" => Some(false),
            _ => None,
        },
        Some(RawScalar::Number(_)) | None => None,
    })
}

/// Decode a multi-select answer; `null` is treated like a skipped question.
pub(crate) fn optional_list<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<Vec<String>> + Default,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(raw.map(T::from).unwrap_or_default())
}

/// Decode an enumerated token; empty strings mean "not answered", unknown tokens are errors.
pub(crate) fn optional_token<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let token = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(token) => token.to_ascii_lowercase(),
    };

    let token_deserializer: StrDeserializer<'_, ValueError> = token.as_str().into_deserializer();
    T::deserialize(token_deserializer)
        .map(Some)
        .map_err(serde::de::Error::custom)
}
