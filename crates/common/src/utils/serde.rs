//! Serialization utilities for loosely typed snapshot values
//!
//! Snapshot exports and hand-maintained resource files mix JSON numbers,
//! numeric strings (`"7.10"`, `"1,200"`) and placeholder strings (`"-"`) for
//! the same field. These helpers fold all of them into `Option<f64>`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a number.
///
/// - numbers are returned as-is
/// - strings are trimmed, thousands separators removed, then parsed
/// - `""`, `"-"`, `null`, booleans, arrays and objects yield `None`
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use orgboard_common::lenient_number;
/// use serde_json::json;
///
/// assert_eq!(lenient_number(&json!(6.65)), Some(6.65));
/// assert_eq!(lenient_number(&json!("7.10")), Some(7.1));
/// assert_eq!(lenient_number(&json!("-")), None);
/// # }
/// ```
pub fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(num) => num.as_f64(),
        Value::String(text) => {
            let cleaned = text.trim().replace(',', "");
            if cleaned.is_empty() || cleaned == "-" {
                return None;
            }
            let parsed = cleaned.parse::<f64>().ok().filter(|v| v.is_finite());
            #[cfg(feature = "observability")]
            if parsed.is_none() {
                tracing::trace!(raw = %text, "non-numeric string treated as missing");
            }
            parsed
        }
        _ => None,
    }
}

/// Serde adapter deserializing any JSON value into `Option<f64>` via
/// [`lenient_number`].
///
/// # Usage
/// ```rust
/// use orgboard_common::lenient_f64;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Deal {
///     #[serde(default, deserialize_with = "lenient_f64")]
///     amount: Option<f64>,
/// }
///
/// let deal: Deal = serde_json::from_str(r#"{"amount": "100000000"}"#).unwrap();
/// assert_eq!(deal.amount, Some(100_000_000.0));
/// ```
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_number(&value))
}
