//! Tolerant field decoding for upstream records.
//!
//! The API sometimes sends `null` or a value of the wrong type for a field.
//! One bad field must not fail a whole list fetch, so record fields decode
//! through [`or_default`], which falls back to the field's default value.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Decode `T`, or `T::default()` when the value is `null` or malformed.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Valid(value) => value,
        Lenient::Invalid(_) => T::default(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "super::or_default")]
        name: String,
        #[serde(deserialize_with = "super::or_default")]
        count: u32,
    }

    #[test]
    fn test_null_and_wrong_types_default() {
        let row: Row = serde_json::from_str(r#"{"name": null, "count": "many"}"#).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.count, 0);
    }

    #[test]
    fn test_valid_values_pass_through() {
        let row: Row = serde_json::from_str(r#"{"name": "Alpha", "count": 3}"#).unwrap();
        assert_eq!(row.name, "Alpha");
        assert_eq!(row.count, 3);
    }

    #[test]
    fn test_negative_count_defaults() {
        let row: Row = serde_json::from_str(r#"{"count": -2}"#).unwrap();
        assert_eq!(row.count, 0);
    }
}
