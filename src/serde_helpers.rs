use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Money fields edited through text inputs may arrive as numbers, numeric
/// strings, `""` or `null`. Blank values become `None`.
pub mod lenient_amount {
    use std::str::FromStr;

    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(Decimal),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawAmount>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawAmount::Number(value)) => Ok(Some(value)),
            Some(RawAmount::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                Decimal::from_str(text)
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("invalid amount: {text}")))
            }
        }
    }
}

/// Explicit `null` is read as the type's default, like an absent key.
pub mod null_as_default {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "lenient_amount::deserialize")]
        price: Option<Decimal>,
    }

    fn parse(json: &str) -> Option<Decimal> {
        serde_json::from_str::<Priced>(json).unwrap().price
    }

    #[test]
    fn test_number_and_string_amounts() {
        assert_eq!(parse(r#"{"price": 450}"#), Some(Decimal::from(450)));
        assert_eq!(parse(r#"{"price": "450"}"#), Some(Decimal::from(450)));
        assert_eq!(parse(r#"{"price": " 12.5 "}"#), Some(Decimal::new(125, 1)));
    }

    #[test]
    fn test_blank_amounts_are_none() {
        assert_eq!(parse(r#"{"price": ""}"#), None);
        assert_eq!(parse(r#"{"price": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_garbage_amount_is_rejected() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": "abc"}"#).is_err());
    }

    #[derive(Deserialize)]
    struct Labelled {
        #[serde(default, deserialize_with = "null_as_default::deserialize")]
        label: String,
    }

    #[test]
    fn test_null_string_reads_as_empty() {
        let parse = |json: &str| serde_json::from_str::<Labelled>(json).unwrap().label;

        assert_eq!(parse(r#"{"label": null}"#), "");
        assert_eq!(parse(r#"{}"#), "");
        assert_eq!(parse(r#"{"label": "Royal"}"#), "Royal");
    }
}
