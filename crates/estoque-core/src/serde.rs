//! Query-string deserialization helpers.
//!
//! HTML forms and hand-written URLs send `?categoria=&status=` for "no
//! filter", so empty strings are folded into `None` here.

use serde::{Deserialize, Deserializer};

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Like [`deserialize_optional_string`] but keeps the value as sent, so
/// `"mouse "` still carries its trailing space. Only `""` becomes `None`.
pub fn deserialize_untrimmed_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

/// For partial updates of nullable columns: an absent field is `None`
/// (keep), `null` is `Some(None)` (clear) and a value is `Some(Some(_))`.
/// Pair with `#[serde(default)]`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Query {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_untrimmed_string")]
        search: Option<String>,
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable")]
        until: Option<Option<i32>>,
    }

    #[test]
    fn test_untrimmed_string_keeps_whitespace() {
        let q: Query = serde_json::from_str(r#"{"search":"mouse "}"#).unwrap();
        assert_eq!(q.search.as_deref(), Some("mouse "));

        let q: Query = serde_json::from_str(r#"{"search":" "}"#).unwrap();
        assert_eq!(q.search.as_deref(), Some(" "));

        let q: Query = serde_json::from_str(r#"{"search":""}"#).unwrap();
        assert_eq!(q.search, None);
    }

    #[test]
    fn test_nullable_distinguishes_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.until, None);

        let cleared: Patch = serde_json::from_str(r#"{"until":null}"#).unwrap();
        assert_eq!(cleared.until, Some(None));

        let set: Patch = serde_json::from_str(r#"{"until":3}"#).unwrap();
        assert_eq!(set.until, Some(Some(3)));
    }

    #[test]
    fn test_empty_strings_become_none() {
        let q: Query = serde_json::from_str(r#"{"name":"  ","count":""}"#).unwrap();
        assert_eq!(q.name, None);
        assert_eq!(q.count, None);
    }

    #[test]
    fn test_values_are_trimmed_and_parsed() {
        let q: Query = serde_json::from_str(r#"{"name":" Notebook ","count":" 7"}"#).unwrap();
        assert_eq!(q.name.as_deref(), Some("Notebook"));
        assert_eq!(q.count, Some(7));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let q: Query = serde_json::from_str("{}").unwrap();
        assert!(q.name.is_none());
        assert!(q.count.is_none());
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result: Result<Query, _> = serde_json::from_str(r#"{"count":"abc"}"#);
        assert!(result.is_err());
    }
}
