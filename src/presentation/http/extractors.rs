// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Deserializer};

/// JSON body whose rejections answer 400 with the usual error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// Query string whose rejections answer 400 with the usual error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct QueryParams<T>(pub T);

/// Reads an optional number where an empty value means "not given".
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number '{value}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_as_none")]
        page: Option<u32>,
    }

    #[test]
    fn empty_numbers_are_absent() {
        let params: Params = serde_json::from_str(r#"{"page": ""}"#).unwrap();
        assert_eq!(params.page, None);
        let params: Params = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(params.page, None);
        let params: Params = serde_json::from_str(r#"{"page": "3"}"#).unwrap();
        assert_eq!(params.page, Some(3));
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        assert!(serde_json::from_str::<Params>(r#"{"page": "two"}"#).is_err());
    }
}
