use crate::error::{AppError, Result};
use hashgate_core::Token;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

const INPUT_FIELD: &str = "input";

/// Body of `POST /hash`.
///
/// Decoding is lenient about the shape of the object: the `input` key matches
/// case-insensitively, a missing or `null` value leaves the input empty, and
/// unknown keys are skipped. When the key appears more than once the last
/// non-null value wins.
#[derive(Debug, Default)]
pub struct HashRequest {
    pub input: String,
}

impl HashRequest {
    /// Returns the input if it is a non-empty run of `[A-Za-z0-9]`.
    pub fn validate(&self) -> Result<&str> {
        if self.input.is_empty() {
            return Err(AppError::InputRequired);
        }

        if !self.input.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::InputNotAlphanumeric);
        }

        Ok(&self.input)
    }
}

impl<'de> Deserialize<'de> for HashRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(HashRequestVisitor)
    }
}

struct HashRequestVisitor;

impl<'de> Visitor<'de> for HashRequestVisitor {
    type Value = HashRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<HashRequest, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = HashRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(INPUT_FIELD) {
                if let Some(input) = map.next_value::<Option<String>>()? {
                    request.input = input;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(request)
    }
}

/// Parses a `POST /hash` body. A bare `null` decodes as an empty request.
pub fn parse_request(body: &[u8]) -> std::result::Result<HashRequest, serde_json::Error> {
    serde_json::from_slice::<Option<HashRequest>>(body).map(Option::unwrap_or_default)
}

#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub input: String,
    pub hash: Token,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(input: &str) -> HashRequest {
        HashRequest {
            input: input.to_string(),
        }
    }

    #[test]
    fn accepts_alphanumeric_input() {
        assert_eq!(request("abc123").validate().unwrap(), "abc123");
        assert_eq!(request("AbCdEf123").validate().unwrap(), "AbCdEf123");
        assert!(request("a").validate().is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            request("").validate(),
            Err(AppError::InputRequired)
        ));
    }

    #[test]
    fn rejects_non_alphanumeric_input() {
        for input in ["abc-123", "hello world", "abc_def", "naïve", "tab\there"] {
            assert!(
                matches!(request(input).validate(), Err(AppError::InputNotAlphanumeric)),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_or_null_input_parses_as_empty() {
        for body in ["{}", r#"{"input": null}"#, "null", r#"{"other": 1}"#] {
            let parsed = parse_request(body.as_bytes()).unwrap();
            assert!(
                matches!(parsed.validate(), Err(AppError::InputRequired)),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn input_key_matches_any_case() {
        for body in [r#"{"INPUT": "abc123"}"#, r#"{"Input": "abc123"}"#] {
            assert_eq!(parse_request(body.as_bytes()).unwrap().input, "abc123");
        }
    }

    #[test]
    fn later_input_key_overrides_earlier_one() {
        let parsed = parse_request(br#"{"input": "first", "Input": "second"}"#).unwrap();
        assert_eq!(parsed.input, "second");

        let parsed = parse_request(br#"{"input": "kept", "input": null}"#).unwrap();
        assert_eq!(parsed.input, "kept");
    }

    #[test]
    fn rejects_non_object_and_non_string_input() {
        for body in ["", "[]", r#""abc123""#, r#"{"input": 123}"#, "{bad json}"] {
            assert!(parse_request(body.as_bytes()).is_err(), "body {body:?}");
        }
    }
}
