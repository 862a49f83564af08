//! Request gate: secret check and signed-token payload decoding.
//!
//! A request token has the shape `<signature>.<payload>`, both segments in
//! url-safe base64. The payload decodes to a JSON object whose fields become
//! the request parameters. The gate fails closed: any mismatch or decoding
//! problem yields [`Error::Unauthenticated`] and no parameters.
//!
//! The gate runs before any ranking query and has no influence on ranking.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::score::{DateKey, parse_count, parse_date};

/// Standard alphabet, padding optional
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Verifies request secrets and decodes token payloads
#[derive(Clone)]
pub struct RequestGate {
    secret: String,
}

impl std::fmt::Debug for RequestGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestGate").finish_non_exhaustive()
    }
}

impl RequestGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Authenticate `supplied_secret` and decode `token` into request parameters
    pub fn parse_request(&self, token: &str, supplied_secret: &str) -> Result<RequestParams> {
        if !constant_time_eq(self.secret.as_bytes(), supplied_secret.as_bytes()) {
            warn!("Rejected request: secret mismatch");
            return Err(Error::unauthenticated("secret mismatch"));
        }

        let data: String = token
            .trim()
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect();
        let mut parts = data.split('.');

        let signature = parts
            .next()
            .and_then(|s| TOKEN_ENGINE.decode(s).ok())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                warn!("Rejected request: signature segment does not decode");
                Error::unauthenticated("malformed signature segment")
            })?;

        let payload = parts
            .next()
            .and_then(|s| TOKEN_ENGINE.decode(s).ok())
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok());

        match payload {
            Some(Value::Object(fields)) => {
                debug!(
                    "Accepted request ({} byte signature, {} fields)",
                    signature.len(),
                    fields.len()
                );
                Ok(RequestParams { fields })
            }
            _ => {
                warn!("Rejected request: payload is not a JSON object");
                Err(Error::unauthenticated("malformed payload segment"))
            }
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Fields decoded from an authenticated request payload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestParams {
    fields: Map<String, Value>,
}

impl RequestParams {
    /// A required string field
    pub fn require_str(&self, name: &str) -> Result<&str> {
        match self.fields.get(name) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(Error::invalid_argument(format!(
                "{} must be a string, got {}",
                name, other
            ))),
            None => Err(missing(name)),
        }
    }

    /// A required integer field, given as a JSON integer or a numeric string
    pub fn require_i64(&self, name: &str) -> Result<i64> {
        match self.fields.get(name) {
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
                Error::invalid_argument(format!("{} must be an integer, got {}", name, n))
            }),
            Some(Value::String(s)) => parse_count(s).map_err(|_| {
                Error::invalid_argument(format!("{} must be an integer, got {:?}", name, s))
            }),
            Some(other) => Err(Error::invalid_argument(format!(
                "{} must be an integer, got {}",
                name, other
            ))),
            None => Err(missing(name)),
        }
    }

    /// A required `YYYY-MM-DD` date field, as a store key
    pub fn require_date(&self, name: &str) -> Result<DateKey> {
        parse_date(self.require_str(name)?).map(DateKey::from)
    }
}

fn missing(name: &str) -> Error {
    Error::invalid_argument(format!("missing request field {:?}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    const SECRET: &str = "s3cret";

    fn token(signature: &[u8], payload: &str) -> String {
        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(signature),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_parse_request_valid() {
        let gate = RequestGate::new(SECRET);
        let t = token(b"sig", r#"{"user_id": 3, "n": "2", "date": "2024-01-01"}"#);

        let params = gate.parse_request(&t, SECRET).unwrap();
        assert_eq!(params.require_i64("user_id").unwrap(), 3);
        assert_eq!(params.require_i64("n").unwrap(), 2);
        assert_eq!(
            params.require_date("date").unwrap(),
            DateKey::from("2024-01-01")
        );
    }

    #[test]
    fn test_parse_request_url_safe_characters() {
        let gate = RequestGate::new(SECRET);
        // 0xfb 0xff encodes to "-_8" in the url-safe alphabet
        let t = token(&[0xfb, 0xff], r#"{"q": "??>>"}"#);
        assert!(t.contains('-') || t.contains('_'));
        assert!(gate.parse_request(&t, SECRET).is_ok());
    }

    #[test]
    fn test_parse_request_padded_segments() {
        let gate = RequestGate::new(SECRET);
        let t = format!(
            "{}.{}",
            base64::engine::general_purpose::STANDARD.encode(b"si"),
            base64::engine::general_purpose::STANDARD.encode(r#"{"a":1}"#)
        );
        assert!(gate.parse_request(&t, SECRET).is_ok());
    }

    #[test]
    fn test_parse_request_secret_mismatch() {
        let gate = RequestGate::new(SECRET);
        let t = token(b"sig", r#"{"n": 1}"#);
        let err = gate.parse_request(&t, "wrong").unwrap_err();
        assert!(matches!(err, Error::Unauthenticated(_)));
        assert!(gate.parse_request(&t, "").is_err());
    }

    #[test]
    fn test_parse_request_bad_signature() {
        let gate = RequestGate::new(SECRET);
        let payload = URL_SAFE_NO_PAD.encode(r#"{"n": 1}"#);

        let err = gate
            .parse_request(&format!("!!!.{}", payload), SECRET)
            .unwrap_err();
        assert!(matches!(err, Error::Unauthenticated(_)));

        let err = gate.parse_request(&format!(".{}", payload), SECRET).unwrap_err();
        assert!(matches!(err, Error::Unauthenticated(_)));
    }

    #[test]
    fn test_parse_request_payload_not_object() {
        let gate = RequestGate::new(SECRET);
        for payload in ["[1, 2]", "\"text\"", "42", "{not json"] {
            let err = gate
                .parse_request(&token(b"sig", payload), SECRET)
                .unwrap_err();
            assert!(matches!(err, Error::Unauthenticated(_)), "payload {}", payload);
        }
    }

    #[test]
    fn test_parse_request_missing_payload() {
        let gate = RequestGate::new(SECRET);
        let t = URL_SAFE_NO_PAD.encode(b"sig");
        assert!(matches!(
            gate.parse_request(&t, SECRET),
            Err(Error::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_require_missing_and_malformed_fields() {
        let gate = RequestGate::new(SECRET);
        let t = token(b"sig", r#"{"n": 1.5, "user_id": "abc", "date": 20240101}"#);
        let params = gate.parse_request(&t, SECRET).unwrap();

        assert!(params.require_i64("n").unwrap_err().is_invalid_argument());
        assert!(params.require_i64("user_id").unwrap_err().is_invalid_argument());
        assert!(params.require_date("date").unwrap_err().is_invalid_argument());
        assert!(params.require_i64("absent").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let gate = RequestGate::new(SECRET);
        assert!(!format!("{:?}", gate).contains(SECRET));
    }
}
