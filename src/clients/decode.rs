//! Response body decoding.
//!
//! Decoding turns a [`RawResponse`] into a [`Decoded`] value:
//!
//! 1. [`classify`] looks only at the status, `Content-Type` and
//!    `Content-Encoding` and produces a [`DecodePlan`].
//! 2. [`decode`] applies the plan to the body bytes: decompress, check
//!    UTF-8, then parse JSON or keep raw text, and finally fold in API error
//!    signalling (`error` / `errors` fields) and the HTTP status.
//!
//! Both steps are pure, so every branch can be tested without a network.
//!
//! # Rules
//!
//! | Declared type | Body parses? | 2xx                    | non-2xx                          |
//! |---------------|--------------|------------------------|----------------------------------|
//! | JSON          | yes          | `Json`, unless error field | error field message, else status |
//! | JSON          | no           | `DecodeError`          | status error + raw body          |
//! | none          | yes          | same as JSON           | same as JSON                     |
//! | none          | no           | `Text`                 | status error + raw body          |
//! | other         | not tried    | `Text`                 | status error + raw body          |

use std::io::Read;

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use serde_json::Value;

use crate::clients::errors::{ApiError, DecodeError, HttpError};
use crate::clients::http_response::RawResponse;

/// A successfully decoded response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedBody {
    /// Parsed JSON.
    Json(Value),
    /// Raw text (XML, HTML, plain text, ...).
    Text(String),
}

impl DecodedBody {
    /// Returns the JSON value, if this body is JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if this body is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Consumes the body, returning the JSON value if present.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Outcome of the decode step.
#[derive(Debug)]
pub enum Decoded {
    /// Success with a JSON body.
    Json(Value),
    /// Success with a raw text body.
    Text(String),
    /// Failure, already mapped to the error the caller will see.
    Error(HttpError),
}

impl Decoded {
    /// Converts into the executor's result type.
    ///
    /// # Errors
    ///
    /// Returns the contained error for [`Decoded::Error`].
    pub fn into_result(self) -> Result<DecodedBody, HttpError> {
        match self {
            Self::Json(value) => Ok(DecodedBody::Json(value)),
            Self::Text(text) => Ok(DecodedBody::Text(text)),
            Self::Error(error) => Err(error),
        }
    }
}

/// How the body is expected to be shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyFormat {
    /// `Content-Type` declares JSON; parsing is mandatory on success.
    Json,
    /// `Content-Type` declares something else; the body is kept as text.
    Text,
    /// No `Content-Type`; JSON is attempted, text is the fallback.
    Unspecified,
}

/// Compression applied to the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentEncoding {
    /// No compression.
    Identity,
    /// gzip (`gzip` or `x-gzip`).
    Gzip,
    /// deflate (zlib-wrapped, with raw deflate accepted as well).
    Deflate,
    /// A coding this client cannot undo.
    Unsupported(String),
}

/// Pure classification of a response, computed before the body is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodePlan {
    /// HTTP status code.
    pub status: u16,
    /// Whether the status is 2xx.
    pub success: bool,
    /// Expected body shape.
    pub format: BodyFormat,
    /// Compression to undo.
    pub encoding: ContentEncoding,
}

/// Classifies a response from its status and content headers.
///
/// ```rust
/// use bigcommerce_api::clients::{classify, BodyFormat, ContentEncoding};
///
/// let plan = classify(200, Some("application/json; charset=utf-8"), Some("gzip"));
/// assert!(plan.success);
/// assert_eq!(plan.format, BodyFormat::Json);
/// assert_eq!(plan.encoding, ContentEncoding::Gzip);
///
/// let plan = classify(404, Some("application/xml"), None);
/// assert!(!plan.success);
/// assert_eq!(plan.format, BodyFormat::Text);
/// ```
#[must_use]
pub fn classify(
    status: u16,
    content_type: Option<&str>,
    content_encoding: Option<&str>,
) -> DecodePlan {
    DecodePlan {
        status,
        success: (200..=299).contains(&status),
        format: body_format(content_type),
        encoding: content_encoding_of(content_encoding),
    }
}

fn body_format(content_type: Option<&str>) -> BodyFormat {
    let Some(content_type) = content_type else {
        return BodyFormat::Unspecified;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence.is_empty() {
        BodyFormat::Unspecified
    } else if essence == "application/json" || essence == "text/json" || essence.ends_with("+json")
    {
        BodyFormat::Json
    } else {
        BodyFormat::Text
    }
}

fn content_encoding_of(content_encoding: Option<&str>) -> ContentEncoding {
    let coding = content_encoding
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match coding.as_str() {
        "" | "identity" => ContentEncoding::Identity,
        "gzip" | "x-gzip" => ContentEncoding::Gzip,
        "deflate" => ContentEncoding::Deflate,
        _ => ContentEncoding::Unsupported(coding),
    }
}

/// Decodes a raw response.
#[must_use]
pub fn decode_response(response: &RawResponse) -> Decoded {
    let plan = classify(
        response.status,
        response.content_type(),
        response.content_encoding(),
    );
    decode(&plan, &response.body)
}

/// Applies a [`DecodePlan`] to body bytes.
#[must_use]
pub fn decode(plan: &DecodePlan, body: &[u8]) -> Decoded {
    let bytes = match decompress(&plan.encoding, body) {
        Ok(bytes) => bytes,
        Err(message) => {
            return Decoded::Error(
                DecodeError {
                    message,
                    status_code: plan.status,
                    response_body: None,
                }
                .into(),
            )
        }
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        // An opaque error page still carries its status
        Err(e) if !plan.success => {
            return status_error(plan, String::from_utf8_lossy(e.as_bytes()).into_owned());
        }
        Err(e) => {
            let message = format!("Response body is not valid UTF-8: {}", e.utf8_error());
            let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
            return Decoded::Error(
                DecodeError {
                    message,
                    status_code: plan.status,
                    response_body: Some(lossy),
                }
                .into(),
            );
        }
    };

    match plan.format {
        BodyFormat::Text => finish_text(plan, text),
        BodyFormat::Json | BodyFormat::Unspecified if text.trim().is_empty() => {
            if plan.success {
                Decoded::Json(Value::Null)
            } else {
                status_error(plan, text)
            }
        }
        BodyFormat::Json => match serde_json::from_str::<Value>(&text) {
            Ok(value) => finish_json(plan, value, text),
            Err(e) if plan.success => Decoded::Error(
                DecodeError {
                    message: format!("Failed to parse JSON response: {e}"),
                    status_code: plan.status,
                    response_body: Some(text),
                }
                .into(),
            ),
            Err(_) => status_error(plan, text),
        },
        BodyFormat::Unspecified => match serde_json::from_str::<Value>(&text) {
            Ok(value) => finish_json(plan, value, text),
            Err(_) => finish_text(plan, text),
        },
    }
}

fn decompress(encoding: &ContentEncoding, body: &[u8]) -> Result<Vec<u8>, String> {
    match encoding {
        ContentEncoding::Identity => Ok(body.to_vec()),
        ContentEncoding::Gzip => read_all(GzDecoder::new(body))
            .map_err(|e| format!("Failed to decompress gzip response: {e}")),
        ContentEncoding::Deflate => read_all(ZlibDecoder::new(body))
            .or_else(|_| read_all(DeflateDecoder::new(body)))
            .map_err(|e| format!("Failed to decompress deflate response: {e}")),
        ContentEncoding::Unsupported(coding) => {
            Err(format!("Unsupported content encoding '{coding}'"))
        }
    }
}

fn read_all(mut reader: impl Read) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn finish_text(plan: &DecodePlan, text: String) -> Decoded {
    if plan.success {
        Decoded::Text(text)
    } else {
        status_error(plan, text)
    }
}

fn finish_json(plan: &DecodePlan, value: Value, text: String) -> Decoded {
    if let Some(message) = api_error_message(&value) {
        return Decoded::Error(ApiError::from_message(plan.status, message).into());
    }
    if plan.success {
        Decoded::Json(value)
    } else {
        status_error(plan, text)
    }
}

fn status_error(plan: &DecodePlan, text: String) -> Decoded {
    Decoded::Error(ApiError::from_status(plan.status, Some(text)).into())
}

/// Extracts the API-declared error message from a JSON body.
///
/// A top-level `error` that is a non-empty string, or any other non-null,
/// non-false value, wins. Otherwise a non-empty `errors` array or object is
/// joined into one message.
///
/// ```rust
/// use bigcommerce_api::clients::api_error_message;
/// use serde_json::json;
///
/// assert_eq!(api_error_message(&json!({"error": "Nope"})).as_deref(), Some("Nope"));
/// assert_eq!(
///     api_error_message(&json!({"errors": ["a", "b"]})).as_deref(),
///     Some("a, b")
/// );
/// assert_eq!(api_error_message(&json!({"errors": []})), None);
/// assert_eq!(api_error_message(&json!([{"error": "x"}])), None);
/// ```
#[must_use]
pub fn api_error_message(value: &Value) -> Option<String> {
    let object = value.as_object()?;

    match object.get("error") {
        Some(Value::String(message)) if !message.is_empty() => return Some(message.clone()),
        Some(Value::Null | Value::Bool(false) | Value::String(_)) | None => {}
        Some(other) => return Some(other.to_string()),
    }

    match object.get("errors")? {
        Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(map) if !map.is_empty() => Some(Value::Object(map.clone()).to_string()),
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ErrorKind;
    use flate2::write::{GzEncoder, ZlibEncoder};
    use flate2::Compression;
    use serde_json::json;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn zlib(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn run(status: u16, content_type: Option<&str>, encoding: Option<&str>, body: &[u8]) -> Decoded {
        decode(&classify(status, content_type, encoding), body)
    }

    fn expect_error(decoded: Decoded) -> HttpError {
        match decoded {
            Decoded::Error(error) => error,
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_content_types() {
        assert_eq!(classify(200, Some("application/json"), None).format, BodyFormat::Json);
        assert_eq!(
            classify(200, Some("Application/JSON; charset=utf-8"), None).format,
            BodyFormat::Json
        );
        assert_eq!(
            classify(200, Some("application/problem+json"), None).format,
            BodyFormat::Json
        );
        assert_eq!(classify(200, Some("application/xml"), None).format, BodyFormat::Text);
        assert_eq!(classify(200, Some("text/html"), None).format, BodyFormat::Text);
        assert_eq!(classify(200, None, None).format, BodyFormat::Unspecified);
    }

    #[test]
    fn test_classify_encodings_and_status() {
        assert_eq!(classify(200, None, None).encoding, ContentEncoding::Identity);
        assert_eq!(classify(200, None, Some("GZIP")).encoding, ContentEncoding::Gzip);
        assert_eq!(classify(200, None, Some("x-gzip")).encoding, ContentEncoding::Gzip);
        assert_eq!(classify(200, None, Some("deflate")).encoding, ContentEncoding::Deflate);
        assert_eq!(
            classify(200, None, Some("br")).encoding,
            ContentEncoding::Unsupported("br".to_string())
        );
        assert!(classify(204, None, None).success);
        assert!(!classify(301, None, None).success);
        assert!(!classify(500, None, None).success);
    }

    #[test]
    fn test_json_success_resolves_value() {
        let decoded = run(200, Some("application/json"), None, br#"{"order":true}"#);
        assert!(matches!(decoded, Decoded::Json(v) if v == json!({"order": true})));
    }

    #[test]
    fn test_gzip_json_decodes_to_same_value_as_plain() {
        let value = json!({"order": true, "items": [1, 2, 3]});
        let encoded = serde_json::to_vec(&value).unwrap();

        let plain = run(200, Some("application/json"), None, &encoded);
        let zipped = run(200, Some("application/json"), Some("gzip"), &gzip(&encoded));

        assert!(matches!(plain, Decoded::Json(ref v) if *v == value));
        assert!(matches!(zipped, Decoded::Json(ref v) if *v == value));
    }

    #[test]
    fn test_deflate_json_decodes() {
        let decoded = run(200, Some("application/json"), Some("deflate"), &zlib(br#"[1,2]"#));
        assert!(matches!(decoded, Decoded::Json(v) if v == json!([1, 2])));
    }

    #[test]
    fn test_corrupt_gzip_is_decode_error() {
        let error = expect_error(run(200, Some("application/json"), Some("gzip"), b"not gzip"));
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert!(error.to_string().contains("gzip"));
    }

    #[test]
    fn test_unsupported_encoding_is_decode_error() {
        let error = expect_error(run(200, Some("application/json"), Some("br"), b"xx"));
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert!(error.to_string().contains("br"));
    }

    #[test]
    fn test_malformed_json_on_success_is_decode_error_with_body() {
        let error = expect_error(run(200, Some("application/json"), None, b"<malformed>"));
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert!(error.to_string().contains("Failed to parse JSON response"));
        assert!(error.to_string().contains("line 1"));
        assert_eq!(error.response_body(), Some("<malformed>"));
        assert_eq!(error.status_code(), Some(200));
    }

    #[test]
    fn test_xml_success_resolves_raw_text() {
        let decoded = run(200, Some("application/xml"), None, b"<xml></xml>");
        assert!(matches!(decoded, Decoded::Text(t) if t == "<xml></xml>"));
    }

    #[test]
    fn test_text_type_is_not_sniffed() {
        let decoded = run(200, Some("text/plain"), None, b"123");
        assert!(matches!(decoded, Decoded::Text(t) if t == "123"));
    }

    #[test]
    fn test_unspecified_type_sniffs_json_then_falls_back_to_text() {
        let decoded = run(200, None, None, br#"{"a":1}"#);
        assert!(matches!(decoded, Decoded::Json(v) if v == json!({"a": 1})));

        let decoded = run(200, None, None, b"<html></html>");
        assert!(matches!(decoded, Decoded::Text(t) if t == "<html></html>"));
    }

    #[test]
    fn test_error_field_on_success_status_is_api_error() {
        let error = expect_error(run(
            200,
            Some("application/json"),
            None,
            br#"{"error":"An error has occurred."}"#,
        ));
        assert_eq!(error.kind(), ErrorKind::Api);
        assert_eq!(error.to_string(), "An error has occurred.");
        assert!(error.response_body().is_none());
    }

    #[test]
    fn test_errors_field_on_success_status_is_api_error() {
        let error = expect_error(run(
            200,
            Some("application/json"),
            None,
            br#"{"errors":["An error has occurred."]}"#,
        ));
        assert_eq!(error.kind(), ErrorKind::Api);
        assert!(error.to_string().contains("An error has occurred."));
    }

    #[test]
    fn test_error_status_uses_structured_message_when_present() {
        let error = expect_error(run(
            422,
            Some("application/json"),
            None,
            br#"{"errors":{"name":"is required"}}"#,
        ));
        assert_eq!(error.status_code(), Some(422));
        assert!(error.to_string().contains("is required"));
        assert!(error.response_body().is_none());
    }

    #[test]
    fn test_error_status_without_message_attaches_body() {
        let error = expect_error(run(400, Some("application/json"), None, b"{}"));
        assert_eq!(error.kind(), ErrorKind::Api);
        assert_eq!(error.to_string(), "Request returned error code 400");
        assert_eq!(error.status_code(), Some(400));
        assert_eq!(error.response_body(), Some("{}"));
    }

    #[test]
    fn test_error_status_with_unparseable_json_attaches_body() {
        let error = expect_error(run(500, Some("application/json"), None, b"<html>oops</html>"));
        assert_eq!(error.kind(), ErrorKind::Api);
        assert!(error.to_string().contains("500"));
        assert_eq!(error.response_body(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_error_status_with_xml_attaches_body() {
        let error = expect_error(run(404, Some("application/xml"), None, b"<error/>"));
        assert_eq!(error.to_string(), "Request returned error code 404");
        assert_eq!(error.response_body(), Some("<error/>"));
    }

    #[test]
    fn test_empty_success_body_is_null() {
        assert!(matches!(run(204, None, None, b""), Decoded::Json(Value::Null)));
        assert!(matches!(
            run(200, Some("application/json"), None, b"  "),
            Decoded::Json(Value::Null)
        ));
        assert!(matches!(run(200, Some("text/plain"), None, b""), Decoded::Text(t) if t.is_empty()));
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let error = expect_error(run(200, Some("text/plain"), None, &[0xff, 0xfe, 0x41]));
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert!(error.response_body().is_some());
    }

    #[test]
    fn test_invalid_utf8_on_error_status_is_api_error() {
        let error = expect_error(run(
            500,
            Some("application/octet-stream"),
            None,
            &[0xff, 0xfe],
        ));
        assert_eq!(error.kind(), ErrorKind::Api);
        assert_eq!(error.status_code(), Some(500));
        assert_eq!(error.to_string(), "Request returned error code 500");
        assert_eq!(error.response_body(), Some("\u{fffd}\u{fffd}"));
    }

    #[test]
    fn test_api_error_message_variants() {
        assert_eq!(api_error_message(&json!({"error": ""})), None);
        assert_eq!(api_error_message(&json!({"error": null})), None);
        assert_eq!(api_error_message(&json!({"error": false})), None);
        assert_eq!(
            api_error_message(&json!({"error": {"code": 1}})).as_deref(),
            Some(r#"{"code":1}"#)
        );
        assert_eq!(
            api_error_message(&json!({"errors": [{"field": "x"}, "y"]})).as_deref(),
            Some(r#"{"field":"x"}, y"#)
        );
        assert_eq!(api_error_message(&json!({"errors": {}})), None);
        assert_eq!(api_error_message(&json!("error")), None);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(
            Decoded::Text("x".to_string()).into_result().unwrap(),
            DecodedBody::Text("x".to_string())
        );
        assert!(Decoded::Error(ApiError::from_status(500, None).into())
            .into_result()
            .is_err());
    }

    #[test]
    fn test_decoded_body_accessors() {
        let body = DecodedBody::Json(json!({"a": 1}));
        assert_eq!(body.as_json(), Some(&json!({"a": 1})));
        assert!(body.as_text().is_none());
        assert_eq!(body.into_json(), Some(json!({"a": 1})));

        let body = DecodedBody::Text("<xml/>".to_string());
        assert_eq!(body.as_text(), Some("<xml/>"));
        assert!(body.as_json().is_none());
    }
}
