//! Cursor codec for windowed (keyset) pagination.
//!
//! A [ScrollPosition] travels to the client and back as an opaque token:
//! a URL-safe base64 wrapping of its JSON serialization. No pagination state
//! is kept server-side, so the token alone must be enough to reconstruct the
//! position for any of the supported sort orders. The decodable shape is
//! scoped tightly to the known [ScrollPosition] variants; anything else is a
//! [CursorError], never a partially populated position.
//!
//! The empty/absent cursor ("start of set") is handled by the query layer,
//! the codec never represents it.

use async_graphql::SimpleObject;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64, Engine as _};
use thiserror::Error;

use crate::db::books::ScrollPosition;

/// Information about a windowed page
#[derive(SimpleObject, Debug, Clone, Default)]
pub struct WindowPageInfo {
    /// Cursor resuming after the last item of this page, absent for an
    /// empty page
    pub end_cursor: Option<String>,
    /// Whether rows exist beyond this page
    pub has_next_page: bool,
}

/// Cursor token rejection reasons
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("cursor is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("cursor payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("cursor does not describe a known scroll position: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Encode a scroll position as an opaque cursor token.
///
/// The token contains no whitespace, quotes or padding characters, so it
/// survives both a URL and a GraphQL string literal unescaped.
pub fn encode_cursor(position: &ScrollPosition) -> String {
    let payload = serde_json::to_string(position)
        .expect("ScrollPosition serialization cannot fail");
    BASE64.encode(payload)
}

/// Decode a cursor token back into a scroll position.
///
/// Tokens this system did not produce are rejected with a [CursorError].
pub fn decode_cursor(cursor: &str) -> Result<ScrollPosition, CursorError> {
    let decoded = BASE64.decode(cursor)?;
    let payload = String::from_utf8(decoded)?;
    let position = serde_json::from_str(&payload)?;
    Ok(position)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn roundtrip_by_id() {
        let position = ScrollPosition::ById {
            id: "book-004".into(),
        };
        let cursor = encode_cursor(&position);
        assert_eq!(decode_cursor(&cursor).unwrap(), position);
    }

    #[test]
    fn roundtrip_by_publication_date() {
        let position = ScrollPosition::ByPublicationDate {
            publication_date: date("2019-03-01"),
            id: "book-042".into(),
        };
        let cursor = encode_cursor(&position);
        assert_eq!(decode_cursor(&cursor).unwrap(), position);
    }

    #[test]
    fn token_is_transport_safe() {
        let position = ScrollPosition::ByPublicationDate {
            publication_date: date("2019-03-01"),
            id: "book-042".into(),
        };
        let cursor = encode_cursor(&position);
        assert!(!cursor.is_empty());
        assert!(cursor
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn rejects_garbage() {
        assert_matches!(
            decode_cursor("not-a-real-cursor"),
            Err(CursorError::MalformedPayload(_) | CursorError::InvalidEncoding(_))
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        assert_matches!(
            decode_cursor("%%%not base64%%%"),
            Err(CursorError::InvalidEncoding(_))
        );
    }

    #[test]
    fn rejects_foreign_json_payload() {
        let cursor = BASE64.encode(r#"{"offset":12}"#);
        assert_matches!(
            decode_cursor(&cursor),
            Err(CursorError::MalformedPayload(_))
        );
    }

    #[test]
    fn rejects_extra_fields() {
        let cursor = BASE64.encode(r#"{"byId":{"id":"book-001","offset":3}}"#);
        assert_matches!(
            decode_cursor(&cursor),
            Err(CursorError::MalformedPayload(_))
        );
    }

    #[test]
    fn rejects_missing_fields() {
        let cursor = BASE64.encode(r#"{"byPublicationDate":{"id":"book-001"}}"#);
        assert_matches!(
            decode_cursor(&cursor),
            Err(CursorError::MalformedPayload(_))
        );
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let cursor = BASE64.encode([0xff, 0xfe, 0xfd]);
        assert_matches!(decode_cursor(&cursor), Err(CursorError::InvalidUtf8(_)));
    }
}
