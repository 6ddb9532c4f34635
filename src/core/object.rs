//! # Object Payloads
//!
//! Extraction of the canonical binary (BCS) payload from object responses.
//!
//! The ledger's object query API returns one of two binary payloads depending on
//! which inclusion option the caller asked for:
//! - **Object** (`objectBcs`): the whole object envelope
//! - **Content** (`contentBcs`): only the inner Move struct
//!
//! [`ObjectPayload`] keeps the two apart as a tagged variant, so a caller that
//! asked for one can never silently read the other.
//!
//! ## Usage
//! ```rust
//! use bytes::Bytes;
//! use ledger_marshal::core::object::{extract_payload, ObjectPayload, ObjectResponse};
//!
//! let obj = ObjectResponse::new(
//!     "0x2::coin::Coin<0x2::sui::SUI>",
//!     ObjectPayload::Envelope(Bytes::from_static(&[1, 2, 3])),
//! );
//! let bcs = extract_payload(&obj).unwrap();
//! assert_eq!(&bcs[..], &[1, 2, 3]);
//! ```

use crate::error::{constants, render_type, MarshalError, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Inclusion option that selects which payload the ledger returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayloadKind {
    /// Whole-object encoding (`objectBcs`)
    #[default]
    Object,
    /// Inner struct encoding (`contentBcs`)
    Content,
}

impl PayloadKind {
    /// Field name used by the ledger's query API
    pub fn field_name(self) -> &'static str {
        match self {
            PayloadKind::Object => "objectBcs",
            PayloadKind::Content => "contentBcs",
        }
    }
}

/// Binary payload of an object response, tagged by the inclusion option that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectPayload {
    Envelope(Bytes),
    Content(Bytes),
}

impl ObjectPayload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            ObjectPayload::Envelope(_) => PayloadKind::Object,
            ObjectPayload::Content(_) => PayloadKind::Content,
        }
    }

    pub fn bytes(&self) -> &Bytes {
        match self {
            ObjectPayload::Envelope(bytes) | ObjectPayload::Content(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            ObjectPayload::Envelope(bytes) | ObjectPayload::Content(bytes) => bytes,
        }
    }
}

/// One on-chain object as handed over by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectResponse {
    object_type: String,
    payload: Option<ObjectPayload>,
}

impl ObjectResponse {
    /// Create a response carrying a payload
    pub fn new(object_type: impl Into<String>, payload: ObjectPayload) -> Self {
        Self {
            object_type: object_type.into(),
            payload: Some(payload),
        }
    }

    /// Create a response whose payload field was absent
    pub fn without_payload(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            payload: None,
        }
    }

    /// Move type of the object, kept for diagnostics
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn payload(&self) -> Option<&ObjectPayload> {
        self.payload.as_ref()
    }

    /// Consume the response and return its payload bytes
    pub fn into_payload(self) -> Result<Bytes> {
        match self.payload {
            Some(payload) => Ok(payload.into_bytes()),
            None => Err(MarshalError::missing_payload(&self.object_type)),
        }
    }
}

/// Return the payload carried by `obj`.
///
/// The returned [`Bytes`] shares the received buffer; nothing is copied or
/// re-encoded. A zero-length payload is valid data and is returned as-is; only
/// an absent payload fails, with [`MarshalError::InvalidObject`].
pub fn extract_payload(obj: &ObjectResponse) -> Result<Bytes> {
    match obj.payload() {
        Some(payload) => {
            trace!(
                object_type = %obj.object_type,
                kind = payload.kind().field_name(),
                len = payload.bytes().len(),
                "Extracted object payload"
            );
            Ok(payload.bytes().clone())
        }
        None => Err(MarshalError::missing_payload(&obj.object_type)),
    }
}

/// Like [`extract_payload`], but also rejects a response carrying the other
/// payload variant than `kind`.
pub fn extract_payload_as(obj: &ObjectResponse, kind: PayloadKind) -> Result<Bytes> {
    match obj.payload() {
        Some(payload) if payload.kind() == kind => Ok(payload.bytes().clone()),
        Some(payload) => Err(MarshalError::InvalidObject(format!(
            "{}: requested {} but response carries {} for {}",
            constants::ERR_PAYLOAD_KIND_MISMATCH,
            kind.field_name(),
            payload.kind().field_name(),
            render_type(&obj.object_type)
        ))),
        None => Err(MarshalError::missing_payload(&obj.object_type)),
    }
}

/// Object response as it appears on the wire, with both optional payload fields.
///
/// Payload fields are base64 strings; `null` or a missing key means absent, an
/// empty string means a present zero-length payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObjectResponse {
    #[serde(rename = "type", default)]
    pub object_type: String,

    #[serde(
        default,
        with = "crate::utils::base64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub object_bcs: Option<Bytes>,

    #[serde(
        default,
        with = "crate::utils::base64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_bcs: Option<Bytes>,
}

impl RawObjectResponse {
    /// Decode a wire response from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Select the payload requested with `kind`.
    ///
    /// Only the field named by `kind` is read; the other field is discarded and
    /// never used as a fallback.
    pub fn into_response(self, kind: PayloadKind) -> ObjectResponse {
        let payload = match kind {
            PayloadKind::Object => self.object_bcs.map(ObjectPayload::Envelope),
            PayloadKind::Content => self.content_bcs.map(ObjectPayload::Content),
        };
        ObjectResponse {
            object_type: self.object_type,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::expect_used)]
    fn test_extract_shares_buffer() {
        let bytes = Bytes::from(vec![7u8; 32]);
        let obj = ObjectResponse::new("0x2::object::Foo", ObjectPayload::Envelope(bytes.clone()));

        let extracted = extract_payload(&obj).expect("payload present");
        assert_eq!(extracted, bytes);
        assert_eq!(extracted.as_ptr(), bytes.as_ptr());
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_extract_empty_payload_is_valid() {
        let obj = ObjectResponse::new("0x2::object::Empty", ObjectPayload::Content(Bytes::new()));
        let extracted = extract_payload(&obj).expect("empty payload is still present");
        assert!(extracted.is_empty());
    }

    #[test]
    fn test_extract_missing_payload_fails() {
        let obj = ObjectResponse::without_payload("0x2::object::Foo");
        let err = extract_payload(&obj).unwrap_err();
        assert!(err.is_invalid_object());
        assert!(err.to_string().contains("\"0x2::object::Foo\""));
    }

    #[test]
    fn test_extract_as_rejects_other_variant() {
        let obj = ObjectResponse::new("T", ObjectPayload::Content(Bytes::from_static(&[1])));
        let err = extract_payload_as(&obj, PayloadKind::Object).unwrap_err();
        assert!(err.is_invalid_object());
        assert!(err.to_string().contains("contentBcs"));
        assert!(extract_payload_as(&obj, PayloadKind::Content).is_ok());
    }

    #[test]
    fn test_extract_as_mismatch_quotes_type() {
        let obj = ObjectResponse::new("", ObjectPayload::Envelope(Bytes::from_static(&[1])));
        let err = extract_payload_as(&obj, PayloadKind::Content).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid object: Object payload kind mismatch: requested contentBcs but response carries objectBcs for \"\""
        );
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_raw_response_reads_only_requested_field() {
        let raw = RawObjectResponse {
            object_type: "T".to_string(),
            object_bcs: None,
            content_bcs: Some(Bytes::from_static(&[9, 9])),
        };

        let as_object = raw.clone().into_response(PayloadKind::Object);
        assert!(as_object.payload().is_none());

        let as_content = raw.into_response(PayloadKind::Content);
        assert_eq!(
            as_content.into_payload().expect("content present"),
            Bytes::from_static(&[9, 9])
        );
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_raw_response_from_json() {
        let raw = RawObjectResponse::from_json(
            r#"{"type":"0x2::clock::Clock","objectBcs":"AQID","contentBcs":null}"#,
        )
        .expect("valid json");

        assert_eq!(raw.object_type, "0x2::clock::Clock");
        assert_eq!(raw.object_bcs, Some(Bytes::from_static(&[1, 2, 3])));
        assert_eq!(raw.content_bcs, None);
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_raw_response_empty_string_is_present() {
        let raw = RawObjectResponse::from_json(r#"{"type":"T","objectBcs":""}"#)
            .expect("valid json");
        let obj = raw.into_response(PayloadKind::Object);
        assert_eq!(extract_payload(&obj).expect("present"), Bytes::new());
    }

    #[test]
    fn test_raw_response_bad_base64() {
        let err = RawObjectResponse::from_json(r#"{"type":"T","objectBcs":"!!"}"#).unwrap_err();
        assert!(matches!(err, MarshalError::Serialization(_)));
    }
}
