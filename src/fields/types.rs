//! Data types exchanged with the dynamic-field listing endpoint.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque continuation token issued by the ledger for the next page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Key of a dynamic field: its Move type and BCS-encoded value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicFieldName {
    #[serde(rename = "type")]
    pub name_type: String,

    #[serde(with = "crate::utils::base64")]
    pub bcs: Bytes,
}

/// One child record attached to a parent object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFieldDescriptor {
    pub field_id: String,

    #[serde(rename = "type")]
    pub field_type: String,

    pub name: DynamicFieldName,

    pub value_type: String,
}

/// One page of a dynamic-field listing.
///
/// `cursor` is the token to send with the next request; it is only meaningful
/// while `has_next_page` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFieldPage {
    pub dynamic_fields: Vec<DynamicFieldDescriptor>,

    pub has_next_page: bool,

    #[serde(default)]
    pub cursor: Option<Cursor>,
}

impl DynamicFieldPage {
    /// Final page holding `fields`
    pub fn last(fields: Vec<DynamicFieldDescriptor>) -> Self {
        Self {
            dynamic_fields: fields,
            has_next_page: false,
            cursor: None,
        }
    }

    /// Intermediate page holding `fields`, continued by `cursor`
    pub fn with_next(fields: Vec<DynamicFieldDescriptor>, cursor: impl Into<Cursor>) -> Self {
        Self {
            dynamic_fields: fields,
            has_next_page: true,
            cursor: Some(cursor.into()),
        }
    }
}

/// Request for one page of dynamic fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFieldsRequest {
    pub parent_id: String,

    /// `None` requests the first page
    pub cursor: Option<Cursor>,

    /// Maximum number of fields per page; `None` leaves the choice to the ledger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl DynamicFieldsRequest {
    pub fn first_page(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            cursor: None,
            limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::expect_used)]
    fn test_page_from_wire_json() {
        let json = r#"{
            "dynamicFields": [{
                "fieldId": "0xabc",
                "type": "DynamicField",
                "name": { "type": "u64", "bcs": "AQAAAAAAAAA=" },
                "valueType": "0x2::balance::Balance<0x2::sui::SUI>"
            }],
            "hasNextPage": true,
            "cursor": "next-1"
        }"#;

        let page: DynamicFieldPage = serde_json::from_str(json).expect("valid page");
        assert!(page.has_next_page);
        assert_eq!(page.cursor, Some(Cursor::new("next-1")));
        assert_eq!(page.dynamic_fields.len(), 1);

        let field = &page.dynamic_fields[0];
        assert_eq!(field.field_id, "0xabc");
        assert_eq!(field.name.name_type, "u64");
        assert_eq!(&field.name.bcs[..], &[1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_last_page_null_cursor() {
        let page: DynamicFieldPage =
            serde_json::from_str(r#"{"dynamicFields":[],"hasNextPage":false,"cursor":null}"#)
                .expect("valid page");
        assert_eq!(page, DynamicFieldPage::last(Vec::new()));
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_request_omits_unset_limit() {
        let json = serde_json::to_string(&DynamicFieldsRequest::first_page("0x1")).expect("json");
        assert_eq!(json, r#"{"parentId":"0x1","cursor":null}"#);
    }
}
