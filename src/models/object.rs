//! Wire models for on-chain objects.
//!
//! Mirrors the Sui JSON-RPC object payloads with every field optional and
//! defaulted, so a sparse or partially-enriched object still deserializes.
//! Business logic only touches the typed accessors defined here, never raw
//! JSON.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One entry of a `suix_getOwnedObjects` page or a `sui_getObject` response.
///
/// Entries carrying an error instead of object data deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectEnvelope {
    pub data: Option<ChainObject>,
}

/// Display-standard metadata wrapper (`display.data` may be null on chain).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayData {
    pub data: Option<HashMap<String, String>>,
}

/// Structured Move content of an object.
///
/// `fields` is kept as raw JSON: content shapes vary per Move type and only
/// a handful of well-known fields (balance, name, url) are ever read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjectContent {
    #[serde(rename = "dataType")]
    pub data_type: String,
    pub fields: Value,
}

/// An on-chain object as fetched. Identity is the object id; immutable once
/// fetched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChainObject {
    #[serde(rename = "objectId")]
    pub object_id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub display: Option<DisplayData>,
    pub content: Option<ObjectContent>,
}

impl ChainObject {
    /// Non-empty display-metadata field, if present.
    pub fn display_field(&self, key: &str) -> Option<&str> {
        self.display
            .as_ref()?
            .data
            .as_ref()?
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Raw structured-content field, if present.
    pub fn content_field(&self, key: &str) -> Option<&Value> {
        self.content.as_ref()?.fields.get(key)
    }

    /// Non-empty string-valued content field, if present.
    pub fn content_str(&self, key: &str) -> Option<&str> {
        self.content_field(key)?.as_str().filter(|s| !s.is_empty())
    }

    /// Whether the content exposes a balance field at all, regardless of
    /// whether its value parses.
    pub fn has_balance_field(&self) -> bool {
        self.content_field("balance").is_some()
    }

    /// The content balance, parsed leniently: the node returns it as a JSON
    /// string, older payloads as a number. Anything else is treated as
    /// absent.
    pub fn balance(&self) -> Option<u64> {
        match self.content_field("balance")? {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Last `::` segment of the type tag ("0x2::coin::Coin" -> "Coin").
    /// The split is naive: for a generic tag the segment is the tail of the
    /// type parameter, matching how the tag reads when split on `::`.
    pub fn last_type_segment(&self) -> &str {
        self.type_tag.rsplit("::").next().unwrap_or("")
    }

    /// Second `::` segment of the type tag, the Move module name
    /// ("0x2::coin::Coin" -> "coin"), or `None` when the tag is too short.
    pub fn module_segment(&self) -> Option<&str> {
        self.type_tag.split("::").nth(1)
    }
}
