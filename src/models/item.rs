//! Classified asset items and their display helpers.

use crate::config::KNOWN_TOKEN_IMAGES;
use crate::models::ChainObject;
use crate::utils::format::format_balance;

/// A displayable asset produced by classification.
///
/// Fungible items aggregate every owned object sharing the type tag, with
/// the first-seen object as the representative; non-fungible items map
/// one-to-one to objects with a fixed balance of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedItem {
    pub object: ChainObject,
    pub balance: u64,
    pub fungible: bool,
}

impl ClassifiedItem {
    pub fn fungible(object: ChainObject, balance: u64) -> Self {
        Self {
            object,
            balance,
            fungible: true,
        }
    }

    pub fn non_fungible(object: ChainObject) -> Self {
        Self {
            object,
            balance: 1,
            fungible: false,
        }
    }

    /// Stable render key: the object id, falling back to the type tag for
    /// aggregates whose representative came back without one.
    pub fn key(&self) -> String {
        if self.object.object_id.is_empty() {
            self.object.type_tag.clone()
        } else {
            self.object.object_id.clone()
        }
    }

    /// Human-facing name: display metadata, then structured content, then
    /// the last segment of the type tag.
    pub fn display_name(&self) -> String {
        self.object
            .display_field("name")
            .or_else(|| self.object.content_str("name"))
            .unwrap_or_else(|| self.object.last_type_segment())
            .to_string()
    }

    /// Short type line shown under the name: the last `::` segment with any
    /// generic brackets stripped.
    pub fn short_type(&self) -> String {
        self.object
            .last_type_segment()
            .chars()
            .filter(|c| *c != '<' && *c != '>')
            .collect()
    }

    /// Module name used for the type filter, `"unknown"` when the tag has no
    /// module segment.
    pub fn module_name(&self) -> String {
        self.object
            .module_segment()
            .filter(|s| !s.is_empty())
            .unwrap_or("unknown")
            .to_string()
    }

    /// Multiplicity badge shown next to the name, `None` for a single unit.
    pub fn balance_badge(&self) -> Option<String> {
        if self.balance > 1 {
            Some(format!(" \u{d7} {}", format_balance(self.balance)))
        } else {
            None
        }
    }

    /// Display-metadata description, if any.
    pub fn description(&self) -> Option<String> {
        self.object.display_field("description").map(str::to_string)
    }

    /// Image URL for the item, first hit wins: display `image_url`, content
    /// `url`/`image_url`, display `icon`, then the bundled images for known
    /// token types. `None` means render a letter placeholder.
    pub fn image_url(&self) -> Option<String> {
        if let Some(url) = self.object.display_field("image_url") {
            return Some(url.to_string());
        }
        if let Some(url) = self
            .object
            .content_str("url")
            .or_else(|| self.object.content_str("image_url"))
        {
            return Some(url.to_string());
        }
        if let Some(url) = self.object.display_field("icon") {
            return Some(url.to_string());
        }
        KNOWN_TOKEN_IMAGES
            .iter()
            .find(|(marker, _)| self.object.type_tag.contains(marker))
            .map(|(_, url)| url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: serde_json::Value) -> ChainObject {
        serde_json::from_value(value).expect("object should deserialize")
    }

    #[test]
    fn display_name_prefers_display_metadata() {
        let item = ClassifiedItem::non_fungible(object(json!({
            "type": "0x2::mynft::NFT",
            "display": { "data": { "name": "Shiny" } },
            "content": { "dataType": "moveObject", "fields": { "name": "ContentName" } }
        })));
        assert_eq!(item.display_name(), "Shiny");
    }

    #[test]
    fn display_name_falls_back_to_content_then_type() {
        let from_content = ClassifiedItem::non_fungible(object(json!({
            "type": "0x2::mynft::NFT",
            "content": { "dataType": "moveObject", "fields": { "name": "ContentName" } }
        })));
        assert_eq!(from_content.display_name(), "ContentName");

        let from_type = ClassifiedItem::non_fungible(object(json!({
            "type": "0x2::mynft::NFT"
        })));
        assert_eq!(from_type.display_name(), "NFT");
    }

    #[test]
    fn short_type_strips_generic_brackets() {
        let item = ClassifiedItem::fungible(
            object(json!({ "type": "0x2::coin::Coin<0x2::sui::SUI>" })),
            1,
        );
        assert_eq!(item.short_type(), "SUI");

        let plain = ClassifiedItem::non_fungible(object(json!({ "type": "0x2::mynft::NFT" })));
        assert_eq!(plain.short_type(), "NFT");
    }

    #[test]
    fn module_name_defaults_to_unknown() {
        let item = ClassifiedItem::non_fungible(object(json!({ "objectId": "0x1" })));
        assert_eq!(item.module_name(), "unknown");

        let tagged = ClassifiedItem::non_fungible(object(json!({ "type": "0x2::mynft::NFT" })));
        assert_eq!(tagged.module_name(), "mynft");
    }

    #[test]
    fn image_url_resolution_order() {
        let display_first = ClassifiedItem::non_fungible(object(json!({
            "display": { "data": { "image_url": "https://a", "icon": "https://c" } },
            "content": { "dataType": "moveObject", "fields": { "url": "https://b" } }
        })));
        assert_eq!(display_first.image_url(), Some("https://a".to_string()));

        let content_next = ClassifiedItem::non_fungible(object(json!({
            "display": { "data": { "icon": "https://c" } },
            "content": { "dataType": "moveObject", "fields": { "url": "https://b" } }
        })));
        assert_eq!(content_next.image_url(), Some("https://b".to_string()));

        let known_token = ClassifiedItem::fungible(
            object(json!({ "type": "0x2::coin::Coin<0x2::sui::SUI>" })),
            10,
        );
        assert_eq!(known_token.image_url(), Some("/images/sui.png".to_string()));

        let nothing = ClassifiedItem::non_fungible(object(json!({ "type": "0x2::mynft::NFT" })));
        assert_eq!(nothing.image_url(), None);
    }

    #[test]
    fn balance_badge_only_above_one_unit() {
        let single = ClassifiedItem::non_fungible(object(json!({ "type": "0x2::mynft::NFT" })));
        assert_eq!(single.balance_badge(), None);

        let one_coin = ClassifiedItem::fungible(object(json!({ "type": "0x2::sui::SUI" })), 1);
        assert_eq!(one_coin.balance_badge(), None);

        let many = ClassifiedItem::fungible(object(json!({ "type": "0x2::sui::SUI" })), 2500);
        assert_eq!(many.balance_badge(), Some(" \u{d7} 2,500".to_string()));
    }

    #[test]
    fn key_falls_back_to_type_tag() {
        let with_id = ClassifiedItem::non_fungible(object(json!({ "objectId": "0x1" })));
        assert_eq!(with_id.key(), "0x1");

        let without_id =
            ClassifiedItem::fungible(object(json!({ "type": "0x2::sui::SUI" })), 1);
        assert_eq!(without_id.key(), "0x2::sui::SUI");
    }
}
