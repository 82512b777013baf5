//! Object classification: fungible-token aggregation versus NFTs.
//!
//! Pure functions over fetched [`ChainObject`]s. Classification never fails:
//! malformed or missing fields degrade to defaults, and every input object
//! ends up in exactly one output item.

use crate::config::FUNGIBLE_TYPE_MARKERS;
use crate::models::{ChainObject, ClassifiedItem};

/// Result of classifying a list of owned objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    /// Balance-aggregated fungible tokens, in first-seen type-tag order.
    pub fungible: Vec<ClassifiedItem>,
    /// One entry per non-fungible object, in input order.
    pub non_fungible: Vec<ClassifiedItem>,
}

impl Classified {
    /// Flatten into the display order: fungible aggregates first, then NFTs.
    pub fn into_items(self) -> Vec<ClassifiedItem> {
        let mut items = self.fungible;
        items.extend(self.non_fungible);
        items
    }
}

/// Fungibility test, first match wins: a known token marker in the type tag,
/// or a balance field in the structured content.
pub fn is_fungible(object: &ChainObject) -> bool {
    FUNGIBLE_TYPE_MARKERS
        .iter()
        .any(|marker| object.type_tag.contains(marker))
        || object.has_balance_field()
}

/// Partition owned objects into aggregated fungible tokens and distinct
/// NFTs.
///
/// Fungible objects group by exact type-tag equality; the first object seen
/// for a tag supplies the representative metadata, and balances sum with a
/// default of 1 when the content carries none. Non-fungible objects are
/// never merged, even when they share a tag.
pub fn classify(objects: &[ChainObject]) -> Classified {
    let mut fungible: Vec<ClassifiedItem> = Vec::new();
    let mut non_fungible: Vec<ClassifiedItem> = Vec::new();

    for object in objects {
        if is_fungible(object) {
            let balance = object.balance().unwrap_or(1);
            match fungible
                .iter_mut()
                .find(|item| item.object.type_tag == object.type_tag)
            {
                Some(item) => item.balance += balance,
                None => fungible.push(ClassifiedItem::fungible(object.clone(), balance)),
            }
        } else {
            non_fungible.push(ClassifiedItem::non_fungible(object.clone()));
        }
    }

    Classified {
        fungible,
        non_fungible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coin(type_tag: &str, object_id: &str, balance: u64) -> ChainObject {
        serde_json::from_value(json!({
            "objectId": object_id,
            "type": type_tag,
            "content": {
                "dataType": "moveObject",
                "fields": { "balance": balance.to_string() }
            }
        }))
        .unwrap()
    }

    fn nft(type_tag: &str, object_id: &str) -> ChainObject {
        serde_json::from_value(json!({
            "objectId": object_id,
            "type": type_tag
        }))
        .unwrap()
    }

    #[test]
    fn aggregates_fungible_and_keeps_nfts_distinct() {
        let objects = vec![
            coin("0x1::sui::SUI", "0xa", 100),
            coin("0x1::sui::SUI", "0xb", 50),
            nft("0x2::mynft::NFT", "X"),
        ];
        let result = classify(&objects);

        assert_eq!(result.fungible.len(), 1);
        assert_eq!(result.fungible[0].object.type_tag, "0x1::sui::SUI");
        assert_eq!(result.fungible[0].balance, 150);
        assert_eq!(result.non_fungible.len(), 1);
        assert_eq!(result.non_fungible[0].object.object_id, "X");
        assert_eq!(result.non_fungible[0].balance, 1);
    }

    #[test]
    fn partitions_input_exactly() {
        let objects = vec![
            coin("0x1::sui::SUI", "0xa", 1),
            coin("0x9::koto::KOTO", "0xb", 2),
            coin("0x1::sui::SUI", "0xc", 3),
            nft("0x2::mynft::NFT", "0xd"),
            nft("0x2::mynft::NFT", "0xe"),
        ];
        let result = classify(&objects);

        // Every object lands in exactly one aggregation; none dropped.
        let grouped: usize = result
            .fungible
            .iter()
            .map(|item| {
                objects
                    .iter()
                    .filter(|o| o.type_tag == item.object.type_tag)
                    .count()
            })
            .sum();
        assert_eq!(grouped + result.non_fungible.len(), objects.len());
    }

    #[test]
    fn aggregation_is_incremental() {
        let a = coin("0x1::sui::SUI", "0xa", 10);
        let b = coin("0x1::sui::SUI", "0xb", 20);
        let c = coin("0x1::sui::SUI", "0xc", 30);

        let all_at_once = classify(&[a.clone(), b.clone(), c.clone()]);
        let first_two = classify(&[a, b]);
        let merged_balance = first_two.fungible[0].balance + classify(&[c]).fungible[0].balance;

        assert_eq!(all_at_once.fungible[0].balance, merged_balance);
    }

    #[test]
    fn marker_match_without_balance_counts_as_one() {
        let object = nft("0x9::koto::KOTO", "0xk");
        let result = classify(std::slice::from_ref(&object));
        assert_eq!(result.fungible.len(), 1);
        assert_eq!(result.fungible[0].balance, 1);
        assert!(result.non_fungible.is_empty());
    }

    #[test]
    fn nfts_sharing_a_tag_are_not_merged() {
        let objects = vec![nft("0x2::mynft::NFT", "0x1"), nft("0x2::mynft::NFT", "0x2")];
        let result = classify(&objects);
        assert_eq!(result.non_fungible.len(), 2);
    }

    #[test]
    fn sparse_object_is_still_classified() {
        // An object whose enrichment failed keeps its minimal envelope.
        let bare: ChainObject = serde_json::from_value(json!({ "objectId": "0x1" })).unwrap();
        let result = classify(std::slice::from_ref(&bare));
        assert_eq!(result.non_fungible.len(), 1);
        assert_eq!(result.non_fungible[0].object.object_id, "0x1");
    }

    #[test]
    fn first_seen_representative_wins() {
        let mut first = coin("0x1::sui::SUI", "0xa", 1);
        first.display = serde_json::from_value(json!({ "data": { "name": "First" } })).ok();
        let second = coin("0x1::sui::SUI", "0xb", 1);

        let result = classify(&[first, second]);
        assert_eq!(result.fungible[0].object.object_id, "0xa");
        assert_eq!(result.fungible[0].object.display_field("name"), Some("First"));
    }

    #[test]
    fn into_items_orders_fungible_before_nfts() {
        let objects = vec![
            nft("0x2::mynft::NFT", "0xn"),
            coin("0x1::sui::SUI", "0xa", 5),
        ];
        let items = classify(&objects).into_items();
        assert!(items[0].fungible);
        assert!(!items[1].fungible);
    }
}
