//! View-state derivation for the token list.
//!
//! Pure functions from classified items plus the user's search, filter, and
//! sort choices to the display sequence.

use crate::models::ClassifiedItem;

/// Sort key for the token list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Type,
}

impl SortKey {
    /// Parse the select-control value; unknown values fall back to name.
    pub fn parse(s: &str) -> Self {
        match s {
            "type" => Self::Type,
            _ => Self::Name,
        }
    }
}

/// Type filter for the token list, keyed by Move module name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Module(String),
}

impl TypeFilter {
    /// Parse the select-control value; `"all"` selects everything.
    pub fn parse(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Module(s.to_string())
        }
    }
}

/// User-controlled view options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOptions {
    pub search: String,
    pub filter: TypeFilter,
    pub sort: SortKey,
}

/// Filter and sort classified items for display.
///
/// Search is case-insensitive substring containment on the resolved display
/// name; the type filter matches the module segment of the full tag. The
/// sort is stable, so items equal under the key keep their input order.
pub fn derive_view(items: &[ClassifiedItem], opts: &ViewOptions) -> Vec<ClassifiedItem> {
    let needle = opts.search.to_lowercase();

    let mut view: Vec<ClassifiedItem> = items
        .iter()
        .filter(|item| {
            if !needle.is_empty() && !item.display_name().to_lowercase().contains(&needle) {
                return false;
            }
            match &opts.filter {
                TypeFilter::All => true,
                TypeFilter::Module(module) => {
                    item.object.type_tag.contains(&format!("::{module}::"))
                }
            }
        })
        .cloned()
        .collect();

    match opts.sort {
        SortKey::Name => view.sort_by_key(|item| item.display_name().to_lowercase()),
        SortKey::Type => view.sort_by(|a, b| a.object.type_tag.cmp(&b.object.type_tag)),
    }

    view
}

/// Distinct module names present across the items, in first-seen order.
/// Populates the filter dropdown.
pub fn available_filter_types(items: &[ClassifiedItem]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for item in items {
        let module = item.module_name();
        if !types.contains(&module) {
            types.push(module);
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChainObject;
    use serde_json::json;

    fn named_item(name: &str, type_tag: &str) -> ClassifiedItem {
        let object: ChainObject = serde_json::from_value(json!({
            "objectId": format!("0x{name}"),
            "type": type_tag,
            "display": { "data": { "name": name } }
        }))
        .unwrap();
        ClassifiedItem::non_fungible(object)
    }

    fn opts(search: &str, filter: TypeFilter, sort: SortKey) -> ViewOptions {
        ViewOptions {
            search: search.to_string(),
            filter,
            sort,
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![
            named_item("KOTO", "0x9::koto::KOTO"),
            named_item("SUI", "0x1::sui::SUI"),
            named_item("MyNFT", "0x2::mynft::NFT"),
        ];
        let view = derive_view(&items, &opts("kot", TypeFilter::All, SortKey::Name));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].display_name(), "KOTO");
    }

    #[test]
    fn narrowing_the_search_never_grows_the_view() {
        let items = vec![
            named_item("KOTO", "0x9::koto::KOTO"),
            named_item("KOTACHI", "0x9::koto::KOTO"),
            named_item("SUI", "0x1::sui::SUI"),
        ];
        let broad = derive_view(&items, &opts("ko", TypeFilter::All, SortKey::Name));
        let narrow = derive_view(&items, &opts("kota", TypeFilter::All, SortKey::Name));
        assert!(narrow.len() <= broad.len());
    }

    #[test]
    fn filter_matches_module_segment_exactly() {
        let items = vec![
            named_item("SUI", "0x1::sui::SUI"),
            named_item("MyNFT", "0x2::mynft::NFT"),
            named_item("SuiLike", "0x3::suix::Thing"),
        ];
        let view = derive_view(
            &items,
            &opts("", TypeFilter::Module("sui".to_string()), SortKey::Name),
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].display_name(), "SUI");
    }

    #[test]
    fn sort_by_name_and_type() {
        let items = vec![
            named_item("zebra", "0x1::aaa::A"),
            named_item("apple", "0x1::zzz::Z"),
        ];
        let by_name = derive_view(&items, &opts("", TypeFilter::All, SortKey::Name));
        assert_eq!(by_name[0].display_name(), "apple");

        let by_type = derive_view(&items, &opts("", TypeFilter::All, SortKey::Type));
        assert_eq!(by_type[0].display_name(), "zebra");
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut first = named_item("Same", "0x1::m::A");
        first.object.object_id = "0x1".to_string();
        let mut second = named_item("Same", "0x2::m::B");
        second.object.object_id = "0x2".to_string();

        let view = derive_view(
            &[first, second],
            &opts("", TypeFilter::All, SortKey::Name),
        );
        assert_eq!(view[0].object.object_id, "0x1");
        assert_eq!(view[1].object.object_id, "0x2");
    }

    #[test]
    fn derivation_is_idempotent() {
        let items = vec![
            named_item("b", "0x1::m::B"),
            named_item("a", "0x1::m::A"),
        ];
        let options = opts("", TypeFilter::All, SortKey::Name);
        let once = derive_view(&items, &options);
        let twice = derive_view(&once, &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_types_are_distinct_and_first_seen_ordered() {
        let items = vec![
            named_item("SUI", "0x1::sui::SUI"),
            named_item("MyNFT", "0x2::mynft::NFT"),
            named_item("MoreSui", "0x1::sui::SUI"),
            ClassifiedItem::non_fungible(ChainObject::default()),
        ];
        assert_eq!(
            available_filter_types(&items),
            vec!["sui".to_string(), "mynft".to_string(), "unknown".to_string()]
        );
    }
}
