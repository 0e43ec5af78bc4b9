//! The catalog query engine.
//!
//! A pure function of `(items, filter)` producing the filtered result set.
//! The engine is deliberately dumb: it does no ranking, no normalization, and
//! no validation of category labels. Whatever order the catalog hands it is
//! the order survivors come back in.

use crate::domain::ItemRecord;
use crate::query::FilterSpec;

/// Applies a filter specification to an item sequence.
///
/// The result is a fresh `Vec` recomputed from scratch on every call. Results
/// are never patched incrementally, so two calls with equal inputs return
/// equal, order-equal outputs.
///
/// # Filtering Rules
///
/// 1. Category: exact, case-sensitive string equality; inactive when the
///    filter carries no category.
/// 2. Verified: when `verified_only` is set, only `verified == true` survives.
/// 3. Search: the query is lowercased once and matched as a substring against
///    the lowercased `name`, `description`, and `vendor`; any one hit keeps
///    the record.
///
/// Rules combine conjunctively and never reorder survivors. An empty filter
/// returns the input unchanged; a filter matching nothing returns an empty
/// `Vec`, which is an ordinary result and not an error.
///
/// # Examples
///
/// ```
/// use dripcity::catalog::{InMemoryCatalog, MarketSource};
/// use dripcity::query::{query, FilterSpec};
///
/// let items = InMemoryCatalog::seeded().all_items().unwrap();
///
/// let everything = query(&items, &FilterSpec::default());
/// assert_eq!(everything.len(), items.len());
///
/// let filter = FilterSpec {
///     search: "LEATHER".to_string(),
///     ..FilterSpec::default()
/// };
/// assert!(query(&items, &filter).iter().all(|i| {
///     let hay = format!("{} {} {}", i.name, i.description, i.vendor);
///     hay.to_lowercase().contains("leather")
/// }));
/// ```
#[must_use]
pub fn query(items: &[ItemRecord], filter: &FilterSpec) -> Vec<ItemRecord> {
    let _span = tracing::debug_span!(
        "query",
        total_items = items.len(),
        search_len = filter.search.len(),
        category = ?filter.active_category(),
        verified_only = filter.verified_only
    )
    .entered();

    let needle = filter.search.to_lowercase();

    let results: Vec<ItemRecord> = items
        .iter()
        .filter(|item| matches(item, filter, &needle))
        .cloned()
        .collect();

    tracing::debug!(result_count = results.len(), "query complete");

    results
}

/// Checks one record against every active constraint.
///
/// `needle` is the pre-lowercased search text, computed once per query rather
/// than once per record.
fn matches(item: &ItemRecord, filter: &FilterSpec, needle: &str) -> bool {
    if let Some(category) = filter.active_category() {
        if item.category != category {
            return false;
        }
    }

    if filter.verified_only && !item.verified {
        return false;
    }

    if !needle.is_empty() {
        let hit = item.name.to_lowercase().contains(needle)
            || item.description.to_lowercase().contains(needle)
            || item.vendor.to_lowercase().contains(needle);
        if !hit {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, category: &str, vendor: &str, verified: bool) -> ItemRecord {
        ItemRecord {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: 1000,
            rating: 4.0,
            vendor: vendor.to_string(),
            verified,
            image: String::new(),
            description: format!("{name} from {vendor}"),
        }
    }

    fn fixture() -> Vec<ItemRecord> {
        vec![
            item(1, "Premium African Wax Print", "Fabric", "FabricsNG", true),
            item(2, "Leather Handbag Straps", "Accessories", "LeatherCraft", true),
            item(3, "Assorted Buttons Pack", "Accessories", "SewingEssentials", false),
            item(4, "Cotton Thread Set", "Materials", "ThreadMaster", true),
            item(5, "Suede Fabric Roll", "fabric", "LuxuryFabrics", true),
        ]
    }

    fn ids(items: &[ItemRecord]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn same_inputs_same_outputs() {
        let items = fixture();
        let filter = FilterSpec {
            search: "a".to_string(),
            category: Some("Accessories".to_string()),
            verified_only: false,
        };
        assert_eq!(query(&items, &filter), query(&items, &filter));
    }

    #[test]
    fn empty_filter_is_identity() {
        let items = fixture();
        assert_eq!(query(&items, &FilterSpec::default()), items);
    }

    #[test]
    fn filters_combine_as_intersection() {
        let items = fixture();
        let by_category = FilterSpec {
            category: Some("Accessories".to_string()),
            ..FilterSpec::default()
        };
        let by_verified = FilterSpec {
            verified_only: true,
            ..FilterSpec::default()
        };
        let merged = FilterSpec {
            category: Some("Accessories".to_string()),
            verified_only: true,
            ..FilterSpec::default()
        };

        let lhs = ids(&query(&items, &merged));
        let rhs: Vec<i64> = ids(&query(&items, &by_category))
            .into_iter()
            .filter(|id| ids(&query(&items, &by_verified)).contains(id))
            .collect();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs, vec![2]);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let items = fixture();
        let filter = FilterSpec {
            category: Some("Fabric".to_string()),
            ..FilterSpec::default()
        };
        // Item 5 carries the lower-case variant "fabric" and must be excluded.
        assert_eq!(ids(&query(&items, &filter)), vec![1]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = fixture();
        let filter = FilterSpec {
            search: "LEATHER".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&items, &filter)), vec![2]);
    }

    #[test]
    fn search_covers_description_and_vendor() {
        let items = fixture();

        let by_vendor = FilterSpec {
            search: "threadmaster".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&items, &by_vendor)), vec![4]);

        // Descriptions in the fixture embed the vendor, so a fragment unique
        // to one description still resolves to exactly that record.
        let by_description = FilterSpec {
            search: "from sewingessentials".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&items, &by_description)), vec![3]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let items = fixture();
        let filter = FilterSpec {
            search: "zzzznomatch".to_string(),
            ..FilterSpec::default()
        };
        assert!(query(&items, &filter).is_empty());
    }

    #[test]
    fn survivor_order_follows_input_order() {
        let items = fixture();
        let filter = FilterSpec {
            verified_only: true,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&query(&items, &filter)), vec![1, 2, 4, 5]);
    }

    #[test]
    fn empty_string_category_matches_everything() {
        let items = fixture();
        let filter = FilterSpec {
            category: Some(String::new()),
            ..FilterSpec::default()
        };
        assert_eq!(query(&items, &filter), items);
    }
}
