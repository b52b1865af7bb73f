use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::state::Item;

/// What: Case-insensitive substring test of `query` against an item's text fields.
///
/// Inputs:
/// - `item`: Candidate item
/// - `query`: Needle; callers pass it already trimmed
///
/// Output:
/// - `true` when `query` occurs in the title, subtitle, category, or description.
///
/// Details:
/// - An empty needle matches everything.
pub fn matches_query(item: &Item, query: &str) -> bool {
    let needle = query.to_lowercase();
    [
        item.title.as_str(),
        item.subtitle.as_str(),
        item.category.as_str(),
        item.description.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// What: Select the items visible for a query and optional category.
///
/// Inputs:
/// - `items`: Full catalog in provider order
/// - `query`: Raw query text (trimmed here)
/// - `category`: Exact-match category filter applied before the text filter
///
/// Output:
/// - Matching items, cloned, in catalog order.
pub fn filter_items(items: &[Item], query: &str, category: Option<&str>) -> Vec<Item> {
    let q = query.trim();
    items
        .iter()
        .filter(|it| category.is_none_or(|c| it.category == c))
        .filter(|it| q.is_empty() || matches_query(it, q))
        .cloned()
        .collect()
}

/// Distinct category labels of `items`, lexicographically sorted.
pub fn distinct_categories(items: &[Item]) -> Vec<String> {
    let mut cats: Vec<String> = items.iter().map(|it| it.category.clone()).collect();
    cats.sort();
    cats.dedup();
    cats
}

/// What: Reorder items deterministically from a seed.
///
/// Inputs:
/// - `items`: List to shuffle in place
/// - `seed`: Seed chosen by the caller
///
/// Details:
/// - The same seed always yields the same permutation, which keeps reducers pure.
pub fn shuffle_with_seed(items: &mut [Item], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Item> {
        let mut flow = Item::new("2", "Kotlin Flow", "Reactive");
        flow.subtitle = "Reactive streams with coroutines".into();
        let mut compose = Item::new("3", "Jetpack Compose", "UI");
        compose.description = "Declarative toolkit with recomposition".into();
        vec![Item::new("1", "Coroutines", "Concurrency"), flow, compose]
    }

    #[test]
    /// What: Every field participates in the text predicate.
    ///
    /// - Input: Queries hitting title, subtitle, category, description
    /// - Output: Each query selects the expected item
    fn predicate_checks_all_text_fields() {
        let items = catalog();
        let ids = |q: &str| -> Vec<String> {
            filter_items(&items, q, None).into_iter().map(|i| i.id).collect()
        };
        assert_eq!(ids("corout"), vec!["1", "2"]);
        assert_eq!(ids("STREAMS"), vec!["2"]);
        assert_eq!(ids("ui"), vec!["3"]);
        assert_eq!(ids("recomposition"), vec!["3"]);
        assert!(ids("zzz").is_empty());
    }

    #[test]
    /// What: Results contain only items satisfying the predicate, in catalog order.
    ///
    /// - Input: Several queries over the fixture catalog
    /// - Output: Every returned item matches and relative order is kept
    fn filter_returns_only_matching_items_in_order() {
        let items = catalog();
        for q in ["o", "Co", "compose", " flow ", "e"] {
            let out = filter_items(&items, q, None);
            assert!(out.iter().all(|it| matches_query(it, q.trim())));
            let positions: Vec<usize> = out
                .iter()
                .filter_map(|it| items.iter().position(|x| x.id == it.id))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    /// What: Category applies as an exact-match AND before the text filter.
    ///
    /// - Input: Category "UI" with and without a query
    /// - Output: Only UI items; query narrows further
    fn category_is_and_condition() {
        let items = catalog();
        assert_eq!(filter_items(&items, "", Some("UI")).len(), 1);
        assert!(filter_items(&items, "corout", Some("UI")).is_empty());
        assert!(filter_items(&items, "", Some("ui")).is_empty());
    }

    #[test]
    /// What: Categories are distinct and sorted.
    fn categories_sorted_and_deduped() {
        let mut items = catalog();
        items.push(Item::new("4", "Navigation", "UI"));
        assert_eq!(
            distinct_categories(&items),
            vec!["Concurrency", "Reactive", "UI"]
        );
    }

    #[test]
    /// What: Seeded shuffle is a deterministic permutation.
    fn seeded_shuffle_is_deterministic_permutation() {
        let mut a = catalog();
        let mut b = catalog();
        shuffle_with_seed(&mut a, 42);
        shuffle_with_seed(&mut b, 42);
        assert_eq!(a, b);
        let mut ids: Vec<String> = a.into_iter().map(|i| i.id).collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
