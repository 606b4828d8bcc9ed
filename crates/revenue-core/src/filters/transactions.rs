use chrono::NaiveDate;

use crate::model::{CategoryFilter, TimeFilter, Transaction};

/// Case-insensitive substring match on owner or property id; empty matches all.
fn matches_search(t: &Transaction, needle: &str) -> bool {
    needle.is_empty()
        || t.owner.to_lowercase().contains(needle)
        || t.property_id.to_lowercase().contains(needle)
}

/// Keep transactions that match the search term, fall inside the recency
/// window ending at `as_of`, and belong to the selected category.
///
/// Relative order is preserved. An unrecognised window matches nothing.
pub fn filter_transactions(
    transactions: &[Transaction],
    search_term: &str,
    time_filter: &TimeFilter,
    category_filter: &CategoryFilter,
    as_of: NaiveDate,
) -> Vec<Transaction> {
    let Some(max_age) = time_filter.days() else {
        return Vec::new();
    };
    let needle = search_term.to_lowercase();

    transactions
        .iter()
        .filter(|t| {
            matches_search(t, &needle)
                && t.age_in_days(as_of) <= max_age
                && category_filter.matches(t.category)
        })
        .cloned()
        .collect()
}
