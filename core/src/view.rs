//! Filtered, ordered projections of a collection, and the mapping from a
//! position in such a projection back to a record id.

use uuid::Uuid;

use crate::models::Record;

/// Records whose search fields contain `term`, case-insensitively, in the
/// kind's display order. Leading and trailing whitespace in `term` is
/// ignored, so `"  soup "` matches like `"soup"`; a term that is blank after
/// trimming matches everything. Inner whitespace is kept.
#[must_use]
pub fn filter_view<'a, T: Record>(records: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    let mut view: Vec<&T> = if needle.is_empty() {
        records.iter().collect()
    } else {
        records.iter().filter(|r| matches(*r, &needle)).collect()
    };
    T::order_view(&mut view);
    view
}

fn matches<T: Record>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Ids of the records at `positions` in `view`. Positions past the end are
/// ignored.
#[must_use]
pub fn resolve_visible<T: Record>(view: &[&T], positions: &[usize]) -> Vec<Uuid> {
    positions
        .iter()
        .filter_map(|&p| view.get(p).map(|r| r.id()))
        .collect()
}
