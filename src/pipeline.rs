//! Filter, sort and paginate stages shared by every catalog listing.
//!
//! The stages are written once against [`VehicleRecord`] and work for any
//! record that exposes an identifier, a name and an abbreviation. They run in
//! memory: the Diesel record source loads the table once and everything after
//! that happens here, so a listing costs one full read of the table.
//!
//! Filtering is lazy. Sorting is the point where the sequence is
//! materialized, and pagination counts the sorted set before slicing it.

use std::cmp::Ordering;

use crate::domain::filtering::{FilteringParams, SortKey};
use crate::pagination::PagedResult;

/// Minimal capability the listing stages operate on.
pub trait VehicleRecord {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn abbreviation(&self) -> &str;
}

/// Lazy iterator returned by [`filter_records`].
pub struct Filtered<I> {
    inner: I,
    /// Lower-cased search term. `None` passes every record through.
    needle: Option<String>,
}

impl<I, T> Iterator for Filtered<I>
where
    I: Iterator<Item = T>,
    T: VehicleRecord,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.needle.as_deref() {
            None => self.inner.next(),
            Some(needle) => self.inner.find(|record| matches_query(record, needle)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.needle {
            None => (lower, upper),
            Some(_) => (0, upper),
        }
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

fn matches_query<T: VehicleRecord>(record: &T, lowered_needle: &str) -> bool {
    contains_ignore_case(record.name(), lowered_needle)
        || contains_ignore_case(record.abbreviation(), lowered_needle)
}

/// Keeps the records whose name or abbreviation contains `search_query`,
/// ignoring case. A missing or blank query keeps everything.
pub fn filter_records<I, T>(records: I, search_query: Option<&str>) -> Filtered<I::IntoIter>
where
    I: IntoIterator<Item = T>,
    T: VehicleRecord,
{
    let needle = search_query
        .filter(|query| !query.trim().is_empty())
        .map(str::to_lowercase);

    Filtered {
        inner: records.into_iter(),
        needle,
    }
}

/// Case-folded order first, so "audi" sorts between "Alfa" and "BMW". Values
/// that differ only by case fall back to ordinal order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_by<T: VehicleRecord>(key: SortKey, a: &T, b: &T) -> Ordering {
    match key {
        SortKey::Id => a.id().cmp(&b.id()),
        SortKey::Name => compare_text(a.name(), b.name()),
        SortKey::Abbreviation => compare_text(a.abbreviation(), b.abbreviation()),
    }
}

/// Orders the records by a single field.
///
/// The sort is stable, so records with equal keys keep their source order in
/// both directions. An unrecognized key (`None`) orders by name ascending and
/// ignores `descending`.
pub fn sort_records<I, T>(records: I, sort_by: Option<SortKey>, descending: bool) -> std::vec::IntoIter<T>
where
    I: IntoIterator<Item = T>,
    T: VehicleRecord,
{
    let (key, descending) = match sort_by {
        Some(key) => (key, descending),
        None => (SortKey::Name, false),
    };

    let mut items: Vec<T> = records.into_iter().collect();
    items.sort_by(|a, b| {
        let ordering = compare_by(key, a, b);
        if descending { ordering.reverse() } else { ordering }
    });
    items.into_iter()
}

/// Counts every record, then projects the requested page.
///
/// Page number and page size below 1 are clamped to 1.
pub fn paginate<I, T, U, F>(records: I, page_number: i32, page_size: i32, project: F) -> PagedResult<U>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
    F: FnMut(T) -> U,
{
    let page_number = page_number.max(1) as usize;
    let page_size = page_size.max(1) as usize;

    let records = records.into_iter();
    let total_count = records.len();
    let offset = (page_number - 1).saturating_mul(page_size);

    let items = records.skip(offset).take(page_size).map(project).collect();

    PagedResult::new(items, page_number, page_size, total_count)
}

/// Runs filter, sort and paginate in that order.
pub fn list_page<I, T, U, F>(records: I, params: &FilteringParams, project: F) -> PagedResult<U>
where
    I: IntoIterator<Item = T>,
    T: VehicleRecord,
    F: FnMut(T) -> U,
{
    let filtered = filter_records(records, params.search_query.as_deref());
    let sorted = sort_records(filtered, params.sort_by, params.descending);
    paginate(sorted, params.page_number, params.page_size, project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Row {
        id: i32,
        name: &'static str,
        abbreviation: &'static str,
    }

    impl VehicleRecord for Row {
        fn id(&self) -> i32 {
            self.id
        }

        fn name(&self) -> &str {
            self.name
        }

        fn abbreviation(&self) -> &str {
            self.abbreviation
        }
    }

    fn row(id: i32, name: &'static str, abbreviation: &'static str) -> Row {
        Row {
            id,
            name,
            abbreviation,
        }
    }

    fn catalog() -> Vec<Row> {
        vec![
            row(1, "Toyota", "TOYOTA"),
            row(2, "Honda", "HONDA"),
            row(3, "Volkswagen", "VW"),
            row(4, "BMW", "BMW"),
            row(5, "Ford", "FORD"),
        ]
    }

    fn ids<T: VehicleRecord>(records: impl IntoIterator<Item = T>) -> Vec<i32> {
        records.into_iter().map(|r| r.id()).collect()
    }

    #[test]
    fn blank_query_keeps_every_record() {
        assert_eq!(ids(filter_records(catalog(), None)), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(filter_records(catalog(), Some(""))), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(filter_records(catalog(), Some("  \t"))), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn query_matches_name_or_abbreviation_ignoring_case() {
        assert_eq!(ids(filter_records(catalog(), Some("vw"))), vec![3]);
        assert_eq!(ids(filter_records(catalog(), Some("oNd"))), vec![2]);
        assert_eq!(ids(filter_records(catalog(), Some("o"))), vec![1, 2, 3, 5]);
        assert!(ids(filter_records(catalog(), Some("tesla"))).is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        assert!(ids(filter_records(catalog(), Some(" bmw"))).is_empty());
    }

    #[test]
    fn query_ignores_case_beyond_ascii() {
        let rows = vec![row(1, "ŠKODA", "ŠK"), row(2, "Citroën", "CITROËN"), row(3, "Dacia", "DC")];
        assert_eq!(ids(filter_records(rows.clone(), Some("škoda"))), vec![1]);
        assert_eq!(ids(filter_records(rows.clone(), Some("šk"))), vec![1]);
        assert_eq!(ids(filter_records(rows, Some("ROËN"))), vec![2]);
    }

    #[test]
    fn filter_is_lazy() {
        let mut inspected = 0;
        let source = catalog().into_iter().inspect(|_| inspected += 1);
        let first = filter_records(source, Some("o")).next();

        assert_eq!(first.map(|r| r.id), Some(1));
        assert_eq!(inspected, 1);
    }

    #[test]
    fn sorts_by_each_key_in_both_directions() {
        assert_eq!(
            ids(sort_records(catalog(), Some(SortKey::Name), false)),
            vec![4, 5, 2, 1, 3]
        );
        assert_eq!(
            ids(sort_records(catalog(), Some(SortKey::Name), true)),
            vec![3, 1, 2, 5, 4]
        );
        assert_eq!(
            ids(sort_records(catalog(), Some(SortKey::Abbreviation), false)),
            vec![4, 5, 2, 1, 3]
        );
        assert_eq!(
            ids(sort_records(catalog(), Some(SortKey::Id), true)),
            vec![5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn adjacent_pairs_respect_the_order() {
        let sorted: Vec<Row> = sort_records(catalog(), Some(SortKey::Abbreviation), true).collect();
        assert!(
            sorted
                .windows(2)
                .all(|pair| pair[0].abbreviation >= pair[1].abbreviation)
        );
    }

    #[test]
    fn unrecognized_key_sorts_by_name_ascending() {
        let expected = ids(sort_records(catalog(), Some(SortKey::Name), false));
        assert_eq!(ids(sort_records(catalog(), None, false)), expected);
        assert_eq!(ids(sort_records(catalog(), None, true)), expected);
    }

    #[test]
    fn text_keys_sort_ignoring_case() {
        let rows = vec![row(1, "Zastava", "zas"), row(2, "audi", "AUD"), row(3, "BMW", "bmw")];
        assert_eq!(ids(sort_records(rows.clone(), Some(SortKey::Name), false)), vec![2, 3, 1]);
        assert_eq!(ids(sort_records(rows.clone(), Some(SortKey::Name), true)), vec![1, 3, 2]);
        assert_eq!(ids(sort_records(rows, Some(SortKey::Abbreviation), false)), vec![2, 3, 1]);
    }

    #[test]
    fn names_differing_only_by_case_sort_ordinally() {
        let rows = vec![row(1, "bmw", "B"), row(2, "BMW", "B")];
        assert_eq!(ids(sort_records(rows, Some(SortKey::Name), false)), vec![2, 1]);
    }

    #[test]
    fn ties_keep_source_order() {
        let rows = vec![row(1, "Golf", "A"), row(2, "Golf", "B"), row(3, "Golf", "C")];
        assert_eq!(ids(sort_records(rows.clone(), Some(SortKey::Name), false)), vec![1, 2, 3]);
        assert_eq!(ids(sort_records(rows, Some(SortKey::Name), true)), vec![1, 2, 3]);
    }

    #[test]
    fn total_count_ignores_the_page_window() {
        let page = paginate(catalog(), 2, 2, |r| r.id);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.page_size, 2);

        let last = paginate(catalog(), 3, 2, |r| r.id);
        assert_eq!(last.items, vec![5]);
        assert_eq!(last.total_count, 5);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(catalog(), 9, 10, |r| r.id);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn non_positive_paging_is_clamped() {
        let page = paginate(catalog(), 0, -4, |r| r.id);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items, vec![1]);

        let page = paginate(catalog(), -3, 0, |r| r.id);
        assert_eq!(page.items, vec![1]);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let page = paginate(catalog(), i32::MAX, i32::MAX, |r| r.id);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn list_page_filters_before_sorting_and_slicing() {
        let params = FilteringParams::new()
            .search("o")
            .sort_by(Some(SortKey::Name))
            .paginate(1, 2);

        let page = list_page(catalog(), &params, |r| r.name);

        assert_eq!(page.total_count, 4);
        assert_eq!(page.items, vec!["Ford", "Honda"]);
    }

    #[test]
    fn list_page_is_repeatable() {
        let params = FilteringParams::new().sort_by(Some(SortKey::Abbreviation)).descending(true);
        let first = list_page(catalog(), &params, |r| r.id);
        let second = list_page(catalog(), &params, |r| r.id);
        assert_eq!(first, second);
    }
}
