//! List-screen state: search filtering and pagination.
//!
//! Every list screen holds one `FilteredList` + `PagedView` pair per stage
//! tab, replaces the full dataset wholesale after each fetch, and clamps the
//! page position before the next read so a shrinking source can never leave
//! the view on a page past the end.

use leptos::prelude::*;
use std::cmp::Ordering;

/// Resolves a dot-separated field path (e.g. `"branch.name"`) on a record.
///
/// Unknown paths return `None`, which the filter treats as a non-match for
/// that field rather than an error.
pub trait FieldAccess {
    fn field(&self, path: &str) -> Option<String>;
}

/// Row comparison by named field, for sortable table headers.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let ord = a.compare_by_field(b, field);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

/// A full dataset plus a search-narrowed view over it.
///
/// The filtered view is recomputed synchronously whenever the dataset is
/// replaced or the search changes; it always preserves the relative order of
/// the full dataset. With an empty term the views are identical. With a
/// non-empty term and no search fields nothing matches (by convention, kept
/// from the original screens).
#[derive(Clone, Debug)]
pub struct FilteredList<T> {
    full: Vec<T>,
    filtered: Vec<T>,
    term: String,
    fields: Vec<String>,
}

impl<T: FieldAccess + Clone> FilteredList<T> {
    pub fn new(fields: &[&str]) -> Self {
        Self {
            full: Vec::new(),
            filtered: Vec::new(),
            term: String::new(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Replace the backing collection wholesale (after every fetch) and
    /// re-apply the current search to it.
    pub fn set_full_dataset(&mut self, records: Vec<T>) {
        self.full = records;
        self.refilter();
    }

    /// Recompute the filtered view for `term` over the configured fields.
    /// Idempotent; safe to call on every keystroke.
    pub fn apply_filter(&mut self, term: &str) {
        self.term = term.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        if self.term.is_empty() {
            self.filtered = self.full.clone();
            return;
        }
        let needle = self.term.to_lowercase();
        self.filtered = self
            .full
            .iter()
            .filter(|r| {
                self.fields.iter().any(|f| {
                    r.field(f)
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&needle)
                })
            })
            .cloned()
            .collect();
    }

    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn full_len(&self) -> usize {
        self.full.len()
    }
}

/// A fixed-size page window over a (possibly filtered) sequence.
///
/// Pages are 1-indexed. Out-of-range requests are clamped, never rejected:
/// clicking "next" past the end is a no-op, not a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagedView {
    page_size: usize,
    current_page: usize,
}

impl PagedView {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn last_page(&self, source_len: usize) -> usize {
        source_len.div_ceil(self.page_size).max(1)
    }

    pub fn go_to_page(&mut self, page: usize, source_len: usize) {
        self.current_page = page.clamp(1, self.last_page(source_len));
    }

    /// Re-apply the position invariant after the source changed size.
    /// Must run before the next read when a delete or a narrower filter
    /// shrinks the source under the current page.
    pub fn clamp(&mut self, source_len: usize) {
        self.current_page = self.current_page.clamp(1, self.last_page(source_len));
    }

    /// The window for the current page. Reads defensively: even if `clamp`
    /// has not run yet, the slice is taken at the nearest valid page.
    pub fn page_slice<'a, T>(&self, source: &'a [T]) -> &'a [T] {
        let page = self.current_page.clamp(1, self.last_page(source.len()));
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(source.len());
        if start >= source.len() {
            &[]
        } else {
            &source[start..end]
        }
    }
}

/// Replace a stage's dataset and restore the page invariant, in that order.
/// Uses the `try_` forms so a response arriving after the screen was torn
/// down is discarded instead of hitting disposed signals.
pub fn apply_rows<T>(list: RwSignal<FilteredList<T>>, pager: RwSignal<PagedView>, rows: Vec<T>)
where
    T: FieldAccess + Clone + Send + Sync + 'static,
{
    let _ = list.try_update(|l| l.set_full_dataset(rows));
    let len = list
        .try_with_untracked(|l| l.filtered().len())
        .unwrap_or(0);
    let _ = pager.try_update(|p| p.clamp(len));
}

/// Apply a new search term and clamp the page to the narrowed view.
pub fn apply_search<T>(list: RwSignal<FilteredList<T>>, pager: RwSignal<PagedView>, term: &str)
where
    T: FieldAccess + Clone + Send + Sync + 'static,
{
    list.update(|l| l.apply_filter(term));
    let len = list.with_untracked(|l| l.filtered().len());
    pager.update(|p| p.clamp(len));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Rec {
        name: String,
        branch_name: String,
        amount: i64,
    }

    fn rec(name: &str, branch: &str) -> Rec {
        Rec {
            name: name.to_string(),
            branch_name: branch.to_string(),
            amount: 0,
        }
    }

    impl FieldAccess for Rec {
        fn field(&self, path: &str) -> Option<String> {
            match path {
                "name" => Some(self.name.clone()),
                "branch.name" => Some(self.branch_name.clone()),
                "amount" => Some(self.amount.to_string()),
                _ => None,
            }
        }
    }

    fn dataset() -> Vec<Rec> {
        vec![
            rec("Alpha", "East"),
            rec("Beta", "West"),
            rec("Gamma", "East"),
        ]
    }

    #[test]
    fn empty_term_yields_full_dataset() {
        let mut list = FilteredList::new(&["name"]);
        list.set_full_dataset(dataset());
        list.apply_filter("");
        assert_eq!(list.filtered().len(), 3);
        assert_eq!(list.filtered()[0], rec("Alpha", "East"));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut list = FilteredList::new(&["name"]);
        list.set_full_dataset(dataset());
        list.apply_filter("ALPH");
        assert_eq!(list.filtered(), &[rec("Alpha", "East")]);
        // Every excluded record really contains no match.
        list.apply_filter("a");
        assert_eq!(list.filtered().len(), 3);
    }

    #[test]
    fn filter_resolves_dotted_paths() {
        let mut list = FilteredList::new(&["branch.name"]);
        list.set_full_dataset(dataset());
        list.apply_filter("east");
        assert_eq!(
            list.filtered(),
            &[rec("Alpha", "East"), rec("Gamma", "East")]
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let mut list = FilteredList::new(&["name", "branch.name"]);
        list.set_full_dataset(dataset());
        list.apply_filter("west");
        let first: Vec<Rec> = list.filtered().to_vec();
        list.apply_filter("west");
        assert_eq!(list.filtered(), first.as_slice());
    }

    #[test]
    fn unknown_path_never_matches() {
        let mut list = FilteredList::new(&["no.such.path"]);
        list.set_full_dataset(dataset());
        list.apply_filter("alpha");
        assert!(list.filtered().is_empty());
    }

    #[test]
    fn empty_fields_with_nonempty_term_matches_nothing() {
        let mut list = FilteredList::new(&[]);
        list.set_full_dataset(dataset());
        list.apply_filter("alpha");
        assert!(list.filtered().is_empty());
        // ...but an empty term still shows everything.
        list.apply_filter("");
        assert_eq!(list.filtered().len(), 3);
    }

    #[test]
    fn set_full_dataset_reapplies_current_term() {
        let mut list = FilteredList::new(&["name"]);
        list.apply_filter("beta");
        list.set_full_dataset(dataset());
        assert_eq!(list.filtered(), &[rec("Beta", "West")]);
        // The full dataset is untouched by the filter.
        assert_eq!(list.full_len(), 3);
    }

    #[test]
    fn page_size_minimum_is_one() {
        let pager = PagedView::new(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.last_page(3), 3);
    }

    #[test]
    fn empty_dataset_is_valid() {
        let mut list: FilteredList<Rec> = FilteredList::new(&["name"]);
        list.set_full_dataset(Vec::new());
        list.apply_filter("x");
        assert!(list.filtered().is_empty());
        let pager = PagedView::new(10);
        assert_eq!(pager.last_page(0), 1);
        assert!(pager.page_slice(list.filtered()).is_empty());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn last_page_arithmetic() {
        let pager = PagedView::new(10);
        assert_eq!(pager.last_page(0), 1);
        assert_eq!(pager.last_page(9), 1);
        assert_eq!(pager.last_page(10), 1);
        assert_eq!(pager.last_page(11), 2);
        assert_eq!(pager.last_page(23), 3);
    }

    #[test]
    fn page_slices_of_23_records() {
        let rows: Vec<i32> = (1..=23).collect();
        let mut pager = PagedView::new(10);
        assert_eq!(pager.page_slice(&rows), &rows[0..10]);
        pager.go_to_page(2, rows.len());
        assert_eq!(pager.page_slice(&rows), &rows[10..20]);
        pager.go_to_page(3, rows.len());
        assert_eq!(pager.page_slice(&rows), &rows[20..23]);
        // Out-of-range request clamps to the last page.
        pager.go_to_page(5, rows.len());
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.page_slice(&rows), &rows[20..23]);
    }

    #[test]
    fn go_to_page_zero_clamps_to_first() {
        let rows: Vec<i32> = (1..=23).collect();
        let mut pager = PagedView::new(10);
        pager.go_to_page(0, rows.len());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn shrinking_source_clamps_current_page() {
        let mut pager = PagedView::new(10);
        pager.go_to_page(3, 25); // page 3 of 3, showing 5 records
        assert_eq!(pager.current_page(), 3);
        pager.clamp(12); // source shrank; last page is now 2
        assert_eq!(pager.current_page(), 2);
        let rows: Vec<i32> = (1..=12).collect();
        assert_eq!(pager.page_slice(&rows), &rows[10..12]);
    }

    #[test]
    fn page_slice_is_safe_before_clamp() {
        let mut pager = PagedView::new(10);
        pager.go_to_page(3, 25);
        // Read without an intervening clamp: slice falls back to the
        // nearest valid page instead of going out of range.
        let rows: Vec<i32> = (1..=12).collect();
        assert_eq!(pager.page_slice(&rows), &rows[10..12]);
    }

    #[test]
    fn sort_list_orders_by_field() {
        impl Sortable for Rec {
            fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
                match field {
                    "name" => self.name.cmp(&other.name),
                    "branch" => self.branch_name.cmp(&other.branch_name),
                    _ => Ordering::Equal,
                }
            }
        }
        let mut rows = dataset();
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0].name, "Gamma");
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "Alpha");
    }
}
