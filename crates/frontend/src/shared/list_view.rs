//! The shared list-view transform: filter, sort, paginate.
//!
//! Every account/brand table on the dashboard runs its rows through
//! [`apply_view`]. Pure data-in/data-out: no signals, no DOM, no I/O.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Rows shown when a table first renders.
pub const PAGE_SIZE: usize = 10;
/// Rows added per "show more" click.
pub const PAGE_STEP: usize = 10;

/// Which way a table leans; decides the default direction when the user
/// picks a new sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFlavor {
    /// Declining-oriented tables surface the worst rows first.
    Declining,
    /// Everything else surfaces the largest values first.
    Standard,
}

impl TableFlavor {
    pub fn default_ascending(self) -> bool {
        matches!(self, TableFlavor::Declining)
    }
}

/// Row contract for the transform. `compare_by_field` must be a total
/// order for every field the table exposes as sortable.
pub trait ListRecord: Clone {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;

    /// Case-insensitive substring match against the record's searchable
    /// text (name and city). `needle_lower` is already lowercased.
    fn matches_search(&self, needle_lower: &str) -> bool;

    /// City used by the multi-select filter. `None` opts the record type
    /// out of city filtering entirely.
    fn city(&self) -> Option<&str>;
}

/// Per-table-instance view parameters. Ephemeral: owned by one rendered
/// table and reset on remount.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub cities: BTreeSet<String>,
    pub search: String,
    pub visible_rows: usize,
}

impl ViewState {
    pub fn new(sort_field: &str, flavor: TableFlavor) -> Self {
        Self {
            sort_field: sort_field.to_string(),
            sort_ascending: flavor.default_ascending(),
            cities: BTreeSet::new(),
            search: String::new(),
            visible_rows: PAGE_SIZE,
        }
    }

    /// Header click: re-clicking the active field toggles direction, a new
    /// field resets direction to the flavor default.
    pub fn toggle_sort(&mut self, field: &str, flavor: TableFlavor) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = flavor.default_ascending();
        }
    }

    /// Flip one city in or out of the filter set. Changing filters snaps
    /// the view back to the first page of rows.
    pub fn toggle_city(&mut self, city: &str) {
        if !self.cities.remove(city) {
            self.cities.insert(city.to_string());
        }
        self.visible_rows = PAGE_SIZE;
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
        self.visible_rows = PAGE_SIZE;
    }

    pub fn clear_filters(&mut self) {
        self.cities.clear();
        self.search.clear();
        self.visible_rows = PAGE_SIZE;
    }

    /// Reveal another page, clamped to the filtered-set length.
    pub fn show_more(&mut self, matched: usize) {
        self.visible_rows = (self.visible_rows + PAGE_STEP).min(matched.max(PAGE_SIZE));
    }

    pub fn show_less(&mut self) {
        self.visible_rows = PAGE_SIZE;
    }

    pub fn active_filter_count(&self) -> usize {
        let search_active = usize::from(!self.search.trim().is_empty());
        self.cities.len() + search_active
    }
}

/// What a table actually renders, plus the counts its caption needs
/// ("Showing 10 of 44, filtered from 135").
#[derive(Debug, Clone, PartialEq)]
pub struct ListOutcome<T> {
    pub rows: Vec<T>,
    /// Row count after filters.
    pub matched: usize,
    /// Row count before any filter.
    pub total: usize,
}

/// Turn `(records, view state)` into the exact ordered slice to render.
///
/// Filters compose with AND; an empty search and an empty city set are
/// both no-ops. `Vec::sort_by` is stable, so rows tying on the active
/// field keep their input order and repeated sorts never shuffle the view.
pub fn apply_view<T: ListRecord>(records: &[T], state: &ViewState) -> ListOutcome<T> {
    let total = records.len();
    let needle = state.search.trim().to_lowercase();

    let mut rows: Vec<T> = records
        .iter()
        .filter(|r| needle.is_empty() || r.matches_search(&needle))
        .filter(|r| {
            state.cities.is_empty() || r.city().map_or(true, |c| state.cities.contains(c))
        })
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ord = a.compare_by_field(b, &state.sort_field);
        if state.sort_ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    let matched = rows.len();
    rows.truncate(state.visible_rows);
    ListOutcome {
        rows,
        matched,
        total,
    }
}

/// Numeric field comparison, ascending. Total order even for NaN inputs.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Case-insensitive text comparison, ascending.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        city: String,
        amount: f64,
    }

    impl Row {
        fn new(id: u32, name: &str, city: &str, amount: f64) -> Self {
            Self {
                id,
                name: name.to_string(),
                city: city.to_string(),
                amount,
            }
        }
    }

    impl ListRecord for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => cmp_f64(self.amount, other.amount),
                "city" => cmp_text(&self.city, &other.city),
                _ => cmp_text(&self.name, &other.name),
            }
        }

        fn matches_search(&self, needle_lower: &str) -> bool {
            self.name.to_lowercase().contains(needle_lower)
                || self.city.to_lowercase().contains(needle_lower)
        }

        fn city(&self) -> Option<&str> {
            Some(&self.city)
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new(1, "SUNDANCE OPTICAL", "ST GEORGE", 61244.90),
            Row::new(2, "NEVADA EYE PHYSICIANS", "HENDERSON", 18200.10),
            Row::new(3, "DESERT VISION CENTER", "MESQUITE", 9310.00),
            Row::new(4, "MOAB EYECARE", "MOAB", 18200.10),
            Row::new(5, "ZION FAMILY OPTICAL", "ST GEORGE", 27801.55),
        ]
    }

    fn state(field: &str, ascending: bool) -> ViewState {
        let mut st = ViewState::new(field, TableFlavor::Standard);
        st.sort_ascending = ascending;
        st
    }

    #[test]
    fn output_is_an_ordered_permutation_of_the_filtered_input() {
        let rows = sample();
        let mut st = state("amount", true);
        st.visible_rows = rows.len();

        let outcome = apply_view(&rows, &st);

        let mut expected: Vec<u32> = rows.iter().map(|r| r.id).collect();
        expected.sort_unstable();
        let mut actual: Vec<u32> = outcome.rows.iter().map(|r| r.id).collect();
        actual.sort_unstable();
        assert_eq!(actual, expected);

        for pair in outcome.rows.windows(2) {
            assert_ne!(
                pair[0].compare_by_field(&pair[1], "amount"),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let rows = sample();
        let mut st = state("name", false);
        st.visible_rows = rows.len();

        let once = apply_view(&rows, &st);
        let twice = apply_view(&once.rows, &st);
        assert_eq!(once.rows, twice.rows);
    }

    #[test]
    fn double_direction_toggle_restores_original_order() {
        // Rows 2 and 4 tie on amount; stability must keep their relative
        // order through a descending and back-to-ascending pass.
        let rows = sample();
        let mut st = state("amount", true);
        st.visible_rows = rows.len();
        let original = apply_view(&rows, &st);

        st.toggle_sort("amount", TableFlavor::Standard);
        let flipped = apply_view(&original.rows, &st);
        st.toggle_sort("amount", TableFlavor::Standard);
        let restored = apply_view(&flipped.rows, &st);

        assert_eq!(original.rows, restored.rows);
    }

    #[test]
    fn city_filter_keeps_members_and_reports_unfiltered_total() {
        let rows = sample();
        let mut st = state("name", true);
        st.cities.insert("ST GEORGE".to_string());

        let outcome = apply_view(&rows, &st);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.matched, 2);
        assert!(outcome.rows.iter().all(|r| r.city == "ST GEORGE"));
    }

    #[test]
    fn search_matches_name_or_city_case_insensitively() {
        let rows = sample();
        let mut st = state("name", true);
        st.set_search("optical".to_string());

        let outcome = apply_view(&rows, &st);
        let names: Vec<&str> = outcome.rows.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"SUNDANCE OPTICAL"));
        assert!(names.contains(&"ZION FAMILY OPTICAL"));
        assert!(!names.contains(&"NEVADA EYE PHYSICIANS"));

        st.set_search("st george".to_string());
        let by_city = apply_view(&rows, &st);
        assert_eq!(by_city.matched, 2);
    }

    #[test]
    fn filters_compose_with_and() {
        let rows = sample();
        let mut st = state("name", true);
        st.set_search("optical".to_string());
        st.cities.insert("MOAB".to_string());

        let outcome = apply_view(&rows, &st);
        assert_eq!(outcome.rows.len(), 0);
        assert_eq!(outcome.matched, 0);
        // The caption can still report "0 of 5".
        assert_eq!(outcome.total, 5);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let rows: Vec<Row> = Vec::new();
        let outcome = apply_view(&rows, &state("name", true));
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.matched, 0);
        assert_eq!(outcome.total, 0);
    }

    #[test]
    fn show_more_clamps_and_show_less_resets() {
        let rows: Vec<Row> = (0..15)
            .map(|i| Row::new(i, &format!("ACCOUNT {i}"), "CITY", f64::from(i)))
            .collect();
        let mut st = state("amount", true);

        let first = apply_view(&rows, &st);
        assert_eq!(first.rows.len(), PAGE_SIZE);

        st.show_more(first.matched);
        let expanded = apply_view(&rows, &st);
        assert_eq!(expanded.rows.len(), 15);

        // Another click cannot reveal more than exists.
        st.show_more(expanded.matched);
        assert_eq!(st.visible_rows, 15);

        st.show_less();
        let collapsed = apply_view(&rows, &st);
        assert_eq!(collapsed.rows.len(), PAGE_SIZE);
    }

    #[test]
    fn changing_filters_resets_visible_rows() {
        let mut st = state("name", true);
        st.show_more(40);
        assert_eq!(st.visible_rows, PAGE_SIZE + PAGE_STEP);

        st.set_search("x".to_string());
        assert_eq!(st.visible_rows, PAGE_SIZE);

        st.show_more(40);
        st.toggle_city("MOAB");
        assert_eq!(st.visible_rows, PAGE_SIZE);
    }

    #[test]
    fn new_sort_field_takes_flavor_default_direction() {
        let mut declining = ViewState::new("difference", TableFlavor::Declining);
        assert!(declining.sort_ascending);
        declining.toggle_sort("city", TableFlavor::Declining);
        assert!(declining.sort_ascending);
        declining.toggle_sort("city", TableFlavor::Declining);
        assert!(!declining.sort_ascending);

        let mut standard = ViewState::new("difference", TableFlavor::Standard);
        assert!(!standard.sort_ascending);
        standard.toggle_sort("cy_total", TableFlavor::Standard);
        assert!(!standard.sort_ascending);
        standard.toggle_sort("cy_total", TableFlavor::Standard);
        assert!(standard.sort_ascending);
    }

    #[test]
    fn active_filter_count_counts_cities_and_search() {
        let mut st = state("name", true);
        assert_eq!(st.active_filter_count(), 0);
        st.toggle_city("MOAB");
        st.toggle_city("HENDERSON");
        st.set_search("eye".to_string());
        assert_eq!(st.active_filter_count(), 3);
        st.clear_filters();
        assert_eq!(st.active_filter_count(), 0);
    }
}
