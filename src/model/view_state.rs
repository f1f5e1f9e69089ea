//! Table view state and its reducer
//!
//! The state is a plain value. Every transition goes through `reduce`,
//! which returns a new state instead of mutating in place, so each user
//! interaction can be tested as `(state, action) -> state'`.

use super::column::{find_column, Column, ColumnKind};
use super::pipeline::{clamp_page_index, filter_indices, page_count, page_ids};
use super::record::TableRecord;
use std::collections::BTreeSet;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page size picker
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Sort, filter, visibility, selection and paging of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub sort_key: Option<&'static str>,
    pub sort_direction: SortDirection,
    pub filter_text: String,
    pub visible_columns: BTreeSet<&'static str>,
    pub selected_ids: BTreeSet<String>,
    pub page_index: usize,
    pub page_size: usize,
}

impl ViewState {
    /// Defaults at mount: first page, no filter, no sort, all columns shown
    pub fn new<R>(columns: &[Column<R>], page_size: usize) -> Self {
        Self {
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            filter_text: String::new(),
            visible_columns: columns.iter().map(|c| c.key).collect(),
            selected_ids: BTreeSet::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible_columns.contains(key)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }
}

/// A transition of the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    SetFilterText(String),
    ToggleSort(&'static str),
    ToggleColumnVisibility(&'static str),
    ToggleRowSelection(String),
    ToggleSelectAllOnPage,
    ClearSelection,
    SetPageIndex(usize),
    NextPage,
    PreviousPage,
    SetPageSize(usize),
    /// Records were deleted from the dataset
    RecordsRemoved(Vec<String>),
}

/// Apply one action, returning the next state
///
/// `records` must already reflect any dataset change that triggered the
/// action (e.g. `RecordsRemoved` is reduced after the records are gone).
pub fn reduce<R: TableRecord>(
    state: &ViewState,
    action: &TableAction,
    records: &[R],
    columns: &[Column<R>],
) -> ViewState {
    let mut next = state.clone();

    match action {
        TableAction::SetFilterText(text) => {
            next.filter_text = text.clone();
            next.page_index = 0;
        }
        TableAction::ToggleSort(key) => {
            if let Some(column) = find_column(columns, key).filter(|c| c.sortable) {
                if next.sort_key == Some(column.key) {
                    next.sort_direction = next.sort_direction.flipped();
                } else {
                    next.sort_key = Some(column.key);
                    next.sort_direction = SortDirection::Ascending;
                }
            }
        }
        TableAction::ToggleColumnVisibility(key) => {
            if let Some(column) = find_column(columns, key).filter(|c| c.hideable) {
                if next.visible_columns.contains(column.key) {
                    // Keep at least one data column on screen
                    let visible_data = columns
                        .iter()
                        .filter(|c| c.kind == ColumnKind::Data && next.is_visible(c.key))
                        .count();
                    if visible_data > 1 {
                        next.visible_columns.remove(column.key);
                    }
                } else {
                    next.visible_columns.insert(column.key);
                }
            }
        }
        TableAction::ToggleRowSelection(id) => {
            if !next.selected_ids.remove(id) && records.iter().any(|r| r.id() == id) {
                next.selected_ids.insert(id.clone());
            }
        }
        TableAction::ToggleSelectAllOnPage => {
            let ids = page_ids(records, columns, state);
            if !ids.is_empty() {
                if ids.iter().all(|id| next.selected_ids.contains(id)) {
                    for id in &ids {
                        next.selected_ids.remove(id);
                    }
                } else {
                    next.selected_ids.extend(ids);
                }
            }
        }
        TableAction::ClearSelection => {
            next.selected_ids.clear();
        }
        TableAction::SetPageIndex(index) => {
            next.page_index = *index;
        }
        TableAction::NextPage => {
            let filtered = filter_indices(records, columns, &next.filter_text).len();
            if next.page_index + 1 < page_count(filtered, next.page_size) {
                next.page_index += 1;
            }
        }
        TableAction::PreviousPage => {
            next.page_index = next.page_index.saturating_sub(1);
        }
        TableAction::SetPageSize(size) => {
            if *size > 0 {
                // Keep the first visible row on the new page
                let first_visible = next.page_index * next.page_size;
                next.page_size = *size;
                next.page_index = first_visible / *size;
            }
        }
        TableAction::RecordsRemoved(ids) => {
            for id in ids {
                next.selected_ids.remove(id);
            }
        }
    }

    let filtered = filter_indices(records, columns, &next.filter_text).len();
    next.page_index = clamp_page_index(next.page_index, filtered, next.page_size);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pipeline::derive_page;
    use crate::model::test_support::{people, person, Person};

    struct Harness {
        records: Vec<Person>,
        columns: Vec<Column<Person>>,
        state: ViewState,
    }

    impl Harness {
        fn new(records: Vec<Person>) -> Self {
            let columns = Person::columns();
            let state = ViewState::new(&columns, DEFAULT_PAGE_SIZE);
            Self {
                records,
                columns,
                state,
            }
        }

        fn apply(&mut self, action: TableAction) -> &ViewState {
            self.state = reduce(&self.state, &action, &self.records, &self.columns);
            self.assert_page_in_range();
            &self.state
        }

        fn visible_ids(&self) -> Vec<String> {
            derive_page(&self.records, &self.columns, &self.state)
                .rows
                .into_iter()
                .map(|r| r.id)
                .collect()
        }

        fn assert_page_in_range(&self) {
            let filtered =
                filter_indices(&self.records, &self.columns, &self.state.filter_text).len();
            assert!(self.state.page_index < page_count(filtered, self.state.page_size));
        }
    }

    #[test]
    fn test_defaults() {
        let h = Harness::new(people(3));
        assert_eq!(h.state.page_index, 0);
        assert_eq!(h.state.page_size, 10);
        assert!(h.state.filter_text.is_empty());
        assert!(h.state.sort_key.is_none());
        assert!(h.state.selected_ids.is_empty());
        assert_eq!(h.state.visible_columns.len(), h.columns.len());
    }

    #[test]
    fn test_filter_john() {
        let mut h = Harness::new(vec![person("1", "John Doe", 40), person("2", "Jane Smith", 31)]);
        h.apply(TableAction::SetFilterText("john".to_string()));
        assert_eq!(h.visible_ids(), vec!["1"]);
    }

    #[test]
    fn test_filter_resets_page_and_is_idempotent() {
        let mut h = Harness::new(people(25));
        h.apply(TableAction::SetPageIndex(2));
        h.apply(TableAction::SetFilterText("person 1".to_string()));
        assert_eq!(h.state.page_index, 0);
        let once = h.visible_ids();

        h.apply(TableAction::SetFilterText("person 1".to_string()));
        assert_eq!(h.visible_ids(), once);
        assert_eq!(once.len(), 10);

        h.apply(TableAction::SetFilterText(String::new()));
        assert_eq!(
            filter_indices(&h.records, &h.columns, &h.state.filter_text).len(),
            25
        );
    }

    #[test]
    fn test_next_page_clamps_at_last_page() {
        let mut h = Harness::new(people(25));
        let seen: Vec<usize> = (0..3)
            .map(|_| h.apply(TableAction::NextPage).page_index)
            .collect();
        assert_eq!(seen, vec![1, 2, 2]);

        h.apply(TableAction::PreviousPage);
        h.apply(TableAction::PreviousPage);
        h.apply(TableAction::PreviousPage);
        assert_eq!(h.state.page_index, 0);
    }

    #[test]
    fn test_set_page_index_is_clamped() {
        let mut h = Harness::new(people(25));
        h.apply(TableAction::SetPageIndex(99));
        assert_eq!(h.state.page_index, 2);
    }

    #[test]
    fn test_page_size_keeps_first_visible_row() {
        let mut h = Harness::new(people(25));
        h.apply(TableAction::SetPageIndex(2)); // rows 21..25
        h.apply(TableAction::SetPageSize(5));
        assert_eq!(h.state.page_index, 4);
        assert_eq!(h.visible_ids()[0], "p-21");

        h.apply(TableAction::SetPageSize(50));
        assert_eq!(h.state.page_index, 0);

        // Zero is rejected
        h.apply(TableAction::SetPageSize(0));
        assert_eq!(h.state.page_size, 50);
    }

    #[test]
    fn test_page_size_overflow_is_clamped() {
        let mut h = Harness::new(people(12));
        h.apply(TableAction::SetPageSize(1));
        h.apply(TableAction::SetPageIndex(11));
        h.apply(TableAction::SetPageSize(10));
        assert_eq!(h.state.page_index, 1);
    }

    #[test]
    fn test_toggle_sort_cycles_two_states() {
        let mut h = Harness::new(people(5));
        h.apply(TableAction::ToggleSort("age"));
        assert_eq!(h.state.sort_key, Some("age"));
        assert_eq!(h.state.sort_direction, SortDirection::Ascending);
        let asc = h.visible_ids();

        h.apply(TableAction::ToggleSort("age"));
        assert_eq!(h.state.sort_direction, SortDirection::Descending);
        let mut desc = h.visible_ids();
        desc.reverse();
        assert_eq!(desc, asc);

        h.apply(TableAction::ToggleSort("age"));
        assert_eq!(h.state.sort_direction, SortDirection::Ascending);

        // New column starts ascending
        h.apply(TableAction::ToggleSort("age"));
        h.apply(TableAction::ToggleSort("name"));
        assert_eq!(h.state.sort_key, Some("name"));
        assert_eq!(h.state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_second_sort_leaves_no_residual_order() {
        let records = vec![
            person("1", "Bea", 30),
            person("2", "Abe", 20),
            person("3", "Cal", 10),
        ];
        let mut h = Harness::new(records);
        h.apply(TableAction::ToggleSort("age"));
        assert_eq!(h.visible_ids(), vec!["3", "2", "1"]);
        h.apply(TableAction::ToggleSort("name"));
        assert_eq!(h.visible_ids(), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_unsortable_column_is_ignored() {
        let mut h = Harness::new(people(3));
        h.apply(TableAction::ToggleSort("select"));
        h.apply(TableAction::ToggleSort("unknown"));
        assert!(h.state.sort_key.is_none());
    }

    #[test]
    fn test_column_visibility_round_trip() {
        let mut h = Harness::new(people(3));
        let before = h.state.visible_columns.clone();
        h.apply(TableAction::ToggleColumnVisibility("age"));
        assert!(!h.state.is_visible("age"));
        h.apply(TableAction::ToggleColumnVisibility("age"));
        assert_eq!(h.state.visible_columns, before);
    }

    #[test]
    fn test_synthetic_and_pinned_columns_never_hide() {
        let mut h = Harness::new(people(3));
        h.apply(TableAction::ToggleColumnVisibility("select"));
        h.apply(TableAction::ToggleColumnVisibility("actions"));
        h.apply(TableAction::ToggleColumnVisibility("id"));
        assert!(h.state.is_visible("select"));
        assert!(h.state.is_visible("actions"));
        assert!(h.state.is_visible("id"));
    }

    #[test]
    fn test_pinned_column_keeps_table_meaningful() {
        let mut h = Harness::new(people(3));
        h.apply(TableAction::ToggleColumnVisibility("name"));
        h.apply(TableAction::ToggleColumnVisibility("age"));
        // "id" is pinned, so hiding both hideable data columns is allowed
        assert!(!h.state.is_visible("name"));
        assert!(!h.state.is_visible("age"));
        assert!(h.state.is_visible("id"));
    }

    #[test]
    fn test_row_selection_only_accepts_known_ids() {
        let mut h = Harness::new(people(3));
        h.apply(TableAction::ToggleRowSelection("p-2".to_string()));
        h.apply(TableAction::ToggleRowSelection("ghost".to_string()));
        assert_eq!(h.state.selected_ids.len(), 1);
        assert!(h.state.is_selected("p-2"));

        h.apply(TableAction::ToggleRowSelection("p-2".to_string()));
        assert!(h.state.selected_ids.is_empty());
    }

    #[test]
    fn test_select_all_is_page_scoped() {
        let mut h = Harness::new(people(25));
        h.apply(TableAction::ToggleSelectAllOnPage);
        assert_eq!(h.state.selected_ids.len(), 10);
        let page: BTreeSet<String> = h.visible_ids().into_iter().collect();
        assert_eq!(h.state.selected_ids, page);

        // Selection survives paging; the next page selects its own ten
        h.apply(TableAction::NextPage);
        h.apply(TableAction::ToggleSelectAllOnPage);
        assert_eq!(h.state.selected_ids.len(), 20);

        // All on page selected: toggling again deselects only this page
        h.apply(TableAction::ToggleSelectAllOnPage);
        assert_eq!(h.state.selected_ids.len(), 10);
    }

    #[test]
    fn test_select_all_with_partial_page_selection_completes_it() {
        let mut h = Harness::new(people(5));
        h.apply(TableAction::ToggleRowSelection("p-1".to_string()));
        h.apply(TableAction::ToggleSelectAllOnPage);
        assert_eq!(h.state.selected_ids.len(), 5);
    }

    #[test]
    fn test_select_all_on_empty_page_is_noop() {
        let mut h = Harness::new(people(5));
        h.apply(TableAction::SetFilterText("nobody".to_string()));
        h.apply(TableAction::ToggleSelectAllOnPage);
        assert!(h.state.selected_ids.is_empty());
    }

    #[test]
    fn test_records_removed_purges_selection_and_clamps() {
        let mut h = Harness::new(people(11));
        h.apply(TableAction::NextPage);
        h.apply(TableAction::ToggleRowSelection("p-11".to_string()));
        h.apply(TableAction::ToggleRowSelection("p-3".to_string()));

        h.records.retain(|p| p.id != "p-11");
        h.apply(TableAction::RecordsRemoved(vec!["p-11".to_string()]));
        assert!(!h.state.is_selected("p-11"));
        assert!(h.state.is_selected("p-3"));
        assert_eq!(h.state.page_index, 0);
    }

    #[test]
    fn test_page_bound_holds_for_action_sequence() {
        let mut h = Harness::new(people(23));
        let actions = vec![
            TableAction::SetPageSize(5),
            TableAction::NextPage,
            TableAction::NextPage,
            TableAction::NextPage,
            TableAction::NextPage,
            TableAction::NextPage,
            TableAction::SetFilterText("2".to_string()),
            TableAction::NextPage,
            TableAction::SetPageSize(3),
            TableAction::SetPageIndex(100),
            TableAction::SetFilterText("zz".to_string()),
            TableAction::PreviousPage,
            TableAction::NextPage,
        ];
        for action in actions {
            h.apply(action);
        }
        assert_eq!(h.state.page_index, 0);
    }
}
