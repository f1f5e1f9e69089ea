//! Derived view pipeline
//!
//! Pure functions from (records, columns, view state) to the visible page:
//! filter, stable sort, paginate, render. Nothing here is cached; the page
//! is recomputed on every draw.

use super::column::{find_column, Column, ColumnKind};
use super::record::TableRecord;
use super::value::CellValue;
use super::view_state::{SortDirection, ViewState};
use std::ops::Range;

/// Checkbox glyphs for the select column
pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";
/// Text of the actions column
pub const ACTION_BUTTONS: &str = "view·edit·delete";

/// Whether any filterable column contains the (already lowercased) needle
pub fn matches_filter<R>(record: &R, columns: &[Column<R>], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .filter(|c| c.filterable && c.kind == ColumnKind::Data)
        .any(|c| c.value(record).display().to_lowercase().contains(needle))
}

/// Indices of records passing the filter, in dataset order
pub fn filter_indices<R>(records: &[R], columns: &[Column<R>], filter_text: &str) -> Vec<usize> {
    let needle = filter_text.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_filter(*r, columns, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of `indices` by one column
pub fn sort_indices<R>(
    indices: &mut Vec<usize>,
    records: &[R],
    column: &Column<R>,
    direction: SortDirection,
) {
    let mut keyed: Vec<(usize, CellValue)> = indices
        .iter()
        .map(|&i| (i, column.value(&records[i])))
        .collect();

    // `sort_by` is stable, and reversing the comparator (rather than the
    // output) keeps ties in dataset order for both directions.
    keyed.sort_by(|(_, a), (_, b)| match direction {
        SortDirection::Ascending => a.compare(b),
        SortDirection::Descending => b.compare(a),
    });

    *indices = keyed.into_iter().map(|(i, _)| i).collect();
}

/// Filtered and sorted record indices
pub fn ordered_indices<R>(records: &[R], columns: &[Column<R>], state: &ViewState) -> Vec<usize> {
    let mut indices = filter_indices(records, columns, &state.filter_text);
    if let Some(column) = state.sort_key.and_then(|key| find_column(columns, key)) {
        if column.sortable {
            sort_indices(&mut indices, records, column, state.sort_direction);
        }
    }
    indices
}

/// Number of pages; an empty result still has one (empty) page
pub fn page_count(filtered: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered.div_ceil(page_size).max(1)
}

/// Clamp a page index into `[0, page_count - 1]`
pub fn clamp_page_index(page_index: usize, filtered: usize, page_size: usize) -> usize {
    page_index.min(page_count(filtered, page_size) - 1)
}

/// Slice bounds of one page within `len` ordered rows
pub fn page_range(page_index: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page_index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Ids of the records on the current page, in display order
pub fn page_ids<R: TableRecord>(
    records: &[R],
    columns: &[Column<R>],
    state: &ViewState,
) -> Vec<String> {
    let ordered = ordered_indices(records, columns, state);
    ordered[page_range(state.page_index, state.page_size, ordered.len())]
        .iter()
        .map(|&i| records[i].id().to_string())
        .collect()
}

/// Header of one visible column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub width: u16,
    pub sortable: bool,
    /// Set on the column currently sorted
    pub sort: Option<SortDirection>,
}

/// One rendered row of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: String,
    pub selected: bool,
    /// Display strings, one per `PageView::headers` entry
    pub cells: Vec<String>,
}

/// Everything the renderer needs for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub selected_count: usize,
    pub all_on_page_selected: bool,
}

impl PageView {
    /// Zero matches: draw the "No results" row and disable selection
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based numbers of the first and last row shown, `(0, 0)` when empty
    pub fn row_span(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            return (0, 0);
        }
        let first = self.page_index * self.page_size + 1;
        (first, first + self.rows.len() - 1)
    }
}

/// Run the whole pipeline for one state
pub fn derive_page<R: TableRecord>(
    records: &[R],
    columns: &[Column<R>],
    state: &ViewState,
) -> PageView {
    let ordered = ordered_indices(records, columns, state);
    let filtered_count = ordered.len();
    let page_index = clamp_page_index(state.page_index, filtered_count, state.page_size);
    let range = page_range(page_index, state.page_size, filtered_count);

    let visible: Vec<&Column<R>> = columns
        .iter()
        .filter(|c| c.is_synthetic() || state.is_visible(c.key))
        .collect();

    let headers = visible
        .iter()
        .map(|c| HeaderCell {
            key: c.key,
            label: c.label,
            kind: c.kind,
            width: c.width,
            sortable: c.sortable,
            sort: (state.sort_key == Some(c.key)).then_some(state.sort_direction),
        })
        .collect();

    let rows: Vec<RenderedRow> = ordered[range]
        .iter()
        .map(|&i| {
            let record = &records[i];
            let selected = state.is_selected(record.id());
            let cells = visible
                .iter()
                .map(|c| match c.kind {
                    ColumnKind::Select => (if selected { CHECKED } else { UNCHECKED }).to_string(),
                    ColumnKind::Actions => ACTION_BUTTONS.to_string(),
                    ColumnKind::Data => c.value(record).display(),
                })
                .collect();
            RenderedRow {
                id: record.id().to_string(),
                selected,
                cells,
            }
        })
        .collect();

    let all_on_page_selected = !rows.is_empty() && rows.iter().all(|r| r.selected);

    PageView {
        headers,
        rows,
        total_count: records.len(),
        filtered_count,
        page_index,
        page_count: page_count(filtered_count, state.page_size),
        page_size: state.page_size,
        selected_count: state.selected_ids.len(),
        all_on_page_selected,
    }
}
