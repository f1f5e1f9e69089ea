//! Tabular data view: one dataset, its column table and its view state

use super::column::Column;
use super::pipeline::{self, PageView};
use super::record::TableRecord;
use super::view_state::{reduce, TableAction, ViewState};
use std::collections::HashSet;
use tracing::debug;

pub struct TableView<R: TableRecord> {
    records: Vec<R>,
    columns: Vec<Column<R>>,
    state: ViewState,
}

impl<R: TableRecord> TableView<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        let columns = R::columns();
        let state = ViewState::new(&columns, page_size);
        Self {
            records,
            columns,
            state,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Replace the state with the reducer's output
    pub fn dispatch(&mut self, action: TableAction) {
        debug!(?action, "table action");
        self.state = reduce(&self.state, &action, &self.records, &self.columns);
    }

    /// Current page, recomputed from scratch
    pub fn page(&self) -> PageView {
        pipeline::derive_page(&self.records, &self.columns, &self.state)
    }

    pub fn page_ids(&self) -> Vec<String> {
        pipeline::page_ids(&self.records, &self.columns, &self.state)
    }

    /// Ids currently selected, in dataset order
    pub fn selected_ids(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| self.state.is_selected(r.id()))
            .map(|r| r.id().to_string())
            .collect()
    }

    /// Remove records by id and purge them from the selection
    ///
    /// Returns the ids that were actually present.
    pub fn remove(&mut self, ids: &[String]) -> Vec<String> {
        let targets: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let mut removed = Vec::new();
        self.records.retain(|r| {
            if targets.contains(r.id()) {
                removed.push(r.id().to_string());
                false
            } else {
                true
            }
        });
        // Purge every requested id, present or not, so stale selections go too
        self.dispatch(TableAction::RecordsRemoved(ids.to_vec()));
        removed
    }

    pub fn delete_one(&mut self, id: &str) -> Vec<String> {
        self.remove(&[id.to_string()])
    }

    pub fn delete_selected(&mut self) -> Vec<String> {
        let ids = self.selected_ids();
        self.remove(&ids)
    }

    /// Add a newly created record at the top of the dataset
    pub fn insert(&mut self, record: R) {
        self.records.insert(0, record);
        // Re-run the reducer so paging stays consistent
        self.dispatch(TableAction::SetPageIndex(self.state.page_index));
    }

    /// Replace an existing record in place; false if the id is unknown
    pub fn replace(&mut self, record: R) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                self.dispatch(TableAction::SetPageIndex(self.state.page_index));
                true
            }
            None => false,
        }
    }
}
