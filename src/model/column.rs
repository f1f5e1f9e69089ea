//! Column descriptors
//!
//! A column is static metadata plus a pure extractor function. Each record
//! type publishes its descriptor table through `TableRecord::columns`.

use super::value::CellValue;
use std::fmt;

/// Key of the synthetic checkbox column
pub const SELECT_KEY: &str = "select";
/// Key of the synthetic row actions column
pub const ACTIONS_KEY: &str = "actions";

/// What a column draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A record attribute (or a value derived from several)
    Data,
    /// Row selection checkbox
    Select,
    /// View / edit / delete buttons
    Actions,
}

/// Descriptor for one table column
pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub filterable: bool,
    pub hideable: bool,
    /// Preferred width in terminal cells
    pub width: u16,
    render: Option<fn(&R) -> CellValue>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("hideable", &self.hideable)
            .finish()
    }
}

impl<R> Column<R> {
    /// Data column: sortable, filterable and hideable by default
    pub fn data(key: &'static str, label: &'static str, render: fn(&R) -> CellValue) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Data,
            sortable: true,
            filterable: true,
            hideable: true,
            width: 16,
            render: Some(render),
        }
    }

    pub fn select() -> Self {
        Self {
            key: SELECT_KEY,
            label: "",
            kind: ColumnKind::Select,
            sortable: false,
            filterable: false,
            hideable: false,
            width: 3,
            render: None,
        }
    }

    pub fn actions() -> Self {
        Self {
            key: ACTIONS_KEY,
            label: "Actions",
            kind: ColumnKind::Actions,
            sortable: false,
            filterable: false,
            hideable: false,
            width: 16,
            render: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Keep the column on screen regardless of the column picker
    pub fn pinned(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn is_synthetic(&self) -> bool {
        self.kind != ColumnKind::Data
    }

    /// Cell value for a record; synthetic columns have none
    pub fn value(&self, record: &R) -> CellValue {
        match self.render {
            Some(render) => render(record),
            None => CellValue::Empty,
        }
    }
}

/// Find a column by key
pub fn find_column<'a, R>(columns: &'a [Column<R>], key: &str) -> Option<&'a Column<R>> {
    columns.iter().find(|c| c.key == key)
}
