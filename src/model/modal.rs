//! Modal stack for overlays drawn above the current screen
//!
//! Only the top modal receives input. Closing a modal pops it and hands
//! input back to whatever is underneath.

/// A modal overlay
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Delete confirmation for one or more records
    ConfirmDelete { ids: Vec<String> },
    /// Column visibility checklist
    ColumnPicker { selected_index: usize },
    /// Page size choice
    PageSize { selected_index: usize },
    /// Read-only view of one record
    RecordDetail { id: String, scroll_offset: usize },
    /// Keyboard shortcuts
    Help { scroll_offset: usize },
    /// Quit confirmation
    QuitConfirm,
}

#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop every open modal, e.g. when switching screens
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Modals from bottom to top, in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}
