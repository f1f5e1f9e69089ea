//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod column_picker;
pub mod confirm_dialog;
pub mod data_table;
pub mod form_view;
pub mod help_dialog;
pub mod layout;
pub mod list_screen;
pub mod page_size_dialog;
pub mod record_detail;

#[cfg(test)]
pub mod test_util;

pub use column_picker::ColumnPickerDialog;
pub use confirm_dialog::{ConfirmDialog, ConfirmKind};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use list_screen::ListScreen;
pub use page_size_dialog::PageSizeDialog;
pub use record_detail::RecordDetailDialog;
