//! Model layer
//!
//! - `TableView` - one dataset with its columns and view state
//! - `FormSchema` / `FormState` - create and edit forms
//! - `records` - the record families behind each screen
//! - `Router` and `ModalStack` - navigation and overlays

pub mod column;
pub mod derived;
pub mod form;
pub mod mock_data;
pub mod modal;
pub mod pipeline;
pub mod record;
pub mod records;
pub mod router;
pub mod table_view;
pub mod ui;
pub mod value;
pub mod view_state;

#[cfg(test)]
pub(crate) mod test_support;
