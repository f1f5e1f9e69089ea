//! Action enum - All possible application actions
//!
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::router::Route;
use crate::model::view_state::TableAction;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; polls submissions and expires toasts
    Tick,
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextScreen,
    PrevScreen,
    Navigate(Route),
    Back,

    // ─────────────────────────────────────────────────────────────────────────
    // Table
    // ─────────────────────────────────────────────────────────────────────────
    /// A view state transition for the active table
    Table(TableAction),
    CursorDown,
    CursorUp,
    FocusNextColumn,
    FocusPrevColumn,
    EnterFilterMode,
    ExitFilterMode,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    OpenColumnPicker,
    OpenPageSizePicker,
    OpenDetail(String),
    /// Ask before deleting these ids
    RequestDelete(Vec<String>),
    /// Delete confirmed
    ConfirmDelete,
    /// Page size chosen in the picker
    ChoosePageSize(usize),
    CloseModal,
    ModalUp,
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    /// Cycle the focused choice field forward (true) or back
    FormCycleChoice(bool),
    SubmitForm,

    // ─────────────────────────────────────────────────────────────────────────
    // Feedback
    // ─────────────────────────────────────────────────────────────────────────
    ShowToast(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextScreen => write!(f, "NextScreen"),
            Action::PrevScreen => write!(f, "PrevScreen"),
            Action::Navigate(route) => write!(f, "Navigate({:?})", route),
            Action::Back => write!(f, "Back"),
            Action::Table(action) => write!(f, "Table({:?})", action),
            Action::CursorDown => write!(f, "CursorDown"),
            Action::CursorUp => write!(f, "CursorUp"),
            Action::FocusNextColumn => write!(f, "FocusNextColumn"),
            Action::FocusPrevColumn => write!(f, "FocusPrevColumn"),
            Action::EnterFilterMode => write!(f, "EnterFilterMode"),
            Action::ExitFilterMode => write!(f, "ExitFilterMode"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenColumnPicker => write!(f, "OpenColumnPicker"),
            Action::OpenPageSizePicker => write!(f, "OpenPageSizePicker"),
            Action::OpenDetail(id) => write!(f, "OpenDetail({})", id),
            Action::RequestDelete(ids) => write!(f, "RequestDelete({})", ids.join(", ")),
            Action::ConfirmDelete => write!(f, "ConfirmDelete"),
            Action::ChoosePageSize(n) => write!(f, "ChoosePageSize({})", n),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::FormInput(c) => write!(f, "FormInput('{}')", c),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::FormNextField => write!(f, "FormNextField"),
            Action::FormPrevField => write!(f, "FormPrevField"),
            Action::FormCycleChoice(forward) => write!(f, "FormCycleChoice({})", forward),
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::ShowToast(msg) => write!(f, "ShowToast({})", msg),
        }
    }
}
