//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

use crate::action::Action;
use crate::model::router::Route;
use crate::model::ui::ScreenKind;
use crate::services::{MutationRequest, SubmissionError, Ticket};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` - Convert events to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component
pub trait Component {
    /// Handle a key event, returning an optional Action
    ///
    /// The component should not modify state here - just return
    /// the appropriate Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// Can return a follow-up Action to be processed next.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}

/// Entry of the column picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOption {
    pub key: &'static str,
    pub label: &'static str,
    pub visible: bool,
    /// Pinned columns are listed but cannot be toggled
    pub hideable: bool,
}

/// A record family's screen: its list view and its create/edit form
///
/// Object safe so the App can hold screens of different record types.
pub trait Screen: Component {
    fn kind(&self) -> ScreenKind;

    /// Switch to the view for `route`; false if it names an unknown record
    fn show(&mut self, route: &Route) -> bool;

    /// True while typed characters belong to the screen (filter or form)
    fn captures_text(&self) -> bool;

    fn page_size(&self) -> usize;

    fn column_options(&self) -> Vec<ColumnOption>;

    /// Label/value pairs of one record
    fn record_details(&self, id: &str) -> Option<Vec<(String, String)>>;

    fn delete_request(&self, ids: Vec<String>) -> MutationRequest;

    /// Drop acknowledged deletions; returns the ids actually removed
    fn remove_records(&mut self, ids: &[String]) -> Vec<String>;

    /// Validate the open form and hand its request to `spawn`
    ///
    /// `None` when nothing was sent: no form open, a submission already
    /// outstanding, or validation failed.
    fn submit_form(
        &mut self,
        spawn: &mut dyn FnMut(MutationRequest) -> Ticket,
    ) -> Option<Result<Ticket, SubmissionError>>;

    /// Apply the sink's answer to the submission behind `ticket`
    ///
    /// Returns true when the open form was waiting on that ticket.
    fn complete_submission(
        &mut self,
        ticket: Ticket,
        result: &Result<(), SubmissionError>,
    ) -> bool;
}
