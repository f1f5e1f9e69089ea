//! List screen for one record family
//!
//! Owns the family's `TableView` and, while a create or edit route is
//! active, its form. The App sees it only through the `Screen` trait.

use crate::action::Action;
use crate::component::{ColumnOption, Component, Screen};
use crate::components::data_table::{draw_data_table, pagination_summary};
use crate::components::form_view::{draw_form, FormContext};
use crate::components::layout::calculate_list_layout;
use crate::model::column::ColumnKind;
use crate::model::form::{FormSchema, FormState};
use crate::model::record::{record_details, FormRecord};
use crate::model::router::Route;
use crate::model::table_view::TableView;
use crate::model::ui::ScreenKind;
use crate::model::view_state::TableAction;
use crate::services::{MutationRequest, SubmissionError, Ticket};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

enum Mode {
    List,
    Form {
        /// Id of the record being edited, `None` on create
        editing: Option<String>,
        state: FormState,
        /// Outstanding submission of this form
        ticket: Option<Ticket>,
    },
}

/// Record built by a submit, applied once the sink acknowledges it
struct PendingSubmission<R> {
    editing: Option<String>,
    record: R,
}

pub struct ListScreen<R: FormRecord> {
    table: TableView<R>,
    schema: FormSchema,
    mode: Mode,
    pending: HashMap<Ticket, PendingSubmission<R>>,
    /// Highlighted row within the current page
    cursor: usize,
    /// Index into the visible data columns
    focused_column: usize,
    filter_mode: bool,
}

impl<R: FormRecord + Serialize> ListScreen<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        Self {
            table: TableView::new(records, page_size),
            schema: R::form_schema(),
            mode: Mode::List,
            pending: HashMap::new(),
            cursor: 0,
            focused_column: 0,
            filter_mode: false,
        }
    }

    pub fn table(&self) -> &TableView<R> {
        &self.table
    }

    pub fn form_state(&self) -> Option<&FormState> {
        match &self.mode {
            Mode::Form { state, .. } => Some(state),
            Mode::List => None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn visible_data_keys(&self) -> Vec<&'static str> {
        self.table
            .columns()
            .iter()
            .filter(|c| c.kind == ColumnKind::Data && self.table.state().is_visible(c.key))
            .map(|c| c.key)
            .collect()
    }

    pub fn focused_key(&self) -> Option<&'static str> {
        let keys = self.visible_data_keys();
        keys.get(self.focused_column.min(keys.len().saturating_sub(1)))
            .copied()
    }

    /// Id under the cursor, `None` on an empty page
    pub fn current_id(&self) -> Option<String> {
        self.table.page_ids().get(self.cursor).cloned()
    }

    fn clamp_cursor(&mut self) {
        let rows = self.table.page_ids().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Next free id with this family's prefix
    fn next_id(&self) -> String {
        let prefix = R::SCREEN.id_prefix();
        let highest = self
            .table
            .records()
            .iter()
            .filter_map(|r| {
                r.id()
                    .strip_prefix(prefix)?
                    .strip_prefix('-')?
                    .parse::<u32>()
                    .ok()
            })
            .max()
            .unwrap_or(0);
        format!("{}-{:03}", prefix, highest + 1)
    }

    fn list_key(&self, key: KeyEvent) -> Option<Action> {
        let current = self.current_id();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Char('n') | KeyCode::Right => Some(Action::Table(TableAction::NextPage)),
            KeyCode::Char('p') | KeyCode::Left => Some(Action::Table(TableAction::PreviousPage)),
            KeyCode::Char('h') => Some(Action::FocusPrevColumn),
            KeyCode::Char('l') => Some(Action::FocusNextColumn),
            KeyCode::Char('s') => self
                .focused_key()
                .map(|k| Action::Table(TableAction::ToggleSort(k))),
            KeyCode::Char(' ') => {
                current.map(|id| Action::Table(TableAction::ToggleRowSelection(id)))
            }
            KeyCode::Char('a') => {
                current.map(|_| Action::Table(TableAction::ToggleSelectAllOnPage))
            }
            KeyCode::Char('/') => Some(Action::EnterFilterMode),
            KeyCode::Char('c') => Some(Action::OpenColumnPicker),
            KeyCode::Char('z') => Some(Action::OpenPageSizePicker),
            KeyCode::Char('d') => current.map(|id| Action::RequestDelete(vec![id])),
            KeyCode::Char('D') => {
                let selected = self.table.selected_ids();
                (!selected.is_empty()).then_some(Action::RequestDelete(selected))
            }
            KeyCode::Enter => current.map(Action::OpenDetail),
            KeyCode::Char('e') => current.map(|id| Action::Navigate(Route::Edit(R::SCREEN, id))),
            KeyCode::Char('N') => Some(Action::Navigate(Route::Create(R::SCREEN))),
            KeyCode::Tab => Some(Action::NextScreen),
            KeyCode::BackTab => Some(Action::PrevScreen),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Esc => {
                let state = self.table.state();
                if !state.selected_ids.is_empty() {
                    Some(Action::Table(TableAction::ClearSelection))
                } else if !state.filter_text.is_empty() {
                    Some(Action::Table(TableAction::SetFilterText(String::new())))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn filter_key(&self, key: KeyEvent) -> Option<Action> {
        let text = &self.table.state().filter_text;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::ExitFilterMode),
            KeyCode::Backspace => {
                let mut next = text.clone();
                next.pop();
                Some(Action::Table(TableAction::SetFilterText(next)))
            }
            KeyCode::Char(c) => Some(Action::Table(TableAction::SetFilterText(format!(
                "{}{}",
                text, c
            )))),
            _ => None,
        }
    }

    fn form_key(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
            KeyCode::Left => Some(Action::FormCycleChoice(false)),
            KeyCode::Right => Some(Action::FormCycleChoice(true)),
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) => Some(Action::FormInput(c)),
            _ => None,
        }
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let layout = calculate_list_layout(area);
        let state = self.table.state();

        let filter_line = if self.filter_mode {
            Line::from(vec![
                Span::styled(" Filter: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{}▏", state.filter_text),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ])
        } else if state.filter_text.is_empty() {
            Line::from(Span::styled(
                " Press / to filter",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Filter: ", Style::default().fg(Color::DarkGray)),
                Span::styled(state.filter_text.clone(), Style::default().fg(Color::Cyan)),
            ])
        };
        let border = if self.filter_mode {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        frame.render_widget(
            Paragraph::new(filter_line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            ),
            layout.filter,
        );

        let page = self.table.page();
        draw_data_table(
            frame,
            layout.table,
            R::SCREEN.name(),
            &page,
            self.cursor,
            self.focused_key(),
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", pagination_summary(&page)),
                Style::default().fg(Color::Yellow),
            )),
            layout.footer,
        );
    }
}

impl<R: FormRecord + Serialize> Component for ListScreen<R> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match &self.mode {
            Mode::Form { .. } => Self::form_key(key),
            Mode::List if self.filter_mode => self.filter_key(key),
            Mode::List => self.list_key(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Table(table_action) => {
                let before = self.table.state().page_index;
                self.table.dispatch(table_action);
                if self.table.state().page_index != before {
                    self.cursor = 0;
                }
                self.clamp_cursor();
            }
            Action::CursorDown => {
                let rows = self.table.page_ids().len();
                if self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }
            Action::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::FocusNextColumn => {
                let count = self.visible_data_keys().len();
                if self.focused_column + 1 < count {
                    self.focused_column += 1;
                }
            }
            Action::FocusPrevColumn => {
                self.focused_column = self.focused_column.saturating_sub(1);
            }
            Action::EnterFilterMode => self.filter_mode = true,
            Action::ExitFilterMode => self.filter_mode = false,
            Action::FormInput(c) => {
                if let Mode::Form { state, .. } = &mut self.mode {
                    state.input(&self.schema, c);
                }
            }
            Action::FormBackspace => {
                if let Mode::Form { state, .. } = &mut self.mode {
                    state.backspace(&self.schema);
                }
            }
            Action::FormNextField => {
                if let Mode::Form { state, .. } = &mut self.mode {
                    state.focus_next(&self.schema);
                }
            }
            Action::FormPrevField => {
                if let Mode::Form { state, .. } = &mut self.mode {
                    state.focus_prev(&self.schema);
                }
            }
            Action::FormCycleChoice(forward) => {
                if let Mode::Form { state, .. } = &mut self.mode {
                    state.cycle_choice(&self.schema, forward);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match &self.mode {
            Mode::List => self.draw_list(frame, area),
            Mode::Form { editing, state, .. } => {
                let derived = R::derived_fields(&state.values);
                let context = FormContext {
                    title: self.schema.title,
                    editing: editing.as_deref(),
                    derived: &derived,
                };
                draw_form(frame, area, &self.schema, state, &context);
            }
        }
        Ok(())
    }
}

impl<R: FormRecord + Serialize> Screen for ListScreen<R> {
    fn kind(&self) -> ScreenKind {
        R::SCREEN
    }

    fn show(&mut self, route: &Route) -> bool {
        self.filter_mode = false;
        match route {
            Route::List(_) => {
                self.mode = Mode::List;
                self.clamp_cursor();
                true
            }
            Route::Create(_) => {
                self.mode = Mode::Form {
                    editing: None,
                    state: FormState::new(self.schema.blank_values()),
                    ticket: None,
                };
                true
            }
            Route::Edit(_, id) => match self.table.get(id) {
                Some(record) => {
                    self.mode = Mode::Form {
                        editing: Some(id.clone()),
                        state: FormState::new(record.to_form()),
                        ticket: None,
                    };
                    true
                }
                None => false,
            },
        }
    }

    fn captures_text(&self) -> bool {
        self.filter_mode || matches!(self.mode, Mode::Form { .. })
    }

    fn page_size(&self) -> usize {
        self.table.state().page_size
    }

    fn column_options(&self) -> Vec<ColumnOption> {
        self.table
            .columns()
            .iter()
            .filter(|c| c.kind == ColumnKind::Data)
            .map(|c| ColumnOption {
                key: c.key,
                label: c.label,
                visible: self.table.state().is_visible(c.key),
                hideable: c.hideable,
            })
            .collect()
    }

    fn record_details(&self, id: &str) -> Option<Vec<(String, String)>> {
        self.table.get(id).map(record_details)
    }

    fn delete_request(&self, ids: Vec<String>) -> MutationRequest {
        MutationRequest::Delete {
            screen: R::SCREEN,
            ids,
        }
    }

    fn remove_records(&mut self, ids: &[String]) -> Vec<String> {
        let removed = match ids {
            [id] => self.table.delete_one(id),
            _ if ids == self.table.selected_ids().as_slice() => self.table.delete_selected(),
            _ => self.table.remove(ids),
        };
        self.clamp_cursor();
        info!(screen = R::SCREEN.name(), count = removed.len(), "records removed");
        removed
    }

    fn submit_form(
        &mut self,
        spawn: &mut dyn FnMut(MutationRequest) -> Ticket,
    ) -> Option<Result<Ticket, SubmissionError>> {
        let next_id = self.next_id();
        let Mode::Form {
            editing,
            state,
            ticket,
        } = &mut self.mode
        else {
            return None;
        };

        let valid = state.begin_submit(&self.schema)?;
        let id = editing.clone().unwrap_or(next_id);

        let record = match R::from_form(id.clone(), &valid) {
            Ok(record) => record,
            Err(errors) => {
                state.finish_submit(false);
                state.errors = errors.into_iter().map(|e| (e.field, e.message)).collect();
                return None;
            }
        };

        let value = match serde_json::to_value(&record) {
            Ok(value) => value,
            Err(e) => {
                state.finish_submit(false);
                return Some(Err(SubmissionError::Encode(e.to_string())));
            }
        };

        let request = match editing {
            Some(existing) => MutationRequest::Update {
                screen: R::SCREEN,
                id: existing.clone(),
                record: value,
            },
            None => MutationRequest::Create {
                screen: R::SCREEN,
                record: value,
            },
        };

        let issued = spawn(request);
        debug!(screen = R::SCREEN.name(), id = %id, ticket = issued.0, "form submitted");
        *ticket = Some(issued);
        self.pending.insert(
            issued,
            PendingSubmission {
                editing: editing.clone(),
                record,
            },
        );
        Some(Ok(issued))
    }

    fn complete_submission(
        &mut self,
        ticket: Ticket,
        result: &Result<(), SubmissionError>,
    ) -> bool {
        let pending = self.pending.remove(&ticket);
        let succeeded = result.is_ok();

        if let (true, Some(pending)) = (succeeded, pending) {
            match pending.editing {
                Some(_) => {
                    self.table.replace(pending.record);
                }
                None => {
                    self.table.insert(pending.record);
                }
            }
        }

        match &mut self.mode {
            Mode::Form {
                state,
                ticket: waiting,
                ..
            } if *waiting == Some(ticket) => {
                *waiting = None;
                state.finish_submit(succeeded);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::FormStatus;
    use crate::model::records::StaffMember;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> ListScreen<StaffMember> {
        ListScreen::new(StaffMember::mock(), 10)
    }

    /// Feed a key through handle_key_event and update, like the App does
    fn press(screen: &mut ListScreen<StaffMember>, code: KeyCode) -> Option<Action> {
        let action = screen.handle_key_event(key(code)).unwrap()?;
        screen.update(action.clone()).unwrap();
        Some(action)
    }

    /// Submit the open form, recording what would have been sent
    fn submit(
        screen: &mut ListScreen<StaffMember>,
        sent: &mut Vec<MutationRequest>,
    ) -> Option<Result<Ticket, SubmissionError>> {
        screen.submit_form(&mut |request| {
            sent.push(request);
            Ticket(sent.len() as u64)
        })
    }

    fn type_text(screen: &mut ListScreen<StaffMember>, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_paging_keys_reset_cursor() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('j'));
        press(&mut screen, KeyCode::Char('j'));
        assert_eq!(screen.cursor(), 2);

        press(&mut screen, KeyCode::Char('n'));
        assert_eq!(screen.table().state().page_index, 1);
        assert_eq!(screen.cursor(), 0);

        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.table().state().page_index, 2);
        assert_eq!(screen.table().page().rows.len(), 5);
    }

    #[test]
    fn test_row_keys_emit_actions() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::RequestDelete(vec!["STF-001".to_string()]))
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::OpenDetail("STF-001".to_string()))
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('e'))).unwrap(),
            Some(Action::Navigate(Route::Edit(ScreenKind::Staff, "STF-001".to_string())))
        );
        // Nothing selected yet
        assert_eq!(screen.handle_key_event(key(KeyCode::Char('D'))).unwrap(), None);

        press(&mut screen, KeyCode::Char('a'));
        assert_eq!(screen.table().selected_ids().len(), 10);
        match screen.handle_key_event(key(KeyCode::Char('D'))).unwrap() {
            Some(Action::RequestDelete(ids)) => assert_eq!(ids.len(), 10),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_filter_mode_captures_typing() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('/'));
        assert!(screen.captures_text());

        let name = StaffMember::mock()[4].name.clone();
        type_text(&mut screen, &name.to_uppercase());
        assert_eq!(screen.table().state().filter_text, name.to_uppercase());
        assert!(screen.table().page().rows.iter().any(|r| r.id == "STF-005"));

        press(&mut screen, KeyCode::Enter);
        assert!(!screen.captures_text());

        // 'q' is a normal key again, Esc clears the filter
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::OpenQuitDialog)
        );
        press(&mut screen, KeyCode::Esc);
        assert_eq!(screen.table().state().filter_text, "");
    }

    #[test]
    fn test_empty_page_disables_row_actions() {
        let mut screen = screen();
        screen
            .update(Action::Table(TableAction::SetFilterText("no such person".into())))
            .unwrap();
        assert!(screen.current_id().is_none());
        assert_eq!(screen.handle_key_event(key(KeyCode::Char(' '))).unwrap(), None);
        assert_eq!(screen.handle_key_event(key(KeyCode::Char('a'))).unwrap(), None);
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
    }

    #[test]
    fn test_sort_focused_column() {
        let mut screen = screen();
        assert_eq!(screen.focused_key(), Some("id"));
        press(&mut screen, KeyCode::Char('l'));
        assert_eq!(screen.focused_key(), Some("name"));
        press(&mut screen, KeyCode::Char('s'));
        assert_eq!(screen.table().state().sort_key, Some("name"));
    }

    #[test]
    fn test_create_flow() {
        let mut screen = screen();
        assert!(screen.show(&Route::Create(ScreenKind::Staff)));
        assert!(screen.captures_text());

        type_text(&mut screen, "Grace Hopper");
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "Teacher");
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "grace@school.example.org");
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "3000");
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "2024-09-01");

        let mut sent = Vec::new();
        let ticket = submit(&mut screen, &mut sent).unwrap().unwrap();
        assert!(matches!(
            sent[0],
            MutationRequest::Create {
                screen: ScreenKind::Staff,
                ..
            }
        ));
        assert_eq!(screen.form_state().map(|s| s.status), Some(FormStatus::Submitting));

        // Submit is disabled while the first one is outstanding
        assert!(submit(&mut screen, &mut sent).is_none());
        assert_eq!(sent.len(), 1);

        assert!(screen.complete_submission(ticket, &Ok(())));
        assert_eq!(screen.table().records().len(), 26);
        assert_eq!(screen.table().records()[0].id, "STF-026");
        assert_eq!(screen.table().records()[0].net_salary(), 3000.0);
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        let mut screen = screen();
        screen.show(&Route::Create(ScreenKind::Staff));
        let mut sent = Vec::new();
        assert!(submit(&mut screen, &mut sent).is_none());
        assert!(sent.is_empty());

        let state = screen.form_state().unwrap();
        assert_eq!(state.status, FormStatus::Idle);
        assert_eq!(state.errors.get("name").map(String::as_str), Some("Name is required"));
    }

    #[test]
    fn test_edit_flow_and_failure() {
        let mut screen = screen();
        assert!(!screen.show(&Route::Edit(ScreenKind::Staff, "STF-999".into())));
        assert!(screen.show(&Route::Edit(ScreenKind::Staff, "STF-002".into())));

        // Append to the name field
        type_text(&mut screen, " Jr");
        let mut sent = Vec::new();
        let ticket = submit(&mut screen, &mut sent).unwrap().unwrap();
        match &sent[0] {
            MutationRequest::Update { id, record, .. } => {
                assert_eq!(id, "STF-002");
                assert!(record["name"].as_str().unwrap().ends_with(" Jr"));
            }
            other => panic!("unexpected {:?}", other),
        }

        // A rejection leaves the dataset untouched and the values intact
        assert!(screen.complete_submission(ticket, &Err(SubmissionError::Rejected("no".into()))));
        let state = screen.form_state().unwrap();
        assert_eq!(state.status, FormStatus::Idle);
        assert!(state.values["name"].ends_with(" Jr"));
        assert!(!screen.table().get("STF-002").unwrap().name.ends_with(" Jr"));

        // Retry succeeds and replaces in place
        let retry = submit(&mut screen, &mut sent).unwrap().unwrap();
        assert_ne!(retry, ticket);
        screen.complete_submission(retry, &Ok(()));
        assert!(screen.table().get("STF-002").unwrap().name.ends_with(" Jr"));
        assert_eq!(screen.table().records().len(), 25);
    }

    #[test]
    fn test_column_options_and_details() {
        let screen = screen();
        let options = screen.column_options();
        let id = options.iter().find(|o| o.key == "id").unwrap();
        assert!(!id.hideable);
        assert!(options.iter().all(|o| o.visible));

        let details = screen.record_details("STF-001").unwrap();
        assert!(details.contains(&("Net Salary".to_string(), "2674.00".to_string())));
        assert!(screen.record_details("STF-999").is_none());
    }

    #[test]
    fn test_remove_records_clamps_cursor() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('n'));
        press(&mut screen, KeyCode::Char('n'));
        for _ in 0..4 {
            press(&mut screen, KeyCode::Char('j'));
        }
        assert_eq!(screen.cursor(), 4);

        let ids: Vec<String> = (21..=25).map(|i| format!("STF-{:03}", i)).collect();
        let removed = screen.remove_records(&ids);
        assert_eq!(removed.len(), 5);
        assert_eq!(screen.table().state().page_index, 1);
        assert!(screen.cursor() < 10);
        assert_eq!(screen.delete_request(ids.clone()), MutationRequest::Delete {
            screen: ScreenKind::Staff,
            ids,
        });
    }

    #[test]
    fn test_results_follow_their_own_submission() {
        let mut screen = screen();
        let mut sent = Vec::new();

        // Edit STF-001 and leave while the save is outstanding
        screen.show(&Route::Edit(ScreenKind::Staff, "STF-001".into()));
        type_text(&mut screen, " X");
        let first = submit(&mut screen, &mut sent).unwrap().unwrap();
        screen.show(&Route::List(ScreenKind::Staff));

        // A second form submits independently
        screen.show(&Route::Edit(ScreenKind::Staff, "STF-002".into()));
        type_text(&mut screen, " Y");
        let second = submit(&mut screen, &mut sent).unwrap().unwrap();
        assert_eq!(sent.len(), 2);

        // The first ack belongs to a form that is no longer open
        assert!(!screen.complete_submission(first, &Ok(())));
        assert!(screen.table().get("STF-001").unwrap().name.ends_with(" X"));
        assert_eq!(screen.form_state().map(|s| s.status), Some(FormStatus::Submitting));

        // The rejection of the second leaves STF-002 untouched
        assert!(screen.complete_submission(second, &Err(SubmissionError::Rejected("no".into()))));
        assert!(!screen.table().get("STF-002").unwrap().name.ends_with(" Y"));
        assert_eq!(screen.form_state().map(|s| s.status), Some(FormStatus::Idle));

        // Unknown tickets change nothing
        assert!(!screen.complete_submission(Ticket(99), &Ok(())));
        assert_eq!(screen.table().records().len(), 25);
    }

    #[test]
    fn test_acknowledged_deletes_purge_selection() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char(' '));
        press(&mut screen, KeyCode::Char('j'));
        press(&mut screen, KeyCode::Char(' '));
        let selected = screen.table().selected_ids();
        assert_eq!(selected, vec!["STF-001", "STF-002"]);

        assert_eq!(screen.remove_records(&selected), selected);
        assert!(screen.table().selected_ids().is_empty());
        assert_eq!(screen.table().records().len(), 23);

        press(&mut screen, KeyCode::Char(' '));
        let id = screen.current_id().unwrap();
        assert_eq!(screen.remove_records(&[id.clone()]), vec![id.clone()]);
        assert!(screen.table().get(&id).is_none());
        assert!(!screen.table().state().is_selected(&id));
    }
}
