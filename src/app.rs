//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to the active screen and the
//! modal on top of the stack. It routes submission results back to the
//! screen that sent them.

use crate::action::Action;
use crate::component::{Component, Screen};
use crate::components::{
    calculate_main_layout, ColumnPickerDialog, ConfirmDialog, ConfirmKind, HelpDialog,
    ListScreen, PageSizeDialog, RecordDetailDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::record::FormRecord;
use crate::model::records::{
    Admission, ExamResult, FeeEntry, LeaveType, LessonPlan, LibraryAsset, StaffMember,
    TransportAllocation,
};
use crate::model::router::{Route, Router};
use crate::model::ui::ScreenKind;
use crate::model::view_state::TableAction;
use crate::services::{Completion, MutationRequest, MutationSink, RecordSource, SubmissionRunner};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long a toast stays on the status line
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Transient message on the status line
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

/// Mount one record family: load its dataset and wrap it in a list screen
fn mount<R>(source: &RecordSource, page_size: usize, warnings: &mut Vec<String>) -> Box<dyn Screen>
where
    R: FormRecord + Serialize + DeserializeOwned + 'static,
{
    let (records, error) = source.load_or_mock::<R>();
    if let Some(err) = error {
        warnings.push(format!("{}: {}", R::SCREEN.name(), err));
    }
    Box::new(ListScreen::<R>::new(records, page_size))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// One screen per record family, in tab order
    screens: Vec<Box<dyn Screen>>,

    pub router: Router,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Background mutation requests
    runner: SubmissionRunner,

    pub config: Config,

    pub toast: Option<Toast>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    pub confirm_dialog: ConfirmDialog,
    pub column_picker: ColumnPickerDialog,
    pub page_size_dialog: PageSizeDialog,
    pub record_detail: RecordDetailDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(config: Config, sink: Arc<dyn MutationSink>) -> App {
        let source = RecordSource::from_data_dir(config.data_dir.clone());
        let page_size = config.default_page_size;
        let mut warnings = Vec::new();

        let screens = vec![
            mount::<LessonPlan>(&source, page_size, &mut warnings),
            mount::<Admission>(&source, page_size, &mut warnings),
            mount::<FeeEntry>(&source, page_size, &mut warnings),
            mount::<LeaveType>(&source, page_size, &mut warnings),
            mount::<LibraryAsset>(&source, page_size, &mut warnings),
            mount::<StaffMember>(&source, page_size, &mut warnings),
            mount::<TransportAllocation>(&source, page_size, &mut warnings),
            mount::<ExamResult>(&source, page_size, &mut warnings),
        ];
        info!(screens = screens.len(), page_size, "screens mounted");

        let toast = match warnings.len() {
            0 => None,
            1 => Some(Toast::new(format!("Using built-in data for {}", warnings[0]))),
            n => Some(Toast::new(format!(
                "{} data files could not be read, using built-in data (see log)",
                n
            ))),
        };

        let first = screens
            .first()
            .map(|s| s.kind())
            .unwrap_or(ScreenKind::LessonPlans);

        App {
            screens,
            router: Router::new(Route::List(first)),
            modals: ModalStack::new(),
            runner: SubmissionRunner::new(sink),
            page_size_dialog: PageSizeDialog::new(page_size),
            config,
            toast,
            should_quit: false,
            confirm_dialog: ConfirmDialog::default(),
            column_picker: ColumnPickerDialog::new(),
            record_detail: RecordDetailDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    fn screen_index(&self, kind: ScreenKind) -> usize {
        self.screens
            .iter()
            .position(|s| s.kind() == kind)
            .unwrap_or(0)
    }

    fn screen_mut(&mut self, kind: ScreenKind) -> &mut dyn Screen {
        let index = self.screen_index(kind);
        self.screens[index].as_mut()
    }

    pub fn active_kind(&self) -> ScreenKind {
        self.router.current().screen()
    }

    pub fn active_screen(&self) -> &dyn Screen {
        self.screens[self.screen_index(self.active_kind())].as_ref()
    }

    fn active_screen_mut(&mut self) -> &mut dyn Screen {
        self.screen_mut(self.active_kind())
    }

    /// Put the active screen into the view for the current route
    fn show_current(&mut self) -> bool {
        let route = self.router.current().clone();
        self.screen_mut(route.screen()).show(&route)
    }

    fn switch_screen(&mut self, forward: bool) {
        let count = self.screens.len();
        let index = self.screen_index(self.active_kind());
        let next = if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
        let kind = self.screens[next].kind();
        self.router.replace_root(Route::List(kind));
        self.show_current();
    }

    pub fn is_busy(&self) -> bool {
        self.runner.is_busy()
    }

    fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Apply every submission result that arrived since the last tick
    fn poll_submissions(&mut self) {
        for completion in self.runner.poll() {
            self.apply_completion(completion);
        }
    }

    fn apply_completion(&mut self, completion: Completion) {
        let kind = completion.request.screen();
        match (&completion.request, &completion.result) {
            (MutationRequest::Delete { ids, .. }, Ok(())) => {
                let removed = self.screen_mut(kind).remove_records(ids);
                let count = removed.len();
                self.show_toast(format!("Deleted {} record{}", count, plural(count)));
            }
            (MutationRequest::Delete { .. }, Err(err)) => {
                warn!(error = %err, "delete failed");
                self.show_toast(format!("Delete failed: {}", err));
            }
            (_, result) => {
                let form_waiting = self
                    .screen_mut(kind)
                    .complete_submission(completion.ticket, result);
                match result {
                    Ok(()) => {
                        let current = self.router.current();
                        if form_waiting && current.is_form() && current.screen() == kind {
                            self.router.back();
                            self.show_current();
                        }
                        self.show_toast(format!("{} saved", kind.name()));
                    }
                    Err(err) => {
                        warn!(error = %err, "save failed");
                        self.show_toast(format!("Save failed: {}", err));
                    }
                }
            }
        }
    }

    fn choose_page_size(&mut self, size: usize) -> Result<()> {
        self.modals.pop();
        self.active_screen_mut()
            .update(Action::Table(TableAction::SetPageSize(size)))?;

        // Remembered for the next launch; a config without a file stays in memory
        if self.config.default_page_size != size && self.config.path.is_some() {
            self.config.default_page_size = size;
            if let Err(e) = self.config.save() {
                warn!(error = %e, "failed to save config");
            }
        }
        Ok(())
    }

    fn status_text(&self) -> Option<String> {
        if let Some(toast) = &self.toast {
            return Some(toast.message.clone());
        }
        self.runner
            .oldest_start()
            .map(|start| format!("Working… {:.1}s", start.elapsed().as_secs_f64()))
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        self.active_screen_mut().handle_key_event(key)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.poll_submissions();
                if self.toast.as_ref().is_some_and(Toast::expired) {
                    self.toast = None;
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextScreen => self.switch_screen(true),
            Action::PrevScreen => self.switch_screen(false),
            Action::Navigate(route) => {
                self.modals.clear();
                self.router.navigate(route);
                if !self.show_current() {
                    self.router.back();
                    self.show_current();
                    return Ok(Some(Action::ShowToast("Record not found".to_string())));
                }
            }
            Action::Back => {
                if self.router.back() {
                    self.show_current();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.confirm_dialog.set_kind(ConfirmKind::Quit);
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::OpenColumnPicker => {
                let options = self.active_screen().column_options();
                self.column_picker.set_options(options);
                self.column_picker.reset();
                self.modals.push(Modal::ColumnPicker { selected_index: 0 });
            }
            Action::OpenPageSizePicker => {
                let current = self.active_screen().page_size();
                self.page_size_dialog.open(current);
                self.modals.push(Modal::PageSize {
                    selected_index: self.page_size_dialog.selected_index,
                });
            }
            Action::OpenDetail(id) => {
                let kind = self.active_kind();
                match self.active_screen().record_details(&id) {
                    Some(details) => {
                        self.record_detail.open(kind, &id, details);
                        self.modals.push(Modal::RecordDetail {
                            id,
                            scroll_offset: 0,
                        });
                    }
                    None => return Ok(Some(Action::ShowToast("Record not found".to_string()))),
                }
            }
            Action::RequestDelete(ids) => {
                if !ids.is_empty() {
                    self.confirm_dialog
                        .set_kind(ConfirmKind::Delete { count: ids.len() });
                    self.modals.push(Modal::ConfirmDelete { ids });
                }
            }
            Action::ConfirmDelete => {
                if let Some(Modal::ConfirmDelete { ids }) = self.modals.top().cloned() {
                    self.modals.pop();
                    // Deleting from the detail view closes it too
                    let from_detail = matches!(
                        self.modals.top(),
                        Some(Modal::RecordDetail { id, .. }) if ids.contains(id)
                    );
                    if from_detail {
                        self.modals.pop();
                    }
                    let request = self.active_screen().delete_request(ids);
                    self.runner.spawn(request);
                    return Ok(Some(Action::ShowToast("Deleting…".to_string())));
                }
            }
            Action::ChoosePageSize(size) => self.choose_page_size(size)?,
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => match self.modals.top_mut() {
                Some(Modal::ColumnPicker { selected_index }) => {
                    *selected_index = self.column_picker.selected_index;
                }
                Some(Modal::PageSize { selected_index }) => {
                    *selected_index = self.page_size_dialog.selected_index;
                }
                _ => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Table and forms
            // ─────────────────────────────────────────────────────────────────
            Action::Table(table_action) => {
                self.active_screen_mut().update(Action::Table(table_action))?;
                if matches!(self.modals.top(), Some(Modal::ColumnPicker { .. })) {
                    let options = self.active_screen().column_options();
                    self.column_picker.set_options(options);
                }
            }
            Action::SubmitForm => {
                let index = self.screen_index(self.active_kind());
                let runner = &mut self.runner;
                let submitted =
                    self.screens[index].submit_form(&mut |request| runner.spawn(request));
                if let Some(Err(err)) = submitted {
                    warn!(error = %err, "submission not sent");
                    return Ok(Some(Action::ShowToast(err.to_string())));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Feedback
            // ─────────────────────────────────────────────────────────────────
            Action::ShowToast(message) => self.show_toast(message),

            other => return self.active_screen_mut().update(other),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let status = self.status_text();
        let layout = calculate_main_layout(area, status.is_some());

        self.draw_tabs(frame, layout.tabs);

        let index = self.screen_index(self.active_kind());
        self.screens[index].draw(frame, layout.content)?;

        if let (Some(text), Some(status_area)) = (status, layout.status) {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {}", text),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                status_area,
            );
        }

        self.draw_help_bar(frame, layout.help);

        // Lower modals stay visible under the top one
        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm | Modal::ConfirmDelete { .. } => {
                self.confirm_dialog.handle_key_event(key)
            }
            Modal::ColumnPicker { .. } => self.column_picker.handle_key_event(key),
            Modal::PageSize { .. } => self.page_size_dialog.handle_key_event(key),
            Modal::RecordDetail { .. } => {
                let action = self.record_detail.handle_key_event(key)?;
                if let Some(Modal::RecordDetail { scroll_offset, .. }) = self.modals.top_mut() {
                    *scroll_offset = self.record_detail.scroll_offset;
                }
                Ok(action)
            }
            Modal::Help { .. } => {
                let action = self.help_dialog.handle_key_event(key)?;
                if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                    *scroll_offset = self.help_dialog.scroll_offset;
                }
                Ok(action)
            }
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm | Modal::ConfirmDelete { .. } => {
                self.confirm_dialog.draw(frame, area)?
            }
            Modal::ColumnPicker { .. } => self.column_picker.draw(frame, area)?,
            Modal::PageSize { .. } => self.page_size_dialog.draw(frame, area)?,
            Modal::RecordDetail { .. } => self.record_detail.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<&str> = self.screens.iter().map(|s| s.kind().name()).collect();
        let selected = self.screen_index(self.active_kind());

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" School Console ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = |label: &str, color: Color| {
            Span::styled(
                format!(" {} ", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        };

        let help_spans = if self.router.current().is_form() {
            vec![
                key("Enter", Color::Green),
                Span::raw("Save  "),
                key("Tab", Color::Cyan),
                Span::raw("Next field  "),
                key("←/→", Color::Cyan),
                Span::raw("Choice  "),
                key("Esc", Color::Yellow),
                Span::raw("Cancel"),
            ]
        } else if self.active_screen().captures_text() {
            vec![
                key("Enter", Color::Green),
                Span::raw("Done  "),
                key("Esc", Color::Yellow),
                Span::raw("Done"),
            ]
        } else {
            vec![
                key("/", Color::Cyan),
                Span::raw("Filter  "),
                key("s", Color::Cyan),
                Span::raw("Sort  "),
                key("Space", Color::Green),
                Span::raw("Select  "),
                key("N", Color::Green),
                Span::raw("New  "),
                key("e", Color::Green),
                Span::raw("Edit  "),
                key("d", Color::Red),
                Span::raw("Delete  "),
                key("c", Color::Magenta),
                Span::raw("Columns  "),
                key("?", Color::Blue),
                Span::raw("Help  "),
                key("q", Color::Yellow),
                Span::raw("Quit"),
            ]
        };

        let paragraph = Paragraph::new(Line::from(help_spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_text;
    use crate::services::LoggingSink;
    use std::thread;

    fn app() -> App {
        App::new(Config::default(), Arc::new(LoggingSink::new(false)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Run one key through the same handle/update chain as the main loop
    fn press(app: &mut App, code: KeyCode) {
        let mut next = app.handle_key_event(key(code)).unwrap();
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn wait_for_submissions(app: &mut App) {
        for _ in 0..500 {
            app.update(Action::Tick).unwrap();
            if !app.is_busy() {
                return;
            }
            thread::sleep(Duration::from_millis(2));
        }
        panic!("submission did not finish");
    }

    fn toast(app: &App) -> String {
        app.toast
            .as_ref()
            .map(|t| t.message.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_starts_on_first_screen() {
        let app = app();
        assert_eq!(app.screens.len(), ScreenKind::all().len());
        assert_eq!(app.router.current(), &Route::List(ScreenKind::LessonPlans));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_tab_switches_screens_and_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_kind(), ScreenKind::Admissions);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_kind(), ScreenKind::ExamResults);
        assert_eq!(app.router.depth(), 0);
    }

    #[test]
    fn test_quit_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_a_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_delete_waits_for_acknowledgement() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.modals.top(),
            Some(&Modal::ConfirmDelete {
                ids: vec!["LP-001".to_string()]
            })
        );

        press(&mut app, KeyCode::Char('y'));
        assert!(app.modals.is_empty());
        assert_eq!(toast(&app), "Deleting…");

        wait_for_submissions(&mut app);
        assert!(app.active_screen().record_details("LP-001").is_none());
        assert_eq!(toast(&app), "Deleted 1 record");
    }

    #[test]
    fn test_rejected_delete_keeps_records() {
        let mut app = App::new(Config::default(), Arc::new(LoggingSink::new(true)));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('D'));
        assert!(matches!(
            app.modals.top(),
            Some(Modal::ConfirmDelete { ids }) if ids.len() == 10
        ));
        press(&mut app, KeyCode::Char('y'));

        wait_for_submissions(&mut app);
        assert!(app.active_screen().record_details("LP-001").is_some());
        assert!(toast(&app).starts_with("Delete failed"));
    }

    #[test]
    fn test_delete_from_detail_closes_it() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.modals.top(), Some(Modal::RecordDetail { id, .. }) if id == "LP-001"));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.modals.is_empty());
        wait_for_submissions(&mut app);
        assert!(app.active_screen().record_details("LP-001").is_none());
    }

    #[test]
    fn test_create_redirects_to_list() {
        let mut app = app();
        app.router.replace_root(Route::List(ScreenKind::Staff));
        app.show_current();
        press(&mut app, KeyCode::Char('N'));
        assert_eq!(app.router.current(), &Route::Create(ScreenKind::Staff));

        type_text(&mut app, "Grace Hopper");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Teacher");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "grace@school.example.org");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "3000");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2024-09-01");
        press(&mut app, KeyCode::Enter);
        assert!(app.is_busy());

        wait_for_submissions(&mut app);
        assert_eq!(app.router.current(), &Route::List(ScreenKind::Staff));
        assert_eq!(toast(&app), "Staff saved");
        let details = app.active_screen().record_details("STF-026").unwrap();
        assert!(details.contains(&("Name".to_string(), "Grace Hopper".to_string())));
    }

    #[test]
    fn test_rejected_save_stays_on_form() {
        let mut app = App::new(Config::default(), Arc::new(LoggingSink::new(true)));
        app.update(Action::Navigate(Route::Edit(ScreenKind::Staff, "STF-001".into())))
            .unwrap();
        press(&mut app, KeyCode::Enter);
        wait_for_submissions(&mut app);

        assert_eq!(
            app.router.current(),
            &Route::Edit(ScreenKind::Staff, "STF-001".to_string())
        );
        assert!(toast(&app).starts_with("Save failed"));
    }

    #[test]
    fn test_earlier_save_does_not_close_newer_form() {
        let mut app = app();
        app.update(Action::Navigate(Route::Edit(ScreenKind::Staff, "STF-001".into())))
            .unwrap();
        type_text(&mut app, " X");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        // Open a second form before the first answer is polled
        app.update(Action::Navigate(Route::Edit(ScreenKind::Staff, "STF-002".into())))
            .unwrap();
        wait_for_submissions(&mut app);

        assert_eq!(
            app.router.current(),
            &Route::Edit(ScreenKind::Staff, "STF-002".to_string())
        );
        assert_eq!(toast(&app), "Staff saved");
        let details = app.active_screen().record_details("STF-001").unwrap();
        assert!(details
            .iter()
            .any(|(label, value)| label == "Name" && value.ends_with(" X")));
    }

    #[test]
    fn test_edit_unknown_record() {
        let mut app = app();
        let mut next = app
            .update(Action::Navigate(Route::Edit(ScreenKind::Fees, "FEE-999".into())))
            .unwrap();
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
        assert_eq!(app.router.current(), &Route::List(ScreenKind::LessonPlans));
        assert_eq!(toast(&app), "Record not found");
    }

    #[test]
    fn test_column_picker_toggles_active_screen() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        // First entry is the pinned id column
        press(&mut app, KeyCode::Char(' '));
        assert!(toast(&app).contains("always shown"));

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.modals.top(), Some(&Modal::ColumnPicker { selected_index: 1 }));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.column_picker.options[1].visible);
        assert!(!app.active_screen().column_options()[1].visible);
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_page_size_picker() {
        let mut app = app();
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.modals.top(), Some(&Modal::PageSize { selected_index: 1 }));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.active_screen().page_size(), 20);
        // No config file, nothing saved
        assert_eq!(app.config.default_page_size, 10);
    }

    #[test]
    fn test_page_size_saved_only_to_existing_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("config.json");
        let config = Config::load_from(&missing).unwrap();
        let mut app = App::new(config, Arc::new(LoggingSink::new(false)));
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(!missing.exists());

        let existing = dir.path().join("existing.json");
        std::fs::write(&existing, "{}").unwrap();
        let config = Config::load_from(&existing).unwrap();
        let mut app = App::new(config, Arc::new(LoggingSink::new(false)));
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        let saved = Config::load_from(&existing).unwrap();
        assert_eq!(saved.default_page_size, 20);
    }

    #[test]
    fn test_draw_list_screen() {
        let mut app = app();
        let text = render_to_text(140, 32, |f| {
            app.draw(f, f.area()).unwrap();
        });
        assert!(text.contains("School Console"));
        assert!(text.contains("Lesson Plans"));
        assert!(text.contains("Rows 1-10 of 24"));
        assert!(text.contains("Filter"));
    }
}
