//! Column visibility picker
//!
//! Lists the data columns with a checkbox each. Toggling is immediate; the
//! dialog stays open until closed.

use crate::action::Action;
use crate::component::{ColumnOption, Component};
use crate::components::centered_popup;
use crate::model::view_state::TableAction;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct ColumnPickerDialog {
    pub options: Vec<ColumnOption>,
    pub selected_index: usize,
    list_state: ListState,
}

impl Default for ColumnPickerDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnPickerDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            options: Vec::new(),
            selected_index: 0,
            list_state,
        }
    }

    /// Refresh the options, keeping the highlighted row where possible
    pub fn set_options(&mut self, options: Vec<ColumnOption>) {
        self.options = options;
        self.selected_index = self
            .selected_index
            .min(self.options.len().saturating_sub(1));
        self.list_state.select(Some(self.selected_index));
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.options.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for ColumnPickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.options.get(self.selected_index).map(|option| {
                    if option.hideable {
                        Action::Table(TableAction::ToggleColumnVisibility(option.key))
                    } else {
                        Action::ShowToast(format!("{} is always shown", option.label))
                    }
                })
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = (self.options.len() as u16 + 5).min(area.height.saturating_sub(2));
        let popup_area = centered_popup(area, 40, height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(popup_area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| {
                let check = if option.visible { "[x] " } else { "[ ] " };
                let style = if option.hideable {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let mut spans = vec![
                    Span::styled(check, Style::default().fg(Color::Green)),
                    Span::styled(option.label, style),
                ];
                if !option.hideable {
                    spans.push(Span::styled(" (pinned)", Style::default().fg(Color::DarkGray)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Columns ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Space ", Style::default().fg(Color::Yellow)),
            Span::raw("Toggle  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Move  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Close"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_text;
    use crossterm::event::KeyModifiers;

    fn options() -> Vec<ColumnOption> {
        vec![
            ColumnOption {
                key: "id",
                label: "ID",
                visible: true,
                hideable: false,
            },
            ColumnOption {
                key: "name",
                label: "Name",
                visible: true,
                hideable: true,
            },
            ColumnOption {
                key: "email",
                label: "Email",
                visible: false,
                hideable: true,
            },
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_toggle_emits_visibility_action() {
        let mut dialog = ColumnPickerDialog::new();
        dialog.set_options(options());

        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::ShowToast("ID is always shown".to_string()))
        );

        dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::Table(TableAction::ToggleColumnVisibility("name")))
        );
    }

    #[test]
    fn test_selection_bounds() {
        let mut dialog = ColumnPickerDialog::new();
        dialog.set_options(options());
        for _ in 0..5 {
            dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(dialog.selected_index, 2);

        // Fewer options after a refresh pulls the index back
        dialog.set_options(options().into_iter().take(1).collect());
        assert_eq!(dialog.selected_index, 0);
    }

    #[test]
    fn test_renders_checkboxes() {
        let mut dialog = ColumnPickerDialog::new();
        dialog.set_options(options());
        let text = render_to_text(60, 20, |f| {
            dialog.draw(f, f.area()).unwrap();
        });
        assert!(text.contains("[x] ID (pinned)"));
        assert!(text.contains("[ ] Email"));
    }
}
