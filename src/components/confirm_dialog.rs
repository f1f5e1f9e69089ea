//! Yes/no confirmation dialog for quitting and deleting

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmKind {
    Quit,
    Delete { count: usize },
}

pub struct ConfirmDialog {
    pub kind: ConfirmKind,
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self {
            kind: ConfirmKind::Quit,
        }
    }
}

impl ConfirmDialog {
    pub fn set_kind(&mut self, kind: ConfirmKind) {
        self.kind = kind;
    }

    fn question(&self) -> String {
        match self.kind {
            ConfirmKind::Quit => "Are you sure you want to quit?".to_string(),
            ConfirmKind::Delete { count: 1 } => "Delete this record?".to_string(),
            ConfirmKind::Delete { count } => format!("Delete {} records?", count),
        }
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(match self.kind {
                ConfirmKind::Quit => Action::ForceQuit,
                ConfirmKind::Delete { .. } => Action::ConfirmDelete,
            }),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, 7);

        frame.render_widget(Clear, popup_area);

        let (title, accent, yes) = match self.kind {
            ConfirmKind::Quit => (" Quit? ", Color::Yellow, "Yes, quit  "),
            ConfirmKind::Delete { .. } => (" Delete ", Color::Red, "Yes, delete  "),
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.question(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(yes),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("No, cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(title)
                    .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
