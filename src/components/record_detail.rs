//! Read-only view of one record

use crate::action::Action;
use crate::component::Component;
use crate::model::router::Route;
use crate::model::ui::ScreenKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct RecordDetailDialog {
    pub screen: ScreenKind,
    pub id: String,
    pub details: Vec<(String, String)>,
    pub scroll_offset: usize,
}

impl Default for RecordDetailDialog {
    fn default() -> Self {
        Self {
            screen: ScreenKind::LessonPlans,
            id: String::new(),
            details: Vec::new(),
            scroll_offset: 0,
        }
    }
}

impl RecordDetailDialog {
    pub fn open(&mut self, screen: ScreenKind, id: &str, details: Vec<(String, String)>) {
        self.screen = screen;
        self.id = id.to_string();
        self.details = details;
        self.scroll_offset = 0;
    }

    fn content(&self) -> Vec<Line<'static>> {
        let label_width = self
            .details
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![Line::from("")];
        for (label, value) in &self.details {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:width$}  ", label, width = label_width),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  e edit · d delete · Esc close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for RecordDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('e') => Some(Action::Navigate(Route::Edit(self.screen, self.id.clone()))),
            KeyCode::Char('d') => Some(Action::RequestDelete(vec![self.id.clone()])),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = self.content();
        let width = 64u16.min(area.width.saturating_sub(4));
        let height = (content.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = super::centered_popup(area, width, height);
        frame.render_widget(Clear, popup_area);

        let total = content.len();
        let visible_height = popup_area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} · {} ", self.screen.name(), self.id))
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, popup_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                popup_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_text;
    use crossterm::event::KeyModifiers;

    fn dialog() -> RecordDetailDialog {
        let mut dialog = RecordDetailDialog::default();
        dialog.open(
            ScreenKind::Staff,
            "STF-001",
            vec![
                ("Name".to_string(), "Ada Lovelace".to_string()),
                ("Net Salary".to_string(), "2674.00".to_string()),
                ("Phone".to_string(), "-".to_string()),
            ],
        );
        dialog
    }

    #[test]
    fn test_detail_keys() {
        let mut dialog = dialog();
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(
            dialog.handle_key_event(key('e')).unwrap(),
            Some(Action::Navigate(Route::Edit(ScreenKind::Staff, "STF-001".to_string())))
        );
        assert_eq!(
            dialog.handle_key_event(key('d')).unwrap(),
            Some(Action::RequestDelete(vec!["STF-001".to_string()]))
        );
    }

    #[test]
    fn test_renders_labels_and_values() {
        let mut dialog = dialog();
        let text = render_to_text(80, 20, |f| {
            dialog.draw(f, f.area()).unwrap();
        });
        assert!(text.contains("Staff · STF-001"));
        assert!(text.contains("Net Salary  2674.00"));
        assert!(text.contains("Ada Lovelace"));
    }
}
