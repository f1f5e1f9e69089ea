//! Page size picker

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::view_state::PAGE_SIZE_OPTIONS;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct PageSizeDialog {
    pub selected_index: usize,
    /// Size in effect when the dialog opened
    pub current: usize,
    list_state: ListState,
}

impl Default for PageSizeDialog {
    fn default() -> Self {
        Self::new(PAGE_SIZE_OPTIONS[1])
    }
}

impl PageSizeDialog {
    pub fn new(current: usize) -> Self {
        let mut dialog = Self {
            selected_index: 0,
            current,
            list_state: ListState::default(),
        };
        dialog.open(current);
        dialog
    }

    /// Highlight the option matching `current`
    pub fn open(&mut self, current: usize) {
        self.current = current;
        self.selected_index = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&n| n == current)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }
}

impl Component for PageSizeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('z') | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.list_state.select(Some(self.selected_index));
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_index + 1 < PAGE_SIZE_OPTIONS.len() {
                    self.selected_index += 1;
                }
                self.list_state.select(Some(self.selected_index));
                Some(Action::ModalDown)
            }
            KeyCode::Enter => Some(Action::ChoosePageSize(PAGE_SIZE_OPTIONS[self.selected_index])),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 30, PAGE_SIZE_OPTIONS.len() as u16 + 2);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = PAGE_SIZE_OPTIONS
            .iter()
            .map(|&n| {
                let marker = if n == self.current { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::raw(format!("{} rows per page", n)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Page Size ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, popup_area, &mut self.list_state);
        Ok(())
    }
}
