//! Table widget for one page of records
//!
//! Draws a `PageView` as produced by the view pipeline. The widget holds no
//! data of its own; everything comes from the page and the cursor.

use crate::model::column::ColumnKind;
use crate::model::pipeline::{HeaderCell, PageView};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text shown when nothing matches
pub const NO_RESULTS: &str = "No results";

/// Truncate to `width` display columns, marking the cut with `…`
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn header_label(header: &HeaderCell) -> String {
    match header.sort {
        Some(direction) => format!("{} {}", header.label, direction.arrow()),
        None => header.label.to_string(),
    }
}

/// Draw the page inside a bordered block
///
/// `cursor` is the highlighted row within the page and `focused_key` the
/// column that `s` would sort.
pub fn draw_data_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    page: &PageView,
    cursor: usize,
    focused_key: Option<&str>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray));

    let widths: Vec<Constraint> = page
        .headers
        .iter()
        .map(|h| Constraint::Length(h.width))
        .collect();

    let header_cells = page.headers.iter().map(|h| {
        let mut style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        if focused_key == Some(h.key) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if !h.sortable && h.kind == ColumnKind::Data {
            style = style.fg(Color::DarkGray);
        }
        Cell::from(truncate(&header_label(h), h.width as usize)).style(style)
    });
    let header = Row::new(header_cells).height(1);

    if page.is_empty() {
        let mut cells = vec![Cell::from(""); page.headers.len()];
        // First data column carries the message
        if let Some(idx) = page.headers.iter().position(|h| h.kind == ColumnKind::Data) {
            cells[idx] = Cell::from(Span::styled(
                NO_RESULTS,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }
        let table = Table::new(vec![Row::new(cells)], widths)
            .header(header)
            .block(block);
        frame.render_widget(table, area);
        return;
    }

    let rows: Vec<Row> = page
        .rows
        .iter()
        .map(|row| {
            let cells = row.cells.iter().zip(&page.headers).map(|(text, h)| {
                let style = match h.kind {
                    ColumnKind::Select if row.selected => Style::default().fg(Color::Green),
                    ColumnKind::Select => Style::default().fg(Color::DarkGray),
                    ColumnKind::Actions => Style::default().fg(Color::Magenta),
                    ColumnKind::Data => Style::default().fg(Color::White),
                };
                Cell::from(Line::from(Span::styled(
                    truncate(text, h.width as usize),
                    style,
                )))
            });
            let row_style = if row.selected {
                Style::default().bg(Color::Rgb(30, 50, 30))
            } else {
                Style::default()
            };
            Row::new(cells).style(row_style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(cursor.min(page.rows.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut state);
}

/// One-line pagination summary under the table
pub fn pagination_summary(page: &PageView) -> String {
    let (first, last) = page.row_span();
    let mut summary = format!(
        "Rows {}-{} of {} · Page {}/{} · {} per page",
        first,
        last,
        page.filtered_count,
        page.page_index + 1,
        page.page_count,
        page.page_size
    );
    if page.filtered_count != page.total_count {
        summary.push_str(&format!(" · filtered from {}", page.total_count));
    }
    if page.selected_count > 0 {
        summary.push_str(&format!(" · {} selected", page.selected_count));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pipeline::derive_page;
    use crate::model::record::TableRecord;
    use crate::model::test_support::{people, Person};
    use crate::model::view_state::ViewState;
    use crate::components::test_util::render_to_text;

    fn render(page: &PageView) -> String {
        render_to_text(100, 16, |f| {
            draw_data_table(f, f.area(), "People", page, 0, Some("name"))
        })
    }

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        // Wide characters take two columns each
        assert_eq!(truncate("数据测试", 5), "数据…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_renders_rows_and_sort_arrow() {
        let records = people(3);
        let columns = Person::columns();
        let mut state = ViewState::new(&columns, 10);
        state.sort_key = Some("age");
        let page = derive_page(&records, &columns, &state);

        let text = render(&page);
        assert!(text.contains("People"));
        assert!(text.contains("Person 01"));
        assert!(text.contains("Person 03"));
        assert!(text.contains("Age ▲"));
        assert!(!text.contains(NO_RESULTS));
    }

    #[test]
    fn test_renders_no_results_row() {
        let records = people(3);
        let columns = Person::columns();
        let mut state = ViewState::new(&columns, 10);
        state.filter_text = "nobody".to_string();
        let page = derive_page(&records, &columns, &state);

        let text = render(&page);
        assert!(text.contains(NO_RESULTS));
        assert!(!text.contains("Person 01"));
    }

    #[test]
    fn test_pagination_summary() {
        let records = people(25);
        let columns = Person::columns();
        let mut state = ViewState::new(&columns, 10);
        state.page_index = 2;
        state.selected_ids.insert("p-1".to_string());
        let page = derive_page(&records, &columns, &state);
        assert_eq!(
            pagination_summary(&page),
            "Rows 21-25 of 25 · Page 3/3 · 10 per page · 1 selected"
        );

        state.filter_text = "Person 1".to_string();
        state.page_index = 0;
        let page = derive_page(&records, &columns, &state);
        assert!(pagination_summary(&page).ends_with("filtered from 25 · 1 selected"));
    }
}
