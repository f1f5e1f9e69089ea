//! Create/edit form rendering

use crate::model::form::{FieldKind, FormSchema, FormState, FormStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 18;

/// Everything the form renderer needs besides the schema and state
pub struct FormContext<'a> {
    pub title: &'a str,
    /// Id of the record being edited, `None` on create
    pub editing: Option<&'a str>,
    pub derived: &'a [(&'static str, String)],
}

fn field_lines(schema: &FormSchema, state: &FormState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, field) in schema.fields.iter().enumerate() {
        let focused = idx == state.focused;
        let value = state.values.get(field.key).cloned().unwrap_or_default();
        let label = if field.is_required() {
            format!("{} *", field.label)
        } else {
            field.label.to_string()
        };

        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let shown = match field.kind {
            FieldKind::Choice(_) => format!("‹ {} ›", value),
            _ if focused && !state.is_submitting() => format!("{}▏", value),
            _ => value,
        };
        let value_style = if focused {
            Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 60))
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(if focused { "▶ " } else { "  " }, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:width$}", label, width = LABEL_WIDTH), label_style),
            Span::styled(shown, value_style),
        ]));

        if let Some(error) = state.errors.get(field.key) {
            lines.push(Line::from(Span::styled(
                format!("  {:width$}{}", "", error, width = LABEL_WIDTH),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines
}

fn derived_lines(derived: &[(&'static str, String)]) -> Vec<Line<'static>> {
    derived
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:width$}", label, width = LABEL_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    value.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect()
}

fn status_line(state: &FormState) -> Line<'static> {
    match state.status {
        FormStatus::Submitting => Line::from(Span::styled(
            " Submitting… ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        FormStatus::Submitted => Line::from(Span::styled(
            " Saved ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        FormStatus::Idle if !state.errors.is_empty() => Line::from(Span::styled(
            format!(" {} field(s) need attention ", state.errors.len()),
            Style::default().fg(Color::Red),
        )),
        FormStatus::Idle => Line::from(Span::styled(
            " Ready ",
            Style::default().fg(Color::DarkGray),
        )),
    }
}

pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    schema: &FormSchema,
    state: &FormState,
    context: &FormContext,
) {
    let derived_height = if context.derived.is_empty() {
        0
    } else {
        context.derived.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(derived_height),
            Constraint::Length(1),
        ])
        .split(area);

    let title = match context.editing {
        Some(id) => format!(" Edit {} · {} ", context.title, id),
        None => format!(" New {} ", context.title),
    };

    let fields = Paragraph::new(field_lines(schema, state)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(if state.is_submitting() {
                Color::Yellow
            } else {
                Color::DarkGray
            })),
    );
    frame.render_widget(fields, chunks[0]);

    if !context.derived.is_empty() {
        let derived = Paragraph::new(derived_lines(context.derived)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Computed ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(derived, chunks[1]);
    }

    frame.render_widget(Paragraph::new(status_line(state)), chunks[2]);
}
