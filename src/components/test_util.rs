//! Rendering helpers shared by component tests

use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

/// Buffer contents as text, one line per row
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render into a `width` x `height` test terminal and return the text
pub fn render_to_text<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut Frame),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    buffer_text(terminal.backend().buffer())
}
