use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use crate::model::{Mode, TextBuffer};

mod line;

// FIX: wide chars shift the terminal cursor to the left of its real position
pub fn view(mode: &Mode, buffer: &TextBuffer, show_cursor: bool, frame: &mut Frame, rect: Rect) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let cursor = &buffer.cursor;
    let vertical_offset = get_offset(cursor.vertical_index, usize::from(rect.height));
    let horizontal_offset = get_offset(cursor.horizontal_index, usize::from(rect.width));

    let lines: Vec<Line> = buffer
        .lines
        .iter()
        .enumerate()
        .skip(vertical_offset)
        .take(usize::from(rect.height))
        .map(|(index, content)| {
            let is_cursor_line = show_cursor && index == cursor.vertical_index;
            line::get_styled_line(mode, content, horizontal_offset, is_cursor_line)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), rect);

    if show_cursor {
        let x = rect.x + (cursor.horizontal_index - horizontal_offset) as u16;
        let y = rect.y + (cursor.vertical_index - vertical_offset) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn get_offset(index: usize, size: usize) -> usize {
    if index < size {
        0
    } else {
        index + 1 - size
    }
}
