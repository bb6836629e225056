use crate::{
    message::CursorDirection,
    model::{Mode, TextBuffer},
};

pub fn update_by_direction(
    mode: &Mode,
    buffer: &mut TextBuffer,
    count: &usize,
    direction: &CursorDirection,
) {
    let cursor = &mut buffer.cursor;
    match direction {
        CursorDirection::Bottom => {
            cursor.vertical_index = buffer.lines.len().saturating_sub(1);
        }
        CursorDirection::Down => {
            cursor.vertical_index = cursor.vertical_index.saturating_add(*count);
        }
        CursorDirection::Left => {
            cursor.horizontal_index = cursor.horizontal_index.saturating_sub(*count);
        }
        CursorDirection::LineEnd => {
            cursor.horizontal_index = usize::MAX;
        }
        CursorDirection::LineStart => {
            cursor.horizontal_index = 0;
        }
        CursorDirection::Right => {
            cursor.horizontal_index = cursor.horizontal_index.saturating_add(*count);
        }
        CursorDirection::Top => {
            cursor.vertical_index = 0;
        }
        CursorDirection::Up => {
            cursor.vertical_index = cursor.vertical_index.saturating_sub(*count);
        }
    }

    validate_cursor_position(mode, buffer);
}

pub fn validate_cursor_position(mode: &Mode, buffer: &mut TextBuffer) {
    if buffer.lines.is_empty() {
        buffer.lines.push(String::new());
    }

    let max_vertical = buffer.lines.len() - 1;
    if buffer.cursor.vertical_index > max_vertical {
        buffer.cursor.vertical_index = max_vertical;
    }

    let line_length = buffer
        .current_line()
        .map_or(0, |line| line.chars().count());

    let max_horizontal = match mode {
        Mode::Command | Mode::Insert => line_length,
        Mode::Normal => line_length.saturating_sub(1),
    };

    if buffer.cursor.horizontal_index > max_horizontal {
        buffer.cursor.horizontal_index = max_horizontal;
    }
}
