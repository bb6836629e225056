use crate::{
    message::{LineDirection, TextModification},
    model::TextBuffer,
};

pub fn update(buffer: &mut TextBuffer, modification: &TextModification) {
    match modification {
        TextModification::DeleteCharBeforeCursor => delete_char_before_cursor(buffer),
        TextModification::DeleteCharOnCursor => delete_char_on_cursor(buffer),
        TextModification::Insert(raw) => {
            for c in raw.chars() {
                if c == '\n' {
                    insert_line_break(buffer);
                } else {
                    insert_char(buffer, c);
                }
            }
        }
        TextModification::InsertLineBreak => insert_line_break(buffer),
        TextModification::InsertNewLine(direction) => {
            let index = match direction {
                LineDirection::Up => buffer.cursor.vertical_index,
                LineDirection::Down => buffer.cursor.vertical_index + 1,
            };

            buffer.lines.insert(index, String::new());
            buffer.cursor.vertical_index = index;
            buffer.cursor.horizontal_index = 0;
        }
    }
}

fn insert_char(buffer: &mut TextBuffer, c: char) {
    let cursor = &mut buffer.cursor;
    let line = match buffer.lines.get_mut(cursor.vertical_index) {
        Some(it) => it,
        None => return,
    };

    let index = get_byte_index(line, cursor.horizontal_index);
    line.insert(index, c);
    cursor.horizontal_index += 1;
}

fn insert_line_break(buffer: &mut TextBuffer) {
    let cursor = &mut buffer.cursor;
    let line = match buffer.lines.get_mut(cursor.vertical_index) {
        Some(it) => it,
        None => return,
    };

    let index = get_byte_index(line, cursor.horizontal_index);
    let rest = line.split_off(index);

    cursor.vertical_index += 1;
    cursor.horizontal_index = 0;
    buffer.lines.insert(cursor.vertical_index, rest);
}

fn delete_char_before_cursor(buffer: &mut TextBuffer) {
    let cursor = &mut buffer.cursor;
    if cursor.horizontal_index > 0 {
        if let Some(line) = buffer.lines.get_mut(cursor.vertical_index) {
            let index = get_byte_index(line, cursor.horizontal_index - 1);
            if index < line.len() {
                line.remove(index);
            }
            cursor.horizontal_index -= 1;
        }
    } else if cursor.vertical_index > 0 && cursor.vertical_index < buffer.lines.len() {
        let line = buffer.lines.remove(cursor.vertical_index);
        cursor.vertical_index -= 1;

        let previous = &mut buffer.lines[cursor.vertical_index];
        cursor.horizontal_index = previous.chars().count();
        previous.push_str(&line);
    }
}

fn delete_char_on_cursor(buffer: &mut TextBuffer) {
    let cursor = &buffer.cursor;
    let next_index = cursor.vertical_index + 1;
    let line = match buffer.lines.get_mut(cursor.vertical_index) {
        Some(it) => it,
        None => return,
    };

    let index = get_byte_index(line, cursor.horizontal_index);
    if index < line.len() {
        line.remove(index);
    } else if next_index < buffer.lines.len() {
        let next = buffer.lines.remove(next_index);
        buffer.lines[cursor.vertical_index].push_str(&next);
    }
}

fn get_byte_index(line: &str, char_index: usize) -> usize {
    line.char_indices()
        .nth(char_index)
        .map_or(line.len(), |(index, _)| index)
}
