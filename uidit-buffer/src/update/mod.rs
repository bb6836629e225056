use crate::{
    message::{BufferMessage, CursorDirection},
    model::{Mode, TextBuffer},
};

mod cursor;
mod modification;

pub fn update_buffer(mode: &Mode, buffer: &mut TextBuffer, message: &BufferMessage) {
    tracing::trace!("handling buffer message: {:?}", message);

    match message {
        BufferMessage::ChangeMode(from, to) => {
            if from == &Mode::Insert && to != &Mode::Insert {
                cursor::update_by_direction(to, buffer, &1, &CursorDirection::Left);
            }
            cursor::validate_cursor_position(to, buffer);
        }
        BufferMessage::Modification(count, modification) => {
            for _ in 0..*count {
                modification::update(buffer, modification);
            }
            cursor::validate_cursor_position(mode, buffer);
        }
        BufferMessage::MoveCursor(count, direction) => {
            cursor::update_by_direction(mode, buffer, count, direction);
        }
    }
}
