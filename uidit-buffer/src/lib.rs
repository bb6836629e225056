use message::BufferMessage;
use model::{Mode, TextBuffer};
use ratatui::{layout::Rect, Frame};

pub mod message;
pub mod model;
mod update;
mod view;

pub fn update(mode: &Mode, buffer: &mut TextBuffer, messages: &[BufferMessage]) {
    for message in messages {
        update::update_buffer(mode, buffer, message);
    }
}

pub fn view(mode: &Mode, buffer: &TextBuffer, show_cursor: bool, frame: &mut Frame, rect: Rect) {
    view::view(mode, buffer, show_cursor, frame, rect)
}
