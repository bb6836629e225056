use std::slice;

use uidit_buffer::message::{BufferMessage, TextModification};

use crate::model::Model;

pub fn update(model: &mut Model, message: &BufferMessage) {
    if model.mode.is_command() {
        if let Some(message) = get_commandline_message(message) {
            uidit_buffer::update(&model.mode, &mut model.commandline.buffer, &[message]);
        }
    } else {
        uidit_buffer::update(&model.mode, &mut model.editor, slice::from_ref(message));
    }
}

/// The command line holds a single line. Line breaks are dropped and pasted
/// newlines become spaces.
fn get_commandline_message(message: &BufferMessage) -> Option<BufferMessage> {
    match message {
        BufferMessage::Modification(count, TextModification::Insert(text)) => Some(
            BufferMessage::Modification(*count, TextModification::Insert(text.replace('\n', " "))),
        ),
        BufferMessage::Modification(
            _,
            TextModification::InsertLineBreak | TextModification::InsertNewLine(_),
        ) => None,
        _ => Some(message.clone()),
    }
}
