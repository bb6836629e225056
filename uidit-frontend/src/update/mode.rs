use uidit_buffer::{
    message::BufferMessage,
    model::{Mode, TextBuffer},
};

use crate::model::Model;

#[tracing::instrument(skip(model))]
pub fn change(model: &mut Model, from: &Mode, to: &Mode) {
    if from == to {
        return;
    }

    model.mode = to.clone();

    if to.is_command() {
        model.commandline.buffer = TextBuffer::default();
    }

    // the editor keeps its cursor while the command line is active
    if !from.is_command() && !to.is_command() {
        uidit_buffer::update(
            &model.mode,
            &mut model.editor,
            &[BufferMessage::ChangeMode(from.clone(), to.clone())],
        );
    }
}
