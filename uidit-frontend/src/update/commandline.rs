use uidit_buffer::model::TextBuffer;

use crate::{action::Action, model::Model};

use super::command;

pub fn execute(model: &mut Model) -> Vec<Action> {
    let cmd = model.commandline.buffer.content();
    model.commandline.buffer = TextBuffer::default();

    command::execute(&cmd, model)
}

pub fn leave(model: &mut Model) {
    model.commandline.buffer = TextBuffer::default();
}
