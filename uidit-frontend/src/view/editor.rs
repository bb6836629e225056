use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(get_border_style(model))
        .title(" UIDs ");

    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    uidit_buffer::view(
        &model.mode,
        &model.editor,
        !model.mode.is_command(),
        frame,
        inner,
    );
}

fn get_border_style(model: &Model) -> Style {
    if model.mode.is_insert() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    }
}
