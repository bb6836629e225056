use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{layout::CommandLineLayout, model::Model};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let layout = CommandLineLayout::new(rect, model.key_sequence.chars().count() as u16);

    if model.mode.is_command() {
        let prefix = Rect {
            width: layout.buffer.width.min(1),
            ..layout.buffer
        };
        let input = Rect {
            x: layout.buffer.x + prefix.width,
            width: layout.buffer.width - prefix.width,
            ..layout.buffer
        };

        frame.render_widget(Paragraph::new(":"), prefix);
        uidit_buffer::view(&model.mode, &model.commandline.buffer, true, frame, input);
    } else if let Some(message) = &model.commandline.message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))),
            layout.buffer,
        );
    }

    frame.render_widget(
        Paragraph::new(model.key_sequence.as_str()),
        layout.key_sequence,
    );
}
