use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::{Model, Status};

const READY: &str = "Ready";

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let status = get_status_content(&model.status);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(status.width() as u16),
            Constraint::Length(position.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(status), layout[0]);
    frame.render_widget(Paragraph::new(position), layout[1]);
}

fn get_status_content(status: &Option<Status>) -> Line<'_> {
    match status {
        Some(Status::Error(text)) => Line::from(Span::styled(
            text.as_str(),
            Style::default().fg(Color::Red),
        )),
        Some(Status::Information(text)) => Line::from(Span::styled(
            text.as_str(),
            Style::default().fg(Color::Gray),
        )),
        None => Line::from(Span::styled(READY, Style::default().fg(Color::Gray))),
    }
}

fn get_position_content(model: &Model) -> Line<'_> {
    let cursor = &model.editor.cursor;
    let content = format!(
        " {} {}:{} ",
        model.mode,
        cursor.vertical_index + 1,
        cursor.horizontal_index + 1
    );

    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
}
