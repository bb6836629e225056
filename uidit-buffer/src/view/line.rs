use ratatui::{
    style::{Color, Style},
    text::Line,
};

use crate::model::Mode;

pub fn get_styled_line<'a>(
    mode: &Mode,
    content: &str,
    horizontal_offset: usize,
    is_cursor_line: bool,
) -> Line<'a> {
    let visible: String = content
        .trim_end_matches('\r')
        .chars()
        .skip(horizontal_offset)
        .map(|c| if c == '\t' { ' ' } else { c })
        .collect();

    if is_cursor_line && mode == &Mode::Normal {
        Line::styled(visible, Style::default().bg(Color::DarkGray))
    } else {
        Line::raw(visible)
    }
}
