use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{layout::SidebarLayout, model::Model};

const HELP: [(&str, &str); 9] = [
    ("i a o", "edit text"),
    (":e <path>", "load .txt or .json"),
    ("w :w [name]", "download"),
    ("y :copy", "copy to clipboard"),
    ("v :validate", "validate"),
    ("s :sample", "insert sample"),
    ("J :json", "export as json"),
    (":file <name>", "set filename"),
    ("q :q", "quit"),
];

pub fn view(model: &Model, frame: &mut Frame, layout: &SidebarLayout) {
    filename(model, frame, layout.filename);
    preview(model, frame, layout.preview);
    help(frame, layout.help);
}

fn filename(model: &Model, frame: &mut Frame, rect: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Filename ");
    frame.render_widget(Paragraph::new(model.filename.as_str()).block(block), rect);
}

fn preview(model: &Model, frame: &mut Frame, rect: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Preview ");
    let paragraph = if model.editor.is_empty() {
        Paragraph::new(Span::styled(
            "(empty)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let lines: Vec<Line> = model
            .editor
            .lines
            .iter()
            .map(|line| Line::from(line.trim_end_matches('\r').replace('\t', "    ")))
            .collect();

        Paragraph::new(lines)
    };

    frame.render_widget(paragraph.block(block), rect);
}

fn help(frame: &mut Frame, rect: Rect) {
    let key_style = Style::default().fg(Color::Yellow);
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{:<13}", keys), key_style),
                Span::raw(*description),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Help ");
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
