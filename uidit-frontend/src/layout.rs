use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub editor: Rect,
    pub sidebar: SidebarLayout,
    pub statusline: Rect,
    pub commandline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(rect);

        let surface = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(Constraint::from_ratios([(2, 3), (1, 3)]))
            .split(main[0]);

        Self {
            editor: surface[0],
            sidebar: SidebarLayout::new(surface[1]),
            statusline: main[1],
            commandline: main[2],
        }
    }
}

#[derive(Clone, Debug)]
pub struct SidebarLayout {
    pub filename: Rect,
    pub preview: Rect,
    pub help: Rect,
}

impl SidebarLayout {
    pub fn new(rect: Rect) -> Self {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Percentage(100),
                Constraint::Length(11),
            ])
            .split(rect);

        Self {
            filename: layout[0],
            preview: layout[1],
            help: layout[2],
        }
    }
}

#[derive(Clone, Debug)]
pub struct CommandLineLayout {
    pub buffer: Rect,
    pub key_sequence: Rect,
}

impl CommandLineLayout {
    pub fn new(rect: Rect, key_sequence_length: u16) -> Self {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(key_sequence_length),
            ])
            .split(rect);

        Self {
            buffer: layout[0],
            key_sequence: layout[1],
        }
    }
}
