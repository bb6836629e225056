use std::fmt::Display;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    Command,
    Insert,
    #[default]
    Normal,
}

impl Mode {
    pub fn is_command(&self) -> bool {
        matches!(self, Mode::Command)
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Mode::Insert)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Command => write!(f, "command"),
            Mode::Insert => write!(f, "insert"),
            Mode::Normal => write!(f, "normal"),
        }
    }
}

/// Editable text held as lines split on `\n`. Joining the lines with `\n`
/// yields the original text byte for byte, carriage returns included.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextBuffer {
    pub cursor: Cursor,
    pub lines: Vec<String>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            lines: vec![String::new()],
        }
    }
}

impl TextBuffer {
    pub fn from_content(content: &str) -> Self {
        Self {
            cursor: Cursor::default(),
            lines: split_lines(content),
        }
    }

    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn set_content(&mut self, content: &str) {
        self.lines = split_lines(content);
        self.cursor = Cursor::default();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn current_line(&self) -> Option<&String> {
        self.lines.get(self.cursor.vertical_index)
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(|line| line.to_owned()).collect()
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub horizontal_index: usize,
    pub vertical_index: usize,
}
