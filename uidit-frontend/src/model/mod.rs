use uidit_buffer::model::{Mode, TextBuffer};

use crate::{settings::Settings, uid::DEFAULT_FILENAME};

use self::clipboard::ClipboardProvider;

pub mod clipboard;

pub struct Model {
    pub clipboard: Option<Box<dyn ClipboardProvider>>,
    pub commandline: CommandLine,
    pub editor: TextBuffer,
    pub filename: String,
    pub key_sequence: String,
    pub mode: Mode,
    pub settings: Settings,
    pub status: Option<Status>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            clipboard: None,
            commandline: CommandLine::default(),
            editor: TextBuffer::default(),
            filename: DEFAULT_FILENAME.to_string(),
            key_sequence: String::new(),
            mode: Mode::default(),
            settings: Settings::default(),
            status: None,
        }
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("clipboard", &self.clipboard.as_ref().map(|_| "system"))
            .field("commandline", &self.commandline)
            .field("editor", &self.editor)
            .field("filename", &self.filename)
            .field("key_sequence", &self.key_sequence)
            .field("mode", &self.mode)
            .field("settings", &self.settings)
            .field("status", &self.status)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct CommandLine {
    pub buffer: TextBuffer,
    pub message: Option<String>,
}

/// Outcome of the last triggered action, replacing any prior one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    Error(String),
    Information(String),
}
