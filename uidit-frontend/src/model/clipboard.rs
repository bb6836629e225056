use arboard::Clipboard;

pub trait ClipboardProvider {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

impl ClipboardProvider for Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        self.set_text(text).map_err(|err| err.to_string())
    }
}

pub fn resolve_system_clipboard() -> Option<Box<dyn ClipboardProvider>> {
    match Clipboard::new() {
        Ok(clipboard) => Some(Box::new(clipboard)),
        Err(err) => {
            tracing::warn!("clipboard creation failed: {:?}", err);
            None
        }
    }
}
