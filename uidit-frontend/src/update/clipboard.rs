use crate::model::{Model, Status};

pub fn copy(model: &mut Model) {
    let content = model.editor.content();
    let result = match model.clipboard.as_mut() {
        Some(clipboard) => clipboard.write_text(&content),
        None => Err("clipboard not available".to_string()),
    };

    model.status = match result {
        Ok(()) => Some(Status::Information("Copied to clipboard".to_string())),
        Err(error) => {
            tracing::warn!("copy to clipboard failed: {}", error);
            Some(Status::Error(format!("Copy failed: {}", error)))
        }
    };
}
