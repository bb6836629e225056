use crate::{
    action::Action,
    model::{Model, Status},
    query,
};

use super::file;

/// Applies the launch settings: the url prefill first, then the startup
/// file whose load finishes asynchronously and therefore wins.
pub fn initialize(model: &mut Model) -> Vec<Action> {
    if let Some(url) = model.settings.startup_url.clone() {
        prefill_from_url(model, &url);
    }

    match model.settings.startup_path.clone() {
        Some(path) => file::load(model, &path),
        None => Vec::new(),
    }
}

pub fn prefill_from_url(model: &mut Model, url: &str) {
    match query::get_uid(url) {
        Ok(Some(uid)) if !uid.is_empty() => {
            model.editor.set_content(&uid);
            model.status = Some(Status::Information(
                "Loaded UID from URL parameter".to_string(),
            ));
        }
        Ok(_) => tracing::debug!("no uid parameter in url"),
        Err(error) => tracing::debug!("decoding uid parameter failed: {}", error),
    }
}
