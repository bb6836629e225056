use std::path::Path;

use crate::{action::Action, model::Model};

use super::{clipboard, file, uid};

#[tracing::instrument(skip(model))]
pub fn execute(cmd: &str, model: &mut Model) -> Vec<Action> {
    let cmd = cmd.trim();
    let cmd_with_args = match cmd.split_once(' ') {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (cmd, ""),
    };

    tracing::debug!("executing command: {:?}", cmd_with_args);

    match cmd_with_args {
        ("", "") => Vec::new(),
        ("copy", "") => {
            clipboard::copy(model);
            Vec::new()
        }
        ("e", path) if !path.is_empty() => file::load(model, Path::new(path)),
        ("file", name) if !name.is_empty() => {
            file::set_filename(model, name);
            Vec::new()
        }
        ("json", "") => {
            uid::export_as_json(model);
            Vec::new()
        }
        ("q", "") => vec![Action::Quit],
        ("sample", "") => {
            uid::insert_template(model);
            Vec::new()
        }
        ("validate", "") => {
            uid::validate(model);
            Vec::new()
        }
        ("w", "") => file::download(model),
        ("w", name) => {
            file::set_filename(model, name);
            file::download(model)
        }
        _ => {
            tracing::warn!("unknown command: {:?}", cmd);
            model.commandline.message = Some(format!("unknown command: {}", cmd));
            Vec::new()
        }
    }
}
