use std::path::{Path, PathBuf};

use crate::{
    action::Action,
    model::{Model, Status},
    task::Task,
    uid::DEFAULT_FILENAME,
};

const ACCEPTED_EXTENSIONS: [&str; 2] = ["json", "txt"];
const REJECTED_EXTENSION: &str = "File read error: only .txt and .json files are accepted";

#[tracing::instrument(skip(model))]
pub fn load(model: &mut Model, path: &Path) -> Vec<Action> {
    let path = expand_home(path);
    if !is_accepted(&path) {
        tracing::warn!("rejected file with unaccepted extension: {:?}", path);
        model.status = Some(Status::Error(REJECTED_EXTENSION.to_string()));
        return Vec::new();
    }

    vec![Action::Task(Task::LoadFile(path))]
}

pub fn loaded(model: &mut Model, path: &Path, content: &str) {
    let name = get_file_name(path);
    tracing::info!("loaded file {:?}", path);

    model.editor.set_content(content);
    model.status = Some(Status::Information(format!("Loaded {}", name)));
    model.filename = name;
}

pub fn load_failed(model: &mut Model, path: &Path, error: &str) {
    tracing::warn!("loading file {:?} failed: {}", path, error);
    model.status = Some(Status::Error(format!("File read error: {}", error)));
}

pub fn set_filename(model: &mut Model, name: &str) {
    model.filename = name.to_owned();
}

#[tracing::instrument(skip(model))]
pub fn download(model: &mut Model) -> Vec<Action> {
    let path = model.settings.download_path.join(get_download_name(&model.filename));
    vec![Action::Task(Task::SaveFile(path, model.editor.content()))]
}

pub fn downloaded(model: &mut Model, path: &Path) {
    tracing::info!("downloaded file to {:?}", path);
    model.status = Some(Status::Information("File downloaded".to_string()));
}

pub fn download_failed(model: &mut Model, path: &Path, error: &str) {
    tracing::warn!("downloading file to {:?} failed: {}", path, error);
    model.status = Some(Status::Error(format!("Download failed: {}", error)));
}

fn is_accepted(path: &Path) -> bool {
    path.extension()
        .map(|extension| extension.to_string_lossy().to_lowercase())
        .is_some_and(|extension| ACCEPTED_EXTENSIONS.contains(&extension.as_str()))
}

fn get_file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.to_string_lossy().to_string(),
    }
}

/// Only the last path component of the filename is used, so downloads always
/// land inside the download directory.
fn get_download_name(filename: &str) -> String {
    let name = Path::new(filename.trim())
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_FILENAME.to_string(),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
