use std::{env, path::PathBuf};

#[derive(Debug)]
pub struct Settings {
    pub download_path: PathBuf,
    pub startup_path: Option<PathBuf>,
    pub startup_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_path: get_default_download_path(),
            startup_path: None,
            startup_url: None,
        }
    }
}

fn get_default_download_path() -> PathBuf {
    match dirs::download_dir() {
        Some(it) => it,
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
