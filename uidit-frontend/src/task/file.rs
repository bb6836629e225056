use std::{io, path::Path};

use tokio::fs;

/// Reads the whole file as text. Invalid utf-8 sequences are replaced
/// instead of failing the read.
pub async fn read_text(path: &Path) -> Result<String, io::Error> {
    let bytes = fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn write_text(path: &Path, content: &str) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(path, content.as_bytes()).await
}
