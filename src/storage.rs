use crate::errors::AppError;
use crate::models::AppData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

pub async fn ensure_parent_dir(path: &Path) -> Result<(), std::io::Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}

/// Loads the work log. A missing file is an empty log; a file that cannot be
/// parsed is moved aside to `<path>.corrupt` so the next write cannot
/// clobber it.
///
/// # Errors
///
/// Returns the I/O error when an existing file cannot be read or moved aside.
pub async fn load_data(path: &Path) -> Result<AppData, std::io::Error> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(AppData::default()),
        Err(err) => {
            error!("failed to read data file: {err}");
            return Err(err);
        }
    };

    match serde_json::from_slice::<AppData>(&bytes) {
        Ok(data) => {
            info!(entries = data.entries.len(), "loaded work log from {}", path.display());
            Ok(data)
        }
        Err(err) => {
            let quarantine = sibling(path, ".corrupt");
            error!(
                "failed to parse data file: {err}; moving it to {}",
                quarantine.display()
            );
            fs::rename(path, &quarantine).await?;
            Ok(AppData::default())
        }
    }
}

/// Writes the log through a temp file in the same directory and renames it
/// over the data file, so a crash mid-write leaves the old file intact.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let tmp = sibling(path, ".tmp");
    fs::write(&tmp, payload).await.map_err(AppError::internal)?;
    if let Err(err) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(AppError::internal(err));
    }
    Ok(())
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
