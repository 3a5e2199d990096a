use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/state.json")
}

/// Reads the points file; a missing, unreadable or corrupt file starts the
/// tally over at zero.
pub async fn load_data(path: &Path) -> AppData {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppData::default(),
        Err(err) => {
            error!(path = %path.display(), "points file unreadable, starting from zero: {err}");
            return AppData::default();
        }
    };

    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        error!(path = %path.display(), "points file is not valid JSON, starting from zero: {err}");
        AppData::default()
    })
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let json = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, json).await.map_err(|err| AppError {
        message: format!("could not save points to {}: {err}", path.display()),
        ..AppError::internal(err)
    })
}
