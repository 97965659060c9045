use crate::errors::AppError;
use crate::models::TickLog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/ticks.json"))
}

pub async fn load_data(path: &Path) -> TickLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<TickLog>(&bytes) {
            Ok(data) => {
                info!("loaded {} ticks from {}", data.ticks.len(), path.display());
                data
            }
            Err(err) => {
                error!("failed to parse tick store: {err}");
                TickLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => TickLog::default(),
        Err(err) => {
            error!("failed to read tick store: {err}");
            TickLog::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &TickLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
