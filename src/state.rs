use crate::models::TickLog;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub ticks: Arc<Mutex<TickLog>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, ticks: TickLog) -> Self {
        Self {
            data_path,
            ticks: Arc::new(Mutex::new(ticks)),
        }
    }
}
