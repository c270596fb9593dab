use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handler state: the in-memory work log and the file it is
/// mirrored to. Inserts hold the lock across the file write so the file
/// never lags behind a reported success.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub work_log: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, work_log: AppData) -> Self {
        Self {
            data_path,
            work_log: Arc::new(Mutex::new(work_log)),
        }
    }
}
