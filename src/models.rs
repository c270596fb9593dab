use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkEntry {
    pub id: u64,
    pub project_number: String,
    pub worker_name: String,
    pub work_details: Option<String>,
    pub work_time_hours: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub entries: Vec<WorkEntry>,
}

/// A request that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkEntry {
    pub project_number: String,
    pub worker_name: String,
    pub work_details: Option<String>,
    pub work_time_hours: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub project_number: String,
    pub total_hours: f64,
}
