//! Work entry submission: field validation and response interpretation.
//!
//! Everything here is free of DOM and network access so the decision logic
//! can be tested natively; the browser glue lives in `controller`.

use crate::message::Message;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Work entry logged successfully!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Raw values read from the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub project_number: String,
    pub worker_name: String,
    pub work_details: String,
    pub work_time_hours: String,
}

/// Body of `POST /api/work_entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkEntryInput {
    pub project_number: String,
    pub worker_name: String,
    pub work_details: String,
    pub work_time_hours: f64,
}

/// First failing client-side check, in the order they are applied.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project Number is required.")]
    MissingProjectNumber,
    #[error("Worker Name is required.")]
    MissingWorkerName,
    #[error("Work Time (Hours) is required.")]
    MissingWorkTime,
    #[error("Work Time (Hours) must be a positive number.")]
    NonPositiveWorkTime,
}

/// The request could not be completed or its body could not be read.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FormFields {
    /// Trims every field and runs the checks in order, stopping at the first
    /// failure.
    pub fn validate(&self) -> Result<WorkEntryInput, ValidationError> {
        let project_number = self.project_number.trim();
        let worker_name = self.worker_name.trim();
        let work_details = self.work_details.trim();
        let work_time = self.work_time_hours.trim();

        if project_number.is_empty() {
            return Err(ValidationError::MissingProjectNumber);
        }
        if worker_name.is_empty() {
            return Err(ValidationError::MissingWorkerName);
        }
        if work_time.is_empty() {
            return Err(ValidationError::MissingWorkTime);
        }
        let work_time_hours = match work_time.parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours > 0.0 => hours,
            _ => return Err(ValidationError::NonPositiveWorkTime),
        };

        Ok(WorkEntryInput {
            project_number: project_number.to_string(),
            worker_name: worker_name.to_string(),
            work_details: work_details.to_string(),
            work_time_hours,
        })
    }
}

/// The `message` / `error` pair extracted from a server response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ResponseBody {
    /// Reads string `message` and `error` fields from a JSON document.
    /// Other shapes yield an empty body.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };
        Ok(Self {
            message: field("message"),
            error: field("error"),
        })
    }

    /// A plain-text body stands in for both fields.
    pub fn from_text(text: &str) -> Self {
        let text = (!text.is_empty()).then(|| text.to_string());
        Self {
            message: text.clone(),
            error: text,
        }
    }

    /// Picks the decoder from the response's `Content-Type`.
    pub fn decode(content_type: Option<&str>, raw: &str) -> Result<Self, serde_json::Error> {
        if is_json(content_type) {
            Self::from_json(raw)
        } else {
            Ok(Self::from_text(raw))
        }
    }
}

pub fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.contains("application/json"))
}

/// What the page should do once the server has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(String),
    Rejected(String),
}

impl SubmitOutcome {
    /// Only `201 Created` counts as success.
    pub fn from_response(status: u16, body: ResponseBody) -> Self {
        if status == 201 {
            Self::Created(body.message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
        } else {
            Self::Rejected(
                body.error
                    .or(body.message)
                    .unwrap_or_else(|| format!("Error {status}: Could not log entry.")),
            )
        }
    }

    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn message(&self) -> Message {
        match self {
            Self::Created(text) => Message::success(text.clone()),
            Self::Rejected(text) => Message::error(text.clone()),
        }
    }
}
