//! REST calls to the work log server.
//!
//! Browser builds (`browser` feature) talk to the server through `gloo-net`.
//! Each call maps the response onto the pure types in `entry` and `summary`,
//! so the only logic here is moving bytes.

pub const WORK_ENTRIES_PATH: &str = "/api/work_entries";
pub const WORK_SUMMARY_PATH: &str = "/api/work_summary";

#[cfg(feature = "browser")]
use crate::entry::{ResponseBody, SubmitError, SubmitOutcome, WorkEntryInput};
#[cfg(feature = "browser")]
use crate::summary::{SummaryError, SummaryView};
#[cfg(feature = "browser")]
use gloo_net::http::Request;

/// `POST /api/work_entries` with the validated entry.
///
/// # Errors
///
/// Returns [`SubmitError`] when the request never completes or a JSON body
/// cannot be decoded. Non-201 statuses are not errors; they come back as
/// [`SubmitOutcome::Rejected`].
#[cfg(feature = "browser")]
pub async fn post_work_entry(input: &WorkEntryInput) -> Result<SubmitOutcome, SubmitError> {
    let resp = Request::post(WORK_ENTRIES_PATH)
        .json(input)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = resp.status();
    let content_type = resp.headers().get("content-type");
    let raw = resp
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let body = ResponseBody::decode(content_type.as_deref(), &raw)?;
    Ok(SubmitOutcome::from_response(status, body))
}

/// `GET /api/work_summary`.
///
/// # Errors
///
/// Returns [`SummaryError`] for transport failures, non-2xx statuses and
/// bodies that are not a summary array.
#[cfg(feature = "browser")]
pub async fn fetch_summary() -> Result<SummaryView, SummaryError> {
    let resp = Request::get(WORK_SUMMARY_PATH)
        .send()
        .await
        .map_err(|e| SummaryError::Transport(e.to_string()))?;

    if !resp.ok() {
        let raw = resp.text().await.unwrap_or_default();
        return Err(SummaryError::from_status(resp.status(), &raw));
    }

    let raw = resp
        .text()
        .await
        .map_err(|e| SummaryError::Transport(e.to_string()))?;
    SummaryView::from_body(&raw)
}
