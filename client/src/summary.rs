//! Hours-per-project summary: response handling and the table view model.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const LOADING_TEXT: &str = "Loading summary...";
pub const NO_DATA_TEXT: &str = "No work summary data available.";
pub const TABLE_CLASS: &str = "summary-table";
pub const HEADERS: [&str; 2] = ["Project Number", "Total Hours"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryRow {
    pub project_number: String,
    pub total_hours: f64,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    /// Non-2xx response, with the server's `error` field when it sent one.
    #[error("{}", status_text(*.status, .message.as_deref()))]
    Status { status: u16, message: Option<String> },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl SummaryError {
    /// Builds the failure for a non-2xx response from its raw body.
    pub fn from_status(status: u16, raw: &str) -> Self {
        let message = serde_json::from_str::<Value>(raw).ok().and_then(|body| {
            body.get("error")
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        });
        Self::Status { status, message }
    }

    /// Text shown inside the summary container.
    pub fn display_text(&self) -> String {
        format!("Error loading summary: {self}")
    }
}

fn status_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("HTTP error! status: {status}"),
    }
}

/// What the summary container shows after a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryView {
    NoData,
    /// Display-ready cells: project number and hours with one decimal.
    Table(Vec<[String; 2]>),
}

impl SummaryView {
    pub fn from_rows(rows: Option<Vec<SummaryRow>>) -> Self {
        match rows {
            Some(rows) if !rows.is_empty() => Self::Table(
                rows.into_iter()
                    .map(|row| [row.project_number, format_hours(row.total_hours)])
                    .collect(),
            ),
            _ => Self::NoData,
        }
    }

    /// Decodes a 2xx body; `null` counts as an empty list.
    pub fn from_body(raw: &str) -> Result<Self, SummaryError> {
        let rows: Option<Vec<SummaryRow>> = serde_json::from_str(raw)?;
        Ok(Self::from_rows(rows))
    }
}

/// Formats hours with exactly one decimal place. Exact ties such as `3.25`
/// round away from zero, matching how browsers format fixed-point numbers.
pub fn format_hours(hours: f64) -> String {
    let quarters = hours * 4.0;
    let is_tie = quarters.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if !is_tie {
        return format!("{hours:.1}");
    }

    // An odd quarter count implies |hours| < 2^51, so it fits an i64 exactly.
    #[allow(clippy::cast_possible_truncation)]
    let quarters = quarters as i64;
    let tenths = (5 * quarters + quarters.signum()) / 2;
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.unsigned_abs();
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_have_one_decimal() {
        assert_eq!(format_hours(3.25), "3.3");
        assert_eq!(format_hours(7.75), "7.8");
        assert_eq!(format_hours(2.0), "2.0");
        assert_eq!(format_hours(1.04), "1.0");
        assert_eq!(format_hours(12.5), "12.5");
        assert_eq!(format_hours(0.25), "0.3");
        assert_eq!(format_hours(-3.25), "-3.3");
    }

    #[test]
    fn large_ties_round_exactly() {
        assert_eq!(format_hours(1e15 + 0.25), "1000000000000000.3");
        assert_eq!(format_hours(1e15 + 0.75), "1000000000000000.8");
    }

    #[test]
    fn empty_or_null_body_shows_no_data() {
        assert_eq!(SummaryView::from_body("[]").unwrap(), SummaryView::NoData);
        assert_eq!(SummaryView::from_body("null").unwrap(), SummaryView::NoData);
    }

    #[test]
    fn rows_become_formatted_cells() {
        let view = SummaryView::from_body(r#"[{"project_number":"P1","total_hours":3.25}]"#).unwrap();
        assert_eq!(view, SummaryView::Table(vec![["P1".to_string(), "3.3".to_string()]]));
    }

    #[test]
    fn rows_keep_server_order() {
        let view = SummaryView::from_body(
            r#"[{"project_number":"B","total_hours":1},{"project_number":"A","total_hours":2.5}]"#,
        )
        .unwrap();
        let SummaryView::Table(cells) = view else {
            panic!("expected a table");
        };
        assert_eq!(cells[0][0], "B");
        assert_eq!(cells[1], ["A".to_string(), "2.5".to_string()]);
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = SummaryView::from_body(r#"{"project_number":"P1"}"#).unwrap_err();
        assert!(matches!(err, SummaryError::Decode(_)));
        assert!(err.display_text().starts_with("Error loading summary: "));
    }

    #[test]
    fn failed_status_uses_server_error_when_present() {
        let err = SummaryError::from_status(500, r#"{"error":"database offline"}"#);
        assert_eq!(err.display_text(), "Error loading summary: database offline");
    }

    #[test]
    fn failed_status_falls_back_to_status_code() {
        let err = SummaryError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.display_text(), "Error loading summary: HTTP error! status: 502");

        let err = SummaryError::from_status(404, r#"{"detail":"missing"}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
