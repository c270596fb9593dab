use crate::errors::EntryError;
use crate::models::{AppData, NewWorkEntry, WorkEntry};
use chrono::Utc;
use serde_json::{Map, Value};

/// Checks a decoded request body and extracts a storable entry.
///
/// `None` stands for a body that was absent or not valid JSON.
pub fn validate_entry(body: Option<&Value>) -> Result<NewWorkEntry, EntryError> {
    let fields = match body {
        Some(Value::Object(fields)) if !fields.is_empty() => fields,
        _ => return Err(EntryError::MissingBody),
    };

    let project_number = text_field(fields, "project_number").ok_or(EntryError::MissingProjectNumber)?;
    let worker_name = text_field(fields, "worker_name").ok_or(EntryError::MissingWorkerName)?;
    let work_time_hours = work_time(fields.get("work_time_hours"))?;
    let work_details = match fields.get("work_details") {
        Some(Value::String(details)) => Some(details.clone()),
        _ => None,
    };

    Ok(NewWorkEntry {
        project_number,
        worker_name,
        work_details,
        work_time_hours,
    })
}

/// Appends a validated entry, assigning the next id and the current UTC time.
pub fn insert_entry(data: &mut AppData, entry: NewWorkEntry) -> &WorkEntry {
    data.next_id = data.next_id.saturating_add(1);
    data.entries.push(WorkEntry {
        id: data.next_id,
        project_number: entry.project_number,
        worker_name: entry.worker_name,
        work_details: entry.work_details,
        work_time_hours: entry.work_time_hours,
        timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    });
    &data.entries[data.entries.len() - 1]
}

/// Undoes the most recent [`insert_entry`] after a failed write.
pub fn rollback_last(data: &mut AppData) {
    if data.entries.pop().is_some() {
        data.next_id = data.next_id.saturating_sub(1);
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}

fn work_time(value: Option<&Value>) -> Result<f64, EntryError> {
    let hours = match value {
        None | Some(Value::Null) => return Err(EntryError::MissingWorkTime),
        Some(Value::Number(number)) => number.as_f64().ok_or(EntryError::InvalidWorkTime)?,
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| EntryError::InvalidWorkTime)?,
        Some(_) => return Err(EntryError::InvalidWorkTime),
    };

    if !hours.is_finite() {
        return Err(EntryError::InvalidWorkTime);
    }
    if hours <= 0.0 {
        return Err(EntryError::NonPositiveWorkTime);
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "project_number": "P-100",
            "worker_name": "Dana",
            "work_details": "framing",
            "work_time_hours": 2.5
        })
    }

    #[test]
    fn accepts_complete_entry() {
        let entry = validate_entry(Some(&valid_body())).unwrap();
        assert_eq!(entry.project_number, "P-100");
        assert_eq!(entry.worker_name, "Dana");
        assert_eq!(entry.work_details.as_deref(), Some("framing"));
        assert!((entry.work_time_hours - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_or_empty_body_is_rejected() {
        assert_eq!(validate_entry(None), Err(EntryError::MissingBody));
        assert_eq!(validate_entry(Some(&json!({}))), Err(EntryError::MissingBody));
        assert_eq!(validate_entry(Some(&json!([1, 2]))), Err(EntryError::MissingBody));
    }

    #[test]
    fn checks_run_in_order() {
        let body = json!({ "project_number": "", "worker_name": "", "work_time_hours": null });
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::MissingProjectNumber));

        let body = json!({ "project_number": "P1", "worker_name": "", "work_time_hours": null });
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::MissingWorkerName));

        let body = json!({ "project_number": "P1", "worker_name": "Dana" });
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::MissingWorkTime));
    }

    #[test]
    fn numeric_identifiers_must_be_non_zero() {
        let body = json!({ "project_number": 0, "worker_name": "Dana", "work_time_hours": 1 });
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::MissingProjectNumber));

        let body = json!({ "project_number": 4711, "worker_name": 0.0, "work_time_hours": 1 });
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::MissingWorkerName));

        let body = json!({ "project_number": 4711, "worker_name": "Dana", "work_time_hours": 1 });
        assert_eq!(validate_entry(Some(&body)).unwrap().project_number, "4711");
    }

    #[test]
    fn work_time_must_be_a_positive_number() {
        let mut body = valid_body();
        body["work_time_hours"] = json!("abc");
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::InvalidWorkTime));

        body["work_time_hours"] = json!(0);
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::NonPositiveWorkTime));

        body["work_time_hours"] = json!(-1.5);
        assert_eq!(validate_entry(Some(&body)), Err(EntryError::NonPositiveWorkTime));

        body["work_time_hours"] = json!(" 4.75 ");
        let entry = validate_entry(Some(&body)).unwrap();
        assert!((entry.work_time_hours - 4.75).abs() < f64::EPSILON);
    }

    #[test]
    fn work_details_are_optional() {
        let body = json!({ "project_number": "P1", "worker_name": "Dana", "work_time_hours": 1 });
        let entry = validate_entry(Some(&body)).unwrap();
        assert_eq!(entry.work_details, None);
    }

    #[test]
    fn insert_and_rollback_keep_ids_consistent() {
        let mut data = AppData::default();
        let entry = validate_entry(Some(&valid_body())).unwrap();

        let stored_id = insert_entry(&mut data, entry.clone()).id;
        assert_eq!(stored_id, 1);

        insert_entry(&mut data, entry.clone());
        rollback_last(&mut data);
        assert_eq!(data.entries.len(), 1);
        assert_eq!(insert_entry(&mut data, entry).id, 2);
    }
}
