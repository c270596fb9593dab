use crate::models::{AppData, ProjectSummary};
use std::collections::BTreeMap;

/// Totals logged hours per project number, ordered by project number.
pub fn build_summary(data: &AppData) -> Vec<ProjectSummary> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in &data.entries {
        *totals.entry(entry.project_number.as_str()).or_insert(0.0) += entry.work_time_hours;
    }

    totals
        .into_iter()
        .map(|(project_number, total_hours)| ProjectSummary {
            project_number: project_number.to_string(),
            total_hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkEntry;

    fn entry(id: u64, project: &str, hours: f64) -> WorkEntry {
        WorkEntry {
            id,
            project_number: project.to_string(),
            worker_name: "Sam".to_string(),
            work_details: None,
            work_time_hours: hours,
            timestamp: "2026-01-05 08:00:00".to_string(),
        }
    }

    #[test]
    fn empty_log_has_no_rows() {
        assert!(build_summary(&AppData::default()).is_empty());
    }

    #[test]
    fn hours_are_grouped_and_sorted_by_project() {
        let data = AppData {
            next_id: 4,
            entries: vec![
                entry(1, "P2", 1.5),
                entry(2, "P1", 2.0),
                entry(3, "P2", 0.75),
                entry(4, "A9", 8.0),
            ],
        };

        let summary = build_summary(&data);
        let projects: Vec<&str> = summary.iter().map(|row| row.project_number.as_str()).collect();
        assert_eq!(projects, ["A9", "P1", "P2"]);
        assert!((summary[2].total_hours - 2.25).abs() < f64::EPSILON);
    }
}
