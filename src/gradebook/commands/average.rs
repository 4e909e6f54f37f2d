use crate::aggregate::{average_for_student, average_for_subject};
use crate::commands::{AverageReport, AverageScope, CmdMessage, CmdResult};
use crate::error::{AvgError, GradebookError, Result};
use crate::records::RecordStore;

pub fn student(records: &RecordStore, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(GradebookError::Api("Please enter student ID.".into()));
    }

    let value = average_for_student(records, id)?;
    let student = records
        .find(id)
        .ok_or_else(|| AvgError::NotFound(id.to_string()))?;

    let report = AverageReport {
        scope: AverageScope::Student,
        label: student.name.clone(),
        value,
        samples: student.grades.len(),
    };

    let mut result = CmdResult::default();
    if report.samples == 0 {
        result.add_message(CmdMessage::info("No grades available for this student."));
    }
    Ok(result.with_average(report))
}

pub fn subject(records: &RecordStore, subject: &str) -> Result<CmdResult> {
    if subject.is_empty() {
        return Err(GradebookError::Api("Please enter the subject name.".into()));
    }

    match average_for_subject(records, subject) {
        Ok(value) => {
            let wanted = subject.to_lowercase();
            let samples = records
                .iter()
                .flat_map(|s| s.grades.iter())
                .filter(|g| g.subject.to_lowercase() == wanted)
                .count();

            Ok(CmdResult::default().with_average(AverageReport {
                scope: AverageScope::Subject,
                label: wanted,
                value,
                samples,
            }))
        }
        Err(AvgError::NoData(_)) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("No grades available for this subject."));
            Ok(result)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> RecordStore {
        let mut records = RecordStore::new();
        records.add("101", "Alice").unwrap();
        records.update_grade("101", "Science", "90").unwrap();
        records.update_grade("101", "Math", "70").unwrap();
        records.add("102", "Bob").unwrap();
        records.update_grade("102", "math", "100").unwrap();
        records.add("103", "Cy").unwrap();
        records
    }

    #[test]
    fn student_average_report() {
        let result = student(&records(), "101").unwrap();
        let avg = result.average.unwrap();
        assert_eq!(avg.scope, AverageScope::Student);
        assert_eq!(avg.label, "Alice");
        assert_eq!(avg.value, 80.0);
        assert_eq!(avg.samples, 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn student_without_grades_gets_sentinel_and_message() {
        let result = student(&records(), "103").unwrap();
        let avg = result.average.unwrap();
        assert_eq!(avg.value, 0.0);
        assert_eq!(avg.samples, 0);
        assert_eq!(
            result.messages[0].content,
            "No grades available for this student."
        );
    }

    #[test]
    fn unknown_student_is_an_error() {
        let err = student(&records(), "404").unwrap_err();
        assert!(matches!(err, GradebookError::Average(AvgError::NotFound(_))));
    }

    #[test]
    fn subject_average_counts_matches_case_insensitively() {
        let result = subject(&records(), "MATH").unwrap();
        let avg = result.average.unwrap();
        assert_eq!(avg.label, "math");
        assert_eq!(avg.value, 85.0);
        assert_eq!(avg.samples, 2);
    }

    #[test]
    fn subject_without_data_is_a_message() {
        let result = subject(&records(), "Art").unwrap();
        assert!(result.average.is_none());
        assert_eq!(
            result.messages[0].content,
            "No grades available for this subject."
        );
    }
}
