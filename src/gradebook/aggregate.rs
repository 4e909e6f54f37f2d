//! Averages over the record store.
//!
//! Results are the unrounded arithmetic mean; rounding is left to the
//! presentation layer.

use crate::error::AvgError;
use crate::model::Student;
use crate::records::RecordStore;

/// Mean of one student's scores. A student without grades yields `0.0`, which
/// callers tell apart from a missing student by the `Err(NotFound)` case.
pub fn average_for_student(records: &RecordStore, id: &str) -> Result<f64, AvgError> {
    let student = records
        .find(id)
        .ok_or_else(|| AvgError::NotFound(id.to_string()))?;

    Ok(student_mean(student))
}

/// Mean of the student's scores, `0.0` without grades.
pub fn student_mean(student: &Student) -> f64 {
    mean(student.grades.scores()).unwrap_or(0.0)
}

/// Mean of every score recorded under `subject` across all students, matching
/// subject names case-insensitively.
pub fn average_for_subject(records: &RecordStore, subject: &str) -> Result<f64, AvgError> {
    let wanted = subject.to_lowercase();

    let scores = records.iter().flat_map(|student| {
        student
            .grades
            .iter()
            .filter(|g| g.subject.to_lowercase() == wanted)
            .map(|g| g.score)
    });

    mean(scores).ok_or_else(|| AvgError::NoData(subject.to_string()))
}

fn mean(scores: impl Iterator<Item = u8>) -> Option<f64> {
    let (total, count) = scores.fold((0u64, 0u64), |(total, count), score| {
        (total + u64::from(score), count + 1)
    });

    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}
