use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UpdateError};
use crate::records::RecordStore;

pub fn run(records: &mut RecordStore, id: &str, subject: &str, score: &str) -> Result<CmdResult> {
    records.update_grade(id, subject, score)?;

    let student = records
        .find(id)
        .cloned()
        .ok_or_else(|| UpdateError::NotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Grade updated for {} in {}.",
        student.name,
        subject.trim()
    )));
    Ok(result.with_affected_students(vec![student]))
}
