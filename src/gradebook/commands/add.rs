use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GradebookError, Result};
use crate::records::RecordStore;

pub fn run(records: &mut RecordStore, id: &str, name: &str) -> Result<CmdResult> {
    records.add(id, name)?;

    let student = records
        .find(id)
        .cloned()
        .ok_or_else(|| GradebookError::Api(format!("Student {} vanished after insert", id)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student '{}' added successfully.",
        student.name
    )));
    Ok(result.with_affected_students(vec![student]))
}
