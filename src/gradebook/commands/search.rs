use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GradebookError, Result};
use crate::records::RecordStore;

/// Exact-id lookup. Misses are reported as messages, not errors.
pub fn run(records: &RecordStore, id: &str) -> Result<CmdResult> {
    if records.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No students to search."));
        return Ok(result);
    }

    if id.is_empty() {
        return Err(GradebookError::Api("Search term cannot be empty.".into()));
    }

    match records.find(id) {
        Some(student) => Ok(CmdResult::default().with_listed_students(vec![student.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("No matching students found."));
            Ok(result)
        }
    }
}
