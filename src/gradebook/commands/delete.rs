use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DeleteError, Result};
use crate::records::RecordStore;

/// Deletes a student once the caller has gathered confirmation. A declined
/// confirmation is a normal outcome and comes back as an info message.
pub fn run(records: &mut RecordStore, id: &str, confirmed: bool) -> Result<CmdResult> {
    match records.delete(id, confirmed) {
        Ok(student) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Student record deleted successfully: {} (ID: {})",
                student.name, student.id
            )));
            Ok(result.with_affected_students(vec![student]))
        }
        Err(DeleteError::Cancelled) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Deletion cancelled."));
            Ok(result)
        }
        Err(e) => Err(e.into()),
    }
}
