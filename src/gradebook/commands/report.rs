use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;

pub fn run(records: &RecordStore) -> Result<CmdResult> {
    if records.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No students to display."));
        return Ok(result);
    }

    Ok(CmdResult::default().with_listed_students(records.iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_students_in_store_order() {
        let mut records = RecordStore::new();
        records.add("20", "Zoe").unwrap();
        records.add("3", "Abe").unwrap();

        let result = run(&records).unwrap();
        let ids: Vec<_> = result.listed_students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["20", "3"]);
    }

    #[test]
    fn empty_store_message() {
        let result = run(&RecordStore::new()).unwrap();
        assert!(result.listed_students.is_empty());
        assert_eq!(result.messages[0].content, "No students to display.");
    }
}
