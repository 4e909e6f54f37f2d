//! # Record Store
//!
//! The in-memory, authoritative collection of students for the lifetime of a
//! process. It enforces the structural rules of the data model:
//!
//! - student ids are unique and made of decimal digits
//! - names and subjects are non-empty and never all digits
//! - every stored score lies in `0..=100`
//!
//! Iteration follows insertion order. The order is kept in an explicit index
//! next to the `id -> Student` map, and it is the order the codec writes lines
//! in, so reports and the persisted file stay stable across runs.
//!
//! Nothing here touches the filesystem. Persisting is an explicit step owned by
//! the caller (see [`crate::api`]).

use crate::error::{AddError, DeleteError, UpdateError};
use crate::model::{is_all_digits, Student, MAX_SCORE, MIN_SCORE};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    students: HashMap<String, Student>,
    order: Vec<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `id` could be added: non-empty, digits only, not taken.
    pub fn check_new_id(&self, id: &str) -> Result<(), AddError> {
        if id.is_empty() {
            return Err(AddError::EmptyId);
        }
        if !is_all_digits(id) {
            return Err(AddError::NonNumericId(id.to_string()));
        }
        if self.students.contains_key(id) {
            return Err(AddError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    /// Adds a student without grades. The name is stored trimmed.
    pub fn add(&mut self, id: &str, name: &str) -> Result<(), AddError> {
        self.check_new_id(id)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AddError::EmptyName);
        }
        if is_all_digits(name) {
            return Err(AddError::NumericName(name.to_string()));
        }
        if has_control_char(name) {
            return Err(AddError::ControlCharName(name.to_string()));
        }

        self.order.push(id.to_string());
        self.students
            .insert(id.to_string(), Student::new(id, name));
        Ok(())
    }

    /// Records `score` (raw text, see [`parse_score`]) for `subject`,
    /// replacing any previous score for the same subject.
    pub fn update_grade(&mut self, id: &str, subject: &str, score: &str) -> Result<(), UpdateError> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| UpdateError::NotFound(id.to_string()))?;

        let subject = subject.trim();
        if subject.is_empty() {
            return Err(UpdateError::EmptySubject);
        }
        if is_all_digits(subject) {
            return Err(UpdateError::NumericSubject(subject.to_string()));
        }
        if has_control_char(subject) {
            return Err(UpdateError::ControlCharSubject(subject.to_string()));
        }

        let score = parse_score(score)?;
        student.grades.set(subject, score);
        Ok(())
    }

    /// Removes a student. The caller gathers confirmation; an unconfirmed
    /// delete of an existing student returns `Cancelled` and changes nothing.
    pub fn delete(&mut self, id: &str, confirmed: bool) -> Result<Student, DeleteError> {
        if !self.students.contains_key(id) {
            return Err(DeleteError::NotFound(id.to_string()));
        }
        if !confirmed {
            return Err(DeleteError::Cancelled);
        }

        self.order.retain(|existing| existing != id);
        self.students
            .remove(id)
            .ok_or_else(|| DeleteError::NotFound(id.to_string()))
    }

    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.order.iter().filter_map(|id| self.students.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a student read back from persisted text. Unlike [`add`](Self::add)
    /// this performs no validation and a repeated id replaces the earlier
    /// record in place.
    pub(crate) fn restore(&mut self, student: Student) {
        if !self.students.contains_key(&student.id) {
            self.order.push(student.id.clone());
        }
        self.students.insert(student.id.clone(), student);
    }
}

/// Line breaks and other control characters would split a record across
/// lines in the persisted file.
fn has_control_char(s: &str) -> bool {
    s.chars().any(char::is_control)
}

/// Parses grade input as a float, truncated toward zero, then checked against
/// `0..=100`. So `"89.9"` is 89 and `"-0.5"` is 0, while `"101"`, `"-1"`,
/// `"abc"` and `"inf"` are rejected.
pub fn parse_score(text: &str) -> Result<u8, UpdateError> {
    let invalid = || UpdateError::InvalidScore(text.to_string());

    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    let truncated = value.trunc();
    if truncated < f64::from(MIN_SCORE) || truncated > f64::from(MAX_SCORE) {
        return Err(invalid());
    }
    Ok(truncated as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_alice() -> RecordStore {
        let mut store = RecordStore::new();
        store.add("101", "Alice").unwrap();
        store
    }

    #[test]
    fn add_inserts_student_without_grades() {
        let store = store_with_alice();
        let alice = store.find("101").unwrap();
        assert_eq!(alice.name, "Alice");
        assert!(alice.grades.is_empty());
    }

    #[test]
    fn add_validates_in_order() {
        let mut store = store_with_alice();
        assert_eq!(store.add("", ""), Err(AddError::EmptyId));
        assert_eq!(
            store.add("10a", ""),
            Err(AddError::NonNumericId("10a".into()))
        );
        assert_eq!(
            store.add("101", ""),
            Err(AddError::DuplicateId("101".into()))
        );
        assert_eq!(store.add("102", ""), Err(AddError::EmptyName));
        assert_eq!(store.add("102", "   "), Err(AddError::EmptyName));
        assert_eq!(
            store.add("102", "2024"),
            Err(AddError::NumericName("2024".into()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_add_leaves_store_unmodified() {
        let mut store = store_with_alice();
        store.update_grade("101", "Math", "70").unwrap();
        let before = store.clone();

        assert_eq!(
            store.add("101", "Mallory"),
            Err(AddError::DuplicateId("101".into()))
        );
        assert_eq!(store, before);
        assert_eq!(store.find("101").unwrap().name, "Alice");
    }

    #[test]
    fn update_grade_rejects_out_of_range_and_garbage() {
        let mut store = store_with_alice();
        for bad in ["-1", "101", "abc", "", "NaN", "inf"] {
            assert_eq!(
                store.update_grade("101", "Math", bad),
                Err(UpdateError::InvalidScore(bad.into())),
                "score {:?} should be rejected",
                bad
            );
        }
        assert!(store.find("101").unwrap().grades.is_empty());
    }

    #[test]
    fn update_grade_accepts_bounds() {
        let mut store = store_with_alice();
        store.update_grade("101", "Math", "0").unwrap();
        store.update_grade("101", "Art", "100").unwrap();

        let grades = &store.find("101").unwrap().grades;
        assert_eq!(grades.get("Math"), Some(0));
        assert_eq!(grades.get("Art"), Some(100));
    }

    #[test]
    fn update_grade_truncates_fractions() {
        let mut store = store_with_alice();
        store.update_grade("101", "Math", "89.9").unwrap();
        store.update_grade("101", "Art", "100.7").unwrap();
        store.update_grade("101", "Music", "-0.5").unwrap();

        let grades = &store.find("101").unwrap().grades;
        assert_eq!(grades.get("Math"), Some(89));
        assert_eq!(grades.get("Art"), Some(100));
        assert_eq!(grades.get("Music"), Some(0));
    }

    #[test]
    fn update_grade_is_last_write_wins() {
        let mut store = store_with_alice();
        store.update_grade("101", "Math", "50").unwrap();
        store.update_grade("101", "Math", "75").unwrap();

        let grades = &store.find("101").unwrap().grades;
        assert_eq!(grades.len(), 1);
        assert_eq!(grades.get("Math"), Some(75));
    }

    #[test]
    fn update_grade_checks_student_then_subject() {
        let mut store = store_with_alice();
        assert_eq!(
            store.update_grade("999", "", "abc"),
            Err(UpdateError::NotFound("999".into()))
        );
        assert_eq!(
            store.update_grade("101", "", "abc"),
            Err(UpdateError::EmptySubject)
        );
        assert_eq!(
            store.update_grade("101", "42", "80"),
            Err(UpdateError::NumericSubject("42".into()))
        );
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut store = store_with_alice();
        assert_eq!(store.delete("101", false), Err(DeleteError::Cancelled));
        assert!(store.find("101").is_some());

        let removed = store.delete("101", true).unwrap();
        assert_eq!(removed.name, "Alice");
        assert!(store.find("101").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn delete_unknown_is_not_found_even_unconfirmed() {
        let mut store = store_with_alice();
        assert_eq!(
            store.delete("555", false),
            Err(DeleteError::NotFound("555".into()))
        );
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut store = RecordStore::new();
        for (id, name) in [("30", "Cy"), ("4", "Dee"), ("100", "Al"), ("7", "Bo")] {
            store.add(id, name).unwrap();
        }
        store.delete("4", true).unwrap();
        store.add("4", "Dee").unwrap();

        let ids: Vec<_> = store.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["30", "100", "7", "4"]);
    }

    #[test]
    fn restore_replaces_in_place() {
        let mut store = RecordStore::new();
        store.restore(Student::new("1", "First"));
        store.restore(Student::new("2", "Second"));
        store.restore(Student::new("1", "Again"));

        let names: Vec<_> = store.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Again", "Second"]);
    }

    #[test]
    fn names_and_subjects_are_trimmed_before_checks() {
        let mut store = RecordStore::new();
        assert_eq!(
            store.add("1", " 123"),
            Err(AddError::NumericName("123".into()))
        );
        store.add("2", "  Ann Lee ").unwrap();
        assert_eq!(store.find("2").unwrap().name, "Ann Lee");

        assert_eq!(
            store.update_grade("2", " 42", "80"),
            Err(UpdateError::NumericSubject("42".into()))
        );
        store.update_grade("2", " Math ", "80").unwrap();
        assert_eq!(store.find("2").unwrap().grades.get("Math"), Some(80));
    }

    #[test]
    fn rejects_line_breaks_in_names_and_subjects() {
        let mut store = store_with_alice();
        assert_eq!(
            store.add("1", "Ann\nBee"),
            Err(AddError::ControlCharName("Ann\nBee".into()))
        );
        assert_eq!(
            store.add("1", "Ann\rBee"),
            Err(AddError::ControlCharName("Ann\rBee".into()))
        );
        assert_eq!(
            store.update_grade("101", "Math\nArt", "80"),
            Err(UpdateError::ControlCharSubject("Math\nArt".into()))
        );
        assert_eq!(store.len(), 1);
        assert!(store.find("101").unwrap().grades.is_empty());
    }

    #[test]
    fn check_new_id_runs_id_rules_only() {
        let store = store_with_alice();
        assert_eq!(store.check_new_id(""), Err(AddError::EmptyId));
        assert_eq!(store.check_new_id("x1"), Err(AddError::NonNumericId("x1".into())));
        assert_eq!(store.check_new_id("101"), Err(AddError::DuplicateId("101".into())));
        assert_eq!(store.check_new_id("102"), Ok(()));
    }
}
