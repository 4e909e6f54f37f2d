//! # Flat-File Codec
//!
//! Converts a [`RecordStore`] to and from its persisted text form, one student
//! per line:
//!
//! ```text
//! id,name,subject1:score1,subject2:score2,...
//! ```
//!
//! Fields are not escaped. A name or subject containing `,` or `:` does not
//! survive a round trip; [`encode`] logs a warning when it writes one.
//!
//! Decoding is tolerant: it never fails. Problems are isolated to the smallest
//! unit possible (a single `subject:score` pair, or a single line) and reported
//! as [`DecodeWarning`]s while the rest of the text is still ingested.

use crate::model::{Grades, Student, MAX_SCORE, MIN_SCORE};
use crate::records::RecordStore;
use std::fmt;

const FIELD_SEP: char = ',';
const GRADE_SEP: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// A line with fewer than two fields, skipped entirely.
    MissingName { line: usize },
    /// A `subject:score` pair whose score is not an integer.
    InvalidScore {
        line: usize,
        id: String,
        subject: String,
        raw: String,
    },
    /// A `subject:score` pair whose integer score is outside `0..=100`.
    ScoreOutOfRange {
        line: usize,
        id: String,
        subject: String,
        score: i64,
    },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::MissingName { line } => {
                write!(f, "Line {} has no student name. Skipping", line)
            }
            DecodeWarning::InvalidScore { id, subject, .. } => {
                write!(f, "Invalid grade for {} in {}. Skipping", id, subject)
            }
            DecodeWarning::ScoreOutOfRange {
                id, subject, score, ..
            } => write!(
                f,
                "Grade {} for {} in {} is out of range. Skipping",
                score, id, subject
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct Decoded {
    pub records: RecordStore,
    pub warnings: Vec<DecodeWarning>,
}

/// Decodes persisted text, discarding warnings (they are still logged).
pub fn decode(text: &str) -> RecordStore {
    decode_report(text).records
}

pub fn decode_report(text: &str) -> Decoded {
    let mut decoded = Decoded::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(FIELD_SEP);
        let id = fields.next().unwrap_or_default();
        let Some(name) = fields.next() else {
            tracing::warn!(line = line_no, "skipping record without a name field");
            decoded
                .warnings
                .push(DecodeWarning::MissingName { line: line_no });
            continue;
        };

        let mut grades = Grades::new();
        for field in fields {
            let Some((subject, raw_score)) = field.split_once(GRADE_SEP) else {
                continue;
            };

            match raw_score.trim().parse::<i64>() {
                Ok(score) if (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&score) => {
                    grades.set(subject, score as u8);
                }
                Ok(score) => {
                    tracing::warn!(line = line_no, id, subject, score, "dropping out of range grade");
                    decoded.warnings.push(DecodeWarning::ScoreOutOfRange {
                        line: line_no,
                        id: id.to_string(),
                        subject: subject.to_string(),
                        score,
                    });
                }
                Err(_) => {
                    tracing::warn!(line = line_no, id, subject, raw = raw_score, "dropping unparsable grade");
                    decoded.warnings.push(DecodeWarning::InvalidScore {
                        line: line_no,
                        id: id.to_string(),
                        subject: subject.to_string(),
                        raw: raw_score.to_string(),
                    });
                }
            }
        }

        decoded.records.restore(Student {
            id: id.to_string(),
            name: name.to_string(),
            grades,
        });
    }

    decoded
}

pub fn encode(records: &RecordStore) -> String {
    let mut out = String::new();

    for student in records.iter() {
        if has_separator(&student.name) {
            tracing::warn!(id = %student.id, name = %student.name, "name contains a reserved separator and will not reload intact");
        }

        out.push_str(&student.id);
        out.push(FIELD_SEP);
        out.push_str(&student.name);
        out.push(FIELD_SEP);
        for (i, g) in student.grades.iter().enumerate() {
            if has_separator(&g.subject) {
                tracing::warn!(id = %student.id, subject = %g.subject, "subject contains a reserved separator and will not reload intact");
            }
            if i > 0 {
                out.push(FIELD_SEP);
            }
            out.push_str(&g.subject);
            out.push(GRADE_SEP);
            out.push_str(&g.score.to_string());
        }
        out.push('\n');
    }

    out
}

fn has_separator(s: &str) -> bool {
    s.contains(FIELD_SEP) || s.contains(GRADE_SEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add("101", "Alice").unwrap();
        store.update_grade("101", "Science", "90").unwrap();
        store.update_grade("101", "Math", "70").unwrap();
        store.add("7", "Bob Stone").unwrap();
        store.add("42", "Carla").unwrap();
        store.update_grade("42", "History", "100").unwrap();
        store
    }

    #[test]
    fn encodes_one_line_per_student_in_store_order() {
        let text = encode(&sample_store());
        assert_eq!(
            text,
            "101,Alice,Science:90,Math:70\n7,Bob Stone,\n42,Carla,History:100\n"
        );
    }

    #[test]
    fn round_trips_valid_store() {
        let store = sample_store();
        let decoded = decode_report(&encode(&store));
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.records, store);
    }

    #[test]
    fn empty_text_decodes_to_empty_store() {
        assert!(decode("").is_empty());
        assert!(decode("\n   \n\n").is_empty());
        assert_eq!(encode(&RecordStore::new()), "");
    }

    #[test]
    fn drops_unparsable_pair_but_keeps_line() {
        let decoded = decode_report("102,Bob,Math:abc,Science:75\n");
        let bob = decoded.records.find("102").unwrap();

        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.grades.len(), 1);
        assert_eq!(bob.grades.get("Science"), Some(75));
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::InvalidScore {
                line: 1,
                id: "102".into(),
                subject: "Math".into(),
                raw: "abc".into(),
            }]
        );
        assert_eq!(
            decoded.warnings[0].to_string(),
            "Invalid grade for 102 in Math. Skipping"
        );
    }

    #[test]
    fn silently_drops_fields_without_colon() {
        let decoded = decode_report("5,Eve,Math,Art:88,\n");
        let eve = decoded.records.find("5").unwrap();
        assert_eq!(eve.grades.len(), 1);
        assert_eq!(eve.grades.get("Art"), Some(88));
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn splits_on_first_colon_only() {
        let decoded = decode_report("5,Eve,Lab:Chem:80,Art: 88\n");
        let eve = decoded.records.find("5").unwrap();
        // "Chem:80" is not an integer, so only Art survives
        assert_eq!(eve.grades.get("Art"), Some(88));
        assert_eq!(eve.grades.len(), 1);
        assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn malformed_lines_do_not_abort_the_load() {
        let text = "101,Alice,Math:90\ngarbage-without-comma\n\n  202,Zed,Art:150,Music:60  \n";
        let decoded = decode_report(text);

        assert_eq!(decoded.records.len(), 2);
        assert_eq!(decoded.records.find("202").unwrap().grades.get("Music"), Some(60));
        assert_eq!(decoded.records.find("202").unwrap().grades.get("Art"), None);
        assert_eq!(
            decoded.warnings,
            vec![
                DecodeWarning::MissingName { line: 2 },
                DecodeWarning::ScoreOutOfRange {
                    line: 4,
                    id: "202".into(),
                    subject: "Art".into(),
                    score: 150,
                },
            ]
        );
    }

    #[test]
    fn repeated_id_keeps_last_record() {
        let store = decode("1,Old,Math:10\n2,Other,\n1,New,Math:20\n");
        assert_eq!(store.len(), 2);
        let first = store.iter().next().unwrap();
        assert_eq!(first.name, "New");
        assert_eq!(first.grades.get("Math"), Some(20));
    }

    #[test]
    fn separators_in_names_corrupt_the_record() {
        let mut store = RecordStore::new();
        store.add("9", "Smith, Jane").unwrap();
        store.update_grade("9", "Art: Modern", "80").unwrap();

        let reloaded = decode(&encode(&store));
        let jane = reloaded.find("9").unwrap();

        assert_eq!(jane.name, "Smith");
        assert_ne!(reloaded, store);
        // " Jane" has no colon and is dropped; "Art: Modern:80" fails to parse
        assert!(jane.grades.is_empty());
    }
}
