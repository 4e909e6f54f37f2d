use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Lowest and highest score a grade may hold.
pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub subject: String,
    pub score: u8,
}

/// Per-subject scores of one student, kept in the order subjects were first
/// recorded. Subject keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grades {
    entries: Vec<Grade>,
}

impl Grades {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the score for `subject`. An existing subject keeps its position.
    pub fn set(&mut self, subject: &str, score: u8) {
        match self.entries.iter_mut().find(|g| g.subject == subject) {
            Some(grade) => grade.score = score,
            None => self.entries.push(Grade {
                subject: subject.to_string(),
                score,
            }),
        }
    }

    pub fn get(&self, subject: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|g| g.subject == subject)
            .map(|g| g.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grade> {
        self.entries.iter()
    }

    pub fn scores(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|g| g.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u8)> for Grades {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        let mut grades = Grades::new();
        for (subject, score) in iter {
            grades.set(subject.as_ref(), score);
        }
        grades
    }
}

// Serialized as a JSON object whose keys follow recording order.
impl Serialize for Grades {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for grade in &self.entries {
            map.serialize_entry(&grade.subject, &grade.score)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub grades: Grades,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grades: Grades::new(),
        }
    }
}

/// True when `s` is non-empty and made only of ASCII decimal digits.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
