use super::DataStore;
use crate::codec::{self, Decoded};
use crate::error::{GradebookError, Result};
use crate::records::RecordStore;
use std::io;

/// In-memory storage for testing and development.
/// Holds the encoded text instead of writing a file.
#[derive(Default)]
pub struct InMemoryStore {
    text: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from previously persisted text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// The text as of the last successful save.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Decoded>> {
        if self.fail_reads {
            return Err(GradebookError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated read failure",
            )));
        }
        Ok(self.text.as_deref().map(codec::decode_report))
    }

    fn save(&mut self, records: &RecordStore) -> Result<()> {
        if self.fail_writes {
            return Err(GradebookError::Io(io::Error::new(
                io::ErrorKind::Other,
                "simulated write failure",
            )));
        }
        self.text = Some(codec::encode(records));
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        lines: Vec<String>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                lines: Vec::new(),
            }
        }

        pub fn with_student(mut self, id: &str, name: &str, grades: &[(&str, u8)]) -> Self {
            let mut line = format!("{},{},", id, name);
            let pairs: Vec<String> = grades
                .iter()
                .map(|(subject, score)| format!("{}:{}", subject, score))
                .collect();
            line.push_str(&pairs.join(","));
            self.lines.push(line);
            self
        }

        pub fn with_raw_line(mut self, line: &str) -> Self {
            self.lines.push(line.to_string());
            self
        }

        pub fn build(self) -> InMemoryStore {
            if self.lines.is_empty() {
                return self.store;
            }
            let mut text = self.lines.join("\n");
            text.push('\n');
            InMemoryStore {
                text: Some(text),
                ..self.store
            }
        }
    }
}
