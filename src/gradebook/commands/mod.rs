use crate::config::GradebookConfig;
use crate::model::Student;
use std::path::PathBuf;

pub mod add;
pub mod average;
pub mod config;
pub mod delete;
pub mod grade;
pub mod report;
pub mod search;

#[derive(Debug, Clone)]
pub struct GradebookPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageScope {
    Student,
    Subject,
}

/// An average ready for display. `samples` is the number of scores behind
/// `value`; zero means the sentinel `0.0` of a student without grades.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageReport {
    pub scope: AverageScope,
    pub label: String,
    pub value: f64,
    pub samples: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Students changed by the command. Non-empty means the store was mutated.
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub average: Option<AverageReport>,
    pub config: Option<GradebookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_average(mut self, average: AverageReport) -> Self {
        self.average = Some(average);
        self
    }

    pub fn with_config(mut self, config: GradebookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn is_mutation(&self) -> bool {
        !self.affected_students.is_empty()
    }
}
