use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error("Student ID cannot be empty.")]
    EmptyId,

    #[error("Invalid student ID '{0}': must contain only digits.")]
    NonNumericId(String),

    #[error("Student ID {0} already exists.")]
    DuplicateId(String),

    #[error("Student name cannot be empty.")]
    EmptyName,

    #[error("Invalid student name '{0}': a name cannot be only digits.")]
    NumericName(String),

    #[error("Invalid student name {0:?}: line breaks and control characters are not allowed.")]
    ControlCharName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Subject name cannot be empty.")]
    EmptySubject,

    #[error("Invalid subject name '{0}': a subject cannot be only digits.")]
    NumericSubject(String),

    #[error("Invalid subject name {0:?}: line breaks and control characters are not allowed.")]
    ControlCharSubject(String),

    #[error("Invalid grade '{0}': enter a number between 0 and 100.")]
    InvalidScore(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Deletion cancelled.")]
    Cancelled,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvgError {
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("No grades available for subject {0}.")]
    NoData(String),
}

/// Coarse classification of failures, independent of the operation that
/// produced them. The presentation layer uses it to pick wording and exit
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Duplicate,
    IoFault,
    Cancelled,
    Config,
}

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error(transparent)]
    Add(#[from] AddError),

    #[error(transparent)]
    Update(#[from] UpdateError),

    #[error(transparent)]
    Delete(#[from] DeleteError),

    #[error(transparent)]
    Average(#[from] AvgError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl GradebookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradebookError::Add(AddError::DuplicateId(_)) => ErrorKind::Duplicate,
            GradebookError::Add(_) => ErrorKind::Validation,
            GradebookError::Update(UpdateError::NotFound(_)) => ErrorKind::NotFound,
            GradebookError::Update(_) => ErrorKind::Validation,
            GradebookError::Delete(DeleteError::NotFound(_)) => ErrorKind::NotFound,
            GradebookError::Delete(DeleteError::Cancelled) => ErrorKind::Cancelled,
            GradebookError::Average(_) => ErrorKind::NotFound,
            GradebookError::Io(_) => ErrorKind::IoFault,
            GradebookError::Serialization(_) | GradebookError::Config(_) => ErrorKind::Config,
            GradebookError::Api(_) => ErrorKind::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, GradebookError>;
