//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every gradebook operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`RecordStore`] for the lifetime of the session
//! - **Dispatches** to the appropriate command function
//! - **Persists** through its [`DataStore`] after every successful mutation,
//!   and once more when the session is closed
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `records.rs`, `aggregate.rs` and
//!   `commands/*.rs`
//! - **I/O with the user**: no stdout, stderr or prompts. Confirmation for
//!   destructive operations arrives as a plain `bool`
//!
//! ## Failure Semantics
//!
//! Opening never fails: a missing data file starts an empty session, and any
//! other read fault is reported as an error message while the session still
//! starts empty. A failed save is returned to the caller; the in-memory
//! records stay authoritative until the next successful save.
//!
//! ## Generic Over DataStore
//!
//! `GradebookApi<S: DataStore>` is generic over the storage backend:
//! - Production: `GradebookApi<FileStore>`
//! - Testing: `GradebookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Student;
use crate::records::RecordStore;
use crate::store::DataStore;

pub struct GradebookApi<S: DataStore> {
    store: S,
    records: RecordStore,
    paths: GradebookPaths,
}

impl<S: DataStore> GradebookApi<S> {
    /// Loads the persisted records and returns the session together with the
    /// load messages (success, missing file, per-pair warnings, read fault).
    pub fn open(store: S, paths: GradebookPaths) -> (Self, CmdResult) {
        let mut result = CmdResult::default();

        let records = match store.load() {
            Ok(Some(decoded)) => {
                for warning in &decoded.warnings {
                    result.add_message(CmdMessage::warning(warning.to_string()));
                }
                result.add_message(CmdMessage::info("Student data loaded successfully."));
                decoded.records
            }
            Ok(None) => {
                result.add_message(CmdMessage::info(format!(
                    "File {} not found. Starting with empty data.",
                    store.location()
                )));
                RecordStore::new()
            }
            Err(e) => {
                tracing::error!(location = %store.location(), error = %e, "failed to load records");
                result.add_message(CmdMessage::error(format!(
                    "Error loading data from file: {}",
                    e
                )));
                RecordStore::new()
            }
        };

        let api = Self {
            store,
            records,
            paths,
        };
        (api, result)
    }

    pub fn add_student(&mut self, id: &str, name: &str) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.records, id, name)?;
        self.persist_if_changed(result)
    }

    pub fn update_grade(&mut self, id: &str, subject: &str, score: &str) -> Result<CmdResult> {
        let result = commands::grade::run(&mut self.records, id, subject, score)?;
        self.persist_if_changed(result)
    }

    pub fn search_student(&self, id: &str) -> Result<CmdResult> {
        commands::search::run(&self.records, id)
    }

    pub fn delete_student(&mut self, id: &str, confirmed: bool) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.records, id, confirmed)?;
        self.persist_if_changed(result)
    }

    pub fn student_average(&self, id: &str) -> Result<CmdResult> {
        commands::average::student(&self.records, id)
    }

    pub fn subject_average(&self, subject: &str) -> Result<CmdResult> {
        commands::average::subject(&self.records, subject)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.records)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.records.find(id)
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &GradebookPaths {
        &self.paths
    }

    /// Writes the whole record set through the backend.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.records).map_err(|e| {
            tracing::error!(location = %self.store.location(), error = %e, "failed to save records");
            e
        })
    }

    /// Final persist at the end of a session, regardless of earlier failures.
    pub fn close(&mut self) -> Result<()> {
        self.save()
    }

    fn persist_if_changed(&mut self, result: CmdResult) -> Result<CmdResult> {
        if result.is_mutation() {
            self.save()?;
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    AverageReport, AverageScope, CmdMessage, CmdResult, GradebookPaths, MessageLevel,
};
