//! # Storage Layer
//!
//! The [`DataStore`] trait separates *where* records are persisted from the
//! business logic that mutates them.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production backend, a single flat text file in the
//!   format described in [`crate::codec`]. Writes go to a temporary sibling
//!   file that is renamed over the target.
//! - [`memory::InMemoryStore`]: keeps the encoded text in memory, for tests.
//!
//! Both backends go through the codec, so the in-memory backend exercises the
//! exact same text round trip as the file backend.

use crate::codec::Decoded;
use crate::error::Result;
use crate::records::RecordStore;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Reads the persisted records.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet, which is not an
    /// error. Any other read fault is returned as `Err`.
    fn load(&self) -> Result<Option<Decoded>>;

    /// Replaces the persisted representation with `records`.
    fn save(&mut self, records: &RecordStore) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
