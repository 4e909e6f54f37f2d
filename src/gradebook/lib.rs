//! # Gradebook Architecture
//!
//! Gradebook is a **small student record library** with a console client on
//! top. The record rules, the file format and the averages live in the
//! library; the binary only parses arguments, prompts and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot subcommands and the interactive menu loop       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the RecordStore for the session                     │
//! │  - Persists after each successful mutation and on close     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (records.rs, codec.rs, aggregate.rs)                  │
//! │  - Record invariants, flat-file format, averages            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns `Result` types
//! and never prints. Even the delete confirmation is a `bool` argument.
//!
//! ## Module Overview
//!
//! - [`records`]: the in-memory record store and score parsing
//! - [`codec`]: line-oriented text format
//! - [`aggregate`]: per-student and per-subject averages
//! - [`store`]: persistence backends
//! - [`commands`]: business logic per user action
//! - [`api`]: the facade used by every client
//! - [`config`]: settings (data file, display precision)
//! - [`init`]: resolves config and opens a file-backed session
//! - [`model`]: `Student` and `Grades`
//! - [`error`]: error types

pub mod aggregate;
pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod records;
pub mod store;
