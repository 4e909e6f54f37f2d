//! Console client: argument parsing, one-shot commands, the interactive shell
//! and rendering.

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
