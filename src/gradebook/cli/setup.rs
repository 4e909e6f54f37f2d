use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradebook", bin_name = "gradebook", version)]
#[command(about = "Student records with per-subject grades, kept in a flat text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student
    #[command(alias = "a")]
    Add {
        /// Student ID (digits only)
        id: String,

        /// Student name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Record or update a grade
    #[command(alias = "g")]
    Grade {
        /// Student ID
        id: String,

        /// Subject name
        subject: String,

        /// Grade between 0 and 100
        #[arg(allow_hyphen_values = true)]
        score: String,
    },

    /// Show a student record by ID
    #[command(alias = "search")]
    Show {
        /// Student ID (exact match)
        id: String,
    },

    /// Delete a student record
    #[command(alias = "rm")]
    Delete {
        /// Student ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Calculate an average grade
    #[command(alias = "avg", subcommand)]
    Average(AverageTarget),

    /// Print every student with grades and average
    #[command(alias = "ls")]
    Report {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, decimals)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu (default)
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum AverageTarget {
    /// Average of one student's grades
    Student {
        /// Student ID
        id: String,
    },

    /// Average of one subject across all students (case-insensitive)
    Subject {
        /// Subject name
        subject: String,
    },
}
