//! # Rendering Module
//!
//! Turns `CmdResult` contents into terminal text. Every function returns a
//! `String` so output can be tested without a terminal; the `print_*` helpers
//! are thin wrappers around them.
//!
//! Colors come from `colored`, which turns itself off when stdout is not a
//! terminal or `NO_COLOR` is set.

use colored::Colorize;
use gradebook::aggregate::student_mean;
use gradebook::api::{AverageReport, AverageScope, CmdMessage, MessageLevel};
use gradebook::config::GradebookConfig;
use gradebook::error::Result;
use gradebook::model::Student;

pub const SEPARATOR_WIDTH: usize = 70;
const MENU_WIDTH: usize = 50;
const MENU_INDENT: usize = 10;

pub const MENU_ITEMS: [&str; 7] = [
    "Add Student",
    "Update Grade",
    "Search Student Record",
    "Delete Student Record",
    "Calculate Average Grade",
    "Generate Report",
    "Exit",
];

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn format_grades(student: &Student) -> String {
    if student.grades.is_empty() {
        return "No grades".to_string();
    }
    student
        .grades
        .iter()
        .map(|g| format!("{}: {}", g.subject, g.score))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_student_block(student: &Student, decimals: usize) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n{} {:.prec$}\n{}\n",
        "ID:".bold(),
        student.id,
        "Name:".bold(),
        student.name,
        "Grades:".bold(),
        format_grades(student),
        "Average:".bold(),
        student_mean(student),
        separator().dimmed(),
        prec = decimals
    )
}

/// Search results, headed by the match count.
pub fn render_search(students: &[Student], decimals: usize) -> String {
    if students.is_empty() {
        return String::new();
    }
    let mut out = format!(
        "\nFound {} matching student(s):\n{}\n",
        students.len(),
        separator().dimmed()
    );
    for student in students {
        out.push_str(&render_student_block(student, decimals));
    }
    out
}

/// Full report of every student, in store order.
pub fn render_report(students: &[Student], decimals: usize) -> String {
    if students.is_empty() {
        return String::new();
    }
    let mut out = format!("\n{}\n{}\n", "Student Report:".bold(), separator().dimmed());
    for student in students {
        out.push_str(&render_student_block(student, decimals));
    }
    out
}

pub fn render_report_json(students: &[Student]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(students)?;
    json.push('\n');
    Ok(json)
}

/// The average line. A student without grades renders nothing: the command
/// attaches a message for that case instead.
pub fn render_average(average: &AverageReport, decimals: usize) -> String {
    if average.scope == AverageScope::Student && average.samples == 0 {
        return String::new();
    }
    format!(
        "Average grade for {}: {}\n",
        average.label,
        format!("{:.prec$}", average.value, prec = decimals).cyan()
    )
}

pub fn render_config(config: &GradebookConfig) -> String {
    GradebookConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn render_menu() -> String {
    let rule = "=".repeat(MENU_WIDTH);
    let indent = " ".repeat(MENU_INDENT);
    let mut out = format!("\n{}\n{}{}\n{}\n", rule, indent, "Student Records Management System".bold(), rule);
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        out.push_str(&format!("{}{}. {}\n", indent, i + 1, item));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
