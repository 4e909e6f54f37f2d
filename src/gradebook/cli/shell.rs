//! Interactive menu loop.
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so the same
//! loop serves the terminal and the tests. End of input at any prompt ends the
//! session as if Exit had been chosen. The session is always closed (final
//! save) when the loop ends.

use super::render::{
    render_average, render_menu, render_messages, render_report, render_search,
};
use colored::Colorize;
use gradebook::api::{CmdMessage, CmdResult, GradebookApi};
use gradebook::error::{GradebookError, Result};
use gradebook::model::Student;
use gradebook::store::DataStore;
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    decimals: usize,
    /// Wait for Enter after each action. Only makes sense on a terminal.
    pause: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, decimals: usize, pause: bool) -> Self {
        Self {
            input,
            output,
            decimals,
            pause,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run<S: DataStore>(&mut self, api: &mut GradebookApi<S>) -> Result<()> {
        loop {
            write!(self.output, "{}", render_menu())?;
            let choice = match self.prompt("Enter your choice (1-7): ")? {
                Some(choice) => choice,
                None => break,
            };

            let outcome = match choice.as_str() {
                "1" => self.add_student(api),
                "2" => self.update_grade(api),
                "3" => self.search_student(api),
                "4" => self.delete_student(api),
                "5" => self.average(api),
                "6" => self.report(api),
                "7" => break,
                _ => {
                    self.messages(&[CmdMessage::error("Invalid choice. Please try again.")])?;
                    Ok(Flow::Continue)
                }
            };

            let flow = match outcome {
                Ok(flow) => flow,
                Err(GradebookError::Io(e)) if is_output_fault(&e) => return Err(e.into()),
                Err(e) => {
                    self.error(&e)?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Exit => break,
                Flow::Continue if self.pause => {
                    if self.prompt("\nPress Enter to continue...")?.is_none() {
                        break;
                    }
                }
                Flow::Continue => {}
            }
        }

        match api.close() {
            Ok(()) => self.messages(&[CmdMessage::success("Exiting the program. Data saved.")]),
            Err(e) => {
                self.messages(&[CmdMessage::error(format!("Error saving data: {}", e))])?;
                Err(e)
            }
        }
    }

    fn add_student<S: DataStore>(&mut self, api: &mut GradebookApi<S>) -> Result<Flow> {
        writeln!(self.output, "\n{}", "Add New Student".bold())?;
        let Some(id) = self.prompt("Enter Student ID: ")? else {
            return Ok(Flow::Exit);
        };
        api.records().check_new_id(&id)?;
        let Some(name) = self.prompt("Enter Student Name: ")? else {
            return Ok(Flow::Exit);
        };
        let result = api.add_student(&id, &name)?;
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn update_grade<S: DataStore>(&mut self, api: &mut GradebookApi<S>) -> Result<Flow> {
        writeln!(self.output, "\n{}", "Update Student Grade".bold())?;
        let Some(id) = self.prompt("Enter Student ID: ")? else {
            return Ok(Flow::Exit);
        };
        if api.student(&id).is_none() {
            self.messages(&[CmdMessage::error("Student not found.")])?;
            return Ok(Flow::Continue);
        }
        let Some(subject) = self.prompt("Enter Subject Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(score) = self.prompt("Enter New Grade (0-100): ")? else {
            return Ok(Flow::Exit);
        };
        let result = api.update_grade(&id, &subject, &score)?;
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn search_student<S: DataStore>(&mut self, api: &mut GradebookApi<S>) -> Result<Flow> {
        writeln!(self.output, "\n{}", "Search Student Records".bold())?;
        let result = if api.records().is_empty() {
            api.search_student("")?
        } else {
            let Some(id) = self.prompt("Enter Student ID to search: ")? else {
                return Ok(Flow::Exit);
            };
            api.search_student(&id)?
        };
        self.listing(&result, render_search)?;
        Ok(Flow::Continue)
    }

    fn delete_student<S: DataStore>(&mut self, api: &mut GradebookApi<S>) -> Result<Flow> {
        writeln!(self.output, "\n{}", "Delete Student Record".bold())?;
        if api.records().is_empty() {
            self.messages(&[CmdMessage::info("No students to delete.")])?;
            return Ok(Flow::Continue);
        }
        let Some(id) = self.prompt("Enter Student ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = api.student(&id).map(|s| s.name.clone()) else {
            self.messages(&[CmdMessage::error("Student not found.")])?;
            return Ok(Flow::Continue);
        };
        let question = format!(
            "Are you sure you want to delete student '{}' (ID: {})? (y/n): ",
            name, id
        );
        let Some(answer) = self.prompt(&question)? else {
            return Ok(Flow::Exit);
        };
        let result = api.delete_student(&id, is_yes(&answer))?;
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn average<S: DataStore>(&mut self, api: &mut GradebookApi<S>) -> Result<Flow> {
        writeln!(self.output, "\n{}", "Calculate Average Grade".bold())?;
        let Some(choice) = self.prompt("Calculate average for (student/subject): ")? else {
            return Ok(Flow::Exit);
        };

        let result = match choice.to_lowercase().as_str() {
            "student" => {
                let Some(id) = self.prompt("Enter Student ID: ")? else {
                    return Ok(Flow::Exit);
                };
                api.student_average(&id)?
            }
            "subject" => {
                let Some(subject) = self.prompt("Enter Subject Name: ")? else {
                    return Ok(Flow::Exit);
                };
                api.subject_average(&subject)?
            }
            _ => {
                self.messages(&[CmdMessage::error(
                    "Invalid choice. Please enter 'student' or 'subject'.",
                )])?;
                return Ok(Flow::Continue);
            }
        };

        if let Some(average) = &result.average {
            write!(self.output, "{}", render_average(average, self.decimals))?;
        }
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn report<S: DataStore>(&mut self, api: &mut GradebookApi<S>) -> Result<Flow> {
        let result = api.report()?;
        self.listing(&result, render_report)?;
        Ok(Flow::Continue)
    }

    fn listing(
        &mut self,
        result: &CmdResult,
        render: fn(&[Student], usize) -> String,
    ) -> Result<()> {
        write!(self.output, "{}", render(&result.listed_students, self.decimals))?;
        self.messages(&result.messages)
    }

    /// Prints `label`, reads one line and returns it trimmed. `None` at end of
    /// input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        write!(self.output, "{}", render_messages(messages))?;
        Ok(())
    }

    fn error(&mut self, error: &GradebookError) -> Result<()> {
        writeln!(self.output, "{}", error.to_string().red())?;
        Ok(())
    }
}

/// Confirmation answers: `y` in any case, surrounding whitespace ignored.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

fn is_output_fault(e: &std::io::Error) -> bool {
    e.kind() == std::io::ErrorKind::BrokenPipe
}
