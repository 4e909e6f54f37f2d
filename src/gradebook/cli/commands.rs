//! # CLI Layer
//!
//! This module is **one possible UI client** for gradebook. The record rules
//! live in the library; this layer only:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Converts parsed arguments into `GradebookApi` calls
//! - Formats `CmdResult` for humans (or JSON)
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print output
//!
//! One-shot commands persist through the API after each successful mutation
//! and never rewrite the data file otherwise. The shell closes the session
//! when it ends, which always saves.

use super::render::{
    print_messages, render_average, render_config, render_report, render_report_json,
    render_search,
};
use super::setup::{AverageTarget, Cli, Commands};
use super::shell::{is_yes, Shell};
use gradebook::api::{CmdMessage, ConfigAction, GradebookApi, MessageLevel};
use gradebook::error::Result;
use gradebook::init::initialize;
use gradebook::store::fs::FileStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

struct AppContext {
    api: GradebookApi<FileStore>,
    decimals: usize,
    load_messages: Vec<CmdMessage>,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { id, name }) => handle_add(&mut ctx, &id, &name.join(" ")),
        Some(Commands::Grade { id, subject, score }) => {
            handle_grade(&mut ctx, &id, &subject, &score)
        }
        Some(Commands::Show { id }) => handle_show(&mut ctx, &id),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Average(target)) => handle_average(&mut ctx, target),
        Some(Commands::Report { json }) => handle_report(&mut ctx, json),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let ctx = initialize(&cwd, cli.config_dir.clone(), cli.file.clone())?;

    Ok(AppContext {
        api: ctx.api,
        decimals: ctx.config.decimals,
        load_messages: ctx.load_result.messages,
    })
}

/// One-shot commands only surface load problems; the routine "loaded" and
/// "not found" notices are shell chatter.
fn print_load_problems(ctx: &AppContext) {
    let problems: Vec<CmdMessage> = ctx
        .load_messages
        .iter()
        .filter(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
        .cloned()
        .collect();
    print_messages(&problems);
}

fn handle_add(ctx: &mut AppContext, id: &str, name: &str) -> Result<()> {
    print_load_problems(ctx);
    let result = ctx.api.add_student(id, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_grade(ctx: &mut AppContext, id: &str, subject: &str, score: &str) -> Result<()> {
    print_load_problems(ctx);
    let result = ctx.api.update_grade(id, subject, score)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: &str) -> Result<()> {
    print_load_problems(ctx);
    let result = ctx.api.search_student(id)?;
    print!("{}", render_search(&result.listed_students, ctx.decimals));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    print_load_problems(ctx);

    let confirmed = if yes {
        true
    } else {
        // Unknown ids fail before anyone is asked.
        let Some(name) = ctx.api.student(id).map(|s| s.name.clone()) else {
            ctx.api.delete_student(id, false)?;
            return Ok(());
        };
        print!(
            "Are you sure you want to delete student '{}' (ID: {})? (y/n): ",
            name, id
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        is_yes(&answer)
    };

    let result = ctx.api.delete_student(id, confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_average(ctx: &mut AppContext, target: AverageTarget) -> Result<()> {
    print_load_problems(ctx);
    let result = match target {
        AverageTarget::Student { id } => ctx.api.student_average(&id)?,
        AverageTarget::Subject { subject } => ctx.api.subject_average(&subject)?,
    };
    if let Some(average) = &result.average {
        print!("{}", render_average(average, ctx.decimals));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &mut AppContext, json: bool) -> Result<()> {
    print_load_problems(ctx);
    let result = ctx.api.report()?;
    if json {
        print!("{}", render_report_json(&result.listed_students)?);
        return Ok(());
    }
    print!("{}", render_report(&result.listed_students, ctx.decimals));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    print_messages(&ctx.load_messages);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), ctx.decimals, interactive);
    shell.run(&mut ctx.api)
}
