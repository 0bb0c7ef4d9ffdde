//! Donelist command-line front end.
//!
//! # Responsibility
//! - Map user commands onto `donelist_core` service operations.
//! - Own rendering, the clear-all confirmation prompt, and error-to-message
//!   mapping.
//!
//! The core stays presentation-agnostic: this binary holds the service and
//! calls into it, never the reverse. The task file is loaded once per
//! invocation; every mutating subcommand flushes through the service.

use clap::{Parser, Subcommand};
use donelist_core::{default_log_level, init_logging, ServiceResult, Task, TaskService};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_TASKS_FILE: &str = "tasks.txt";

#[derive(Debug, Parser)]
#[command(name = "donelist", version, about = "Flat-file to-do list manager")]
struct Cli {
    /// Tasks file to load and rewrite.
    #[arg(long, default_value = DEFAULT_TASKS_FILE)]
    file: PathBuf,

    /// Absolute directory for rolling log files. Logging stays off when
    /// unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error). Defaults per build mode.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Append a new task.
    Add { text: String },
    /// Print all tasks in insertion order.
    List,
    /// Toggle the completion flag of the task at `index`.
    Done { index: usize },
    /// Replace the text of the task at `index`.
    Edit { index: usize, text: String },
    /// Delete the task at `index`.
    Rm { index: usize },
    /// Delete every task.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Case-insensitive substring search over task text.
    Search { query: String },
    /// Print core liveness and version.
    Status,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(message) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("logging setup failed: {message}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ServiceResult<()> {
    let mut service = TaskService::open(cli.file)?;
    log::debug!(
        "event=cli_start module=cli status=ok count={} file={}",
        service.len(),
        service.path().display()
    );

    match cli.command {
        Command::Add { text } => {
            let task = service.add_task(&text)?;
            println!("added: {}", task.text);
        }
        Command::List => render_tasks(service.tasks()),
        Command::Done { index } => {
            let completed = service.toggle_task(index)?;
            println!(
                "task {index} {}",
                if completed { "completed" } else { "reopened" }
            );
        }
        Command::Edit { index, text } => {
            let task = service.edit_task(index, &text)?;
            println!("edited: {}", task.text);
        }
        Command::Rm { index } => {
            let removed = service.delete_task(index)?;
            println!("deleted: {}", removed.text);
        }
        Command::Clear { yes } => {
            if yes || confirm_clear(service.len()) {
                service.clear_all()?;
                println!("all tasks cleared");
            } else {
                println!("aborted");
            }
        }
        Command::Search { query } => {
            let mut found = false;
            for task in service.search(&query) {
                found = true;
                println!("{} {}", completion_marker(task), task.text);
            }
            if !found {
                println!("no matching tasks");
            }
        }
        Command::Status => {
            println!("donelist_core ping={}", donelist_core::ping());
            println!("donelist_core version={}", donelist_core::core_version());
        }
    }

    Ok(())
}

fn render_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("no tasks");
        return;
    }
    for (index, task) in tasks.iter().enumerate() {
        println!("{index:>3} {} {}", completion_marker(task), task.text);
    }
}

fn completion_marker(task: &Task) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

fn confirm_clear(count: usize) -> bool {
    print!("delete all {count} tasks? [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
