//! Command definitions and handlers.
//!
//! Each invocation is one user event, or the short sequence of events the
//! widget would issue for the same gesture (renaming is "start editing,
//! replace title, stop editing"). Argument structs convert into core
//! [`Action`]s where the mapping is one-to-one.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use taskpad_core::{
    Action, AppState, OperationStatus, SqliteStorage, Store, StoreError, TaskSummaries, Theme,
};

use crate::renderer::TerminalRenderer;

/// Add a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task; blank titles are ignored
    pub title: String,
}

impl From<AddTaskArgs> for Action {
    fn from(val: AddTaskArgs) -> Self {
        Action::AddTask { title: val.title }
    }
}

/// Select a task by position
#[derive(Args)]
pub struct TaskIndexArgs {
    #[arg(help = "0-based position of the task")]
    pub index: usize,
}

/// Replace the title of a task
#[derive(Args)]
pub struct RenameTaskArgs {
    #[arg(help = "0-based position of the task")]
    pub index: usize,
    /// New title
    pub title: String,
}

/// Delete a task after confirmation
///
/// Asks for confirmation on stdin unless --yes is given. Any answer other
/// than "y" or "yes" keeps the task.
#[derive(Args)]
pub struct DeleteTaskArgs {
    #[arg(help = "0-based position of the task to delete")]
    pub index: usize,
    /// Confirm the deletion without prompting
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Show a task with its subtasks
    #[command(alias = "s")]
    Show(TaskIndexArgs),
    /// Replace the title of a task
    #[command(aliases = ["r", "edit"])]
    Rename(RenameTaskArgs),
    /// Toggle completion of a task and all of its subtasks
    #[command(aliases = ["x", "done"])]
    Toggle(TaskIndexArgs),
    /// Delete a task after confirmation
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
}

/// Add a subtask to a task
#[derive(Args)]
pub struct AddSubtaskArgs {
    #[arg(help = "0-based position of the parent task")]
    pub task: usize,
    /// Text of the subtask; blank text is ignored
    pub text: String,
}

/// Select a subtask by position
#[derive(Args)]
pub struct SubtaskIndexArgs {
    #[arg(help = "0-based position of the parent task")]
    pub task: usize,
    #[arg(help = "0-based position of the subtask within the task")]
    pub index: usize,
}

/// Replace the text of a subtask
#[derive(Args)]
pub struct RenameSubtaskArgs {
    #[arg(help = "0-based position of the parent task")]
    pub task: usize,
    #[arg(help = "0-based position of the subtask within the task")]
    pub index: usize,
    /// New text
    pub text: String,
}

#[derive(Subcommand)]
pub enum SubtaskCommands {
    /// Add a subtask to a task
    #[command(alias = "a")]
    Add(AddSubtaskArgs),
    /// Replace the text of a subtask
    #[command(aliases = ["r", "edit"])]
    Rename(RenameSubtaskArgs),
    /// Toggle completion of a single subtask
    #[command(aliases = ["x", "done"])]
    Toggle(SubtaskIndexArgs),
    /// Delete a subtask immediately
    #[command(aliases = ["d", "rm"])]
    Delete(SubtaskIndexArgs),
}

/// Show, set or toggle the color theme
#[derive(Args)]
pub struct ThemeArgs {
    /// Theme to switch to; toggles when omitted
    #[arg(value_enum)]
    pub theme: Option<ThemeArg>,
}

impl From<ThemeArgs> for Action {
    fn from(val: ThemeArgs) -> Self {
        match val.theme {
            Some(theme) => Action::SetTheme(theme.into()),
            None => Action::ToggleTheme,
        }
    }
}

/// Command-line representation of the theme
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(val: ThemeArg) -> Self {
        match val {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Reads a yes/no answer; anything but "y"/"yes" means no.
fn read_confirmation(input: &mut impl BufRead) -> Result<bool> {
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Dispatches commands into the store and renders the resulting snapshot.
pub struct Cli {
    store: Store<SqliteStorage>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: Store<SqliteStorage>, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    fn state(&self) -> &AppState {
        self.store.state()
    }

    fn subtask_count(&self, task: usize) -> usize {
        self.state().task(task).map_or(0, |t| t.subtasks.len())
    }

    fn render_task(&self, index: usize) -> Result<()> {
        match self.state().task(index) {
            Some(task) => self.renderer.render(&format!("# {index}. {task}")),
            None => self.list(),
        }
    }

    fn render_status(&self, status: &OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())?;
        self.renderer.render("\n")
    }

    /// Render every task with its subtask progress
    pub fn list(&self) -> Result<()> {
        let summaries = TaskSummaries::from(self.state());
        self.renderer
            .render(&format!("# Tasks\n\n{summaries}"))
    }

    pub fn handle_task_command(&mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let before = self.state().tasks.len();
                self.store.dispatch(args.into())?;
                let after = self.state().tasks.len();
                if after > before {
                    self.render_status(&OperationStatus::success(format!(
                        "Added task {}",
                        after - 1
                    )))?;
                } else {
                    self.render_status(&OperationStatus::failure("Task title is blank"))?;
                }
                self.list()
            }
            TaskCommands::Show(args) => {
                self.state()
                    .task(args.index)
                    .ok_or(StoreError::TaskNotFound { index: args.index })?;
                self.render_task(args.index)
            }
            TaskCommands::Rename(args) => {
                if args.title.trim().is_empty() {
                    self.state()
                        .task(args.index)
                        .ok_or(StoreError::TaskNotFound { index: args.index })?;
                    self.render_status(&OperationStatus::failure("Task title is blank"))?;
                    return self.render_task(args.index);
                }
                self.store.toggle_task_editing(args.index)?;
                self.store.rename_task(args.index, &args.title)?;
                self.store.toggle_task_editing(args.index)?;
                self.render_task(args.index)
            }
            TaskCommands::Toggle(args) => {
                self.store.toggle_task_completion(args.index)?;
                self.render_task(args.index)
            }
            TaskCommands::Delete(args) => self.delete_task(&args),
        }
    }

    fn delete_task(&mut self, args: &DeleteTaskArgs) -> Result<()> {
        self.store.request_task_deletion(args.index)?;
        let title = self
            .state()
            .pending_deletion_task()
            .map(|task| task.title.clone())
            .unwrap_or_default();

        let confirmed = args.yes || {
            eprint!("Delete task {} '{title}'? [y/N] ", args.index);
            io::stderr().flush().context("Failed to flush prompt")?;
            read_confirmation(&mut io::stdin().lock())?
        };

        let status = if confirmed {
            self.store.confirm_task_deletion()?;
            OperationStatus::success(format!("Deleted task '{title}'"))
        } else {
            debug!("Deletion of task {} cancelled", args.index);
            self.store.cancel_task_deletion()?;
            OperationStatus::failure(format!("Kept task '{title}'"))
        };
        self.render_status(&status)?;
        self.list()
    }

    pub fn handle_subtask_command(&mut self, command: SubtaskCommands) -> Result<()> {
        let task = match command {
            SubtaskCommands::Add(args) => {
                let before = self.subtask_count(args.task);
                self.store.set_pending_subtask_text(args.task, &args.text)?;
                self.store.add_subtask(args.task)?;
                if self.subtask_count(args.task) == before {
                    self.render_status(&OperationStatus::failure("Subtask text is blank"))?;
                }
                args.task
            }
            SubtaskCommands::Rename(args) => {
                if args.text.trim().is_empty() {
                    self.state()
                        .task(args.task)
                        .and_then(|task| task.subtasks.get(args.index))
                        .ok_or(StoreError::SubtaskNotFound {
                            task: args.task,
                            index: args.index,
                        })?;
                    self.render_status(&OperationStatus::failure("Subtask text is blank"))?;
                    return self.render_task(args.task);
                }
                self.store.toggle_subtask_editing(args.task, args.index)?;
                self.store
                    .rename_subtask(args.task, args.index, &args.text)?;
                self.store.toggle_subtask_editing(args.task, args.index)?;
                args.task
            }
            SubtaskCommands::Toggle(args) => {
                self.store
                    .toggle_subtask_completion(args.task, args.index)?;
                args.task
            }
            SubtaskCommands::Delete(args) => {
                self.store.delete_subtask(args.task, args.index)?;
                args.task
            }
        };
        self.render_task(task)
    }

    pub fn handle_theme_command(&mut self, args: ThemeArgs) -> Result<()> {
        let theme = self.store.dispatch(args.into())?.theme;
        self.renderer.set_theme(theme);
        self.renderer.render(&format!("Theme: {theme}\n"))
    }
}
