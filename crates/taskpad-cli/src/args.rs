use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{SubtaskCommands, TaskCommands, ThemeArgs};

/// Task list with subtasks, kept on this machine
///
/// Tasks hold ordered subtasks. Completing a task completes all of its
/// subtasks; completing subtasks never completes the task. Tasks and
/// subtasks are addressed by their 0-based position as shown by `list`.
#[derive(Parser)]
#[command(version, about, name = "taskpad")]
pub struct Args {
    /// Path to the storage file. Defaults to
    /// $XDG_DATA_HOME/taskpad/taskpad.db
    #[arg(long, global = true)]
    pub storage_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Taskpad CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List all tasks with subtask progress
    #[command(aliases = ["l", "ls"])]
    List,
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage subtasks within a task
    #[command(alias = "s")]
    Subtask {
        #[command(subcommand)]
        command: SubtaskCommands,
    },
    /// Show, set or toggle the color theme
    Theme(ThemeArgs),
}
