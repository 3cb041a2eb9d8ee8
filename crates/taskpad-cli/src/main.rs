//! Taskpad CLI Application
//!
//! Command-line rendering layer for the taskpad task list. Every command
//! dispatches into the core store and renders the resulting snapshot.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use taskpad_core::StoreBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        storage_file,
        no_color,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_storage_path(storage_file)
        .build()
        .context("Failed to initialize task store")?;

    let renderer = TerminalRenderer::new(!no_color, store.state().theme);

    info!("Taskpad started");

    let mut cli = Cli::new(store, renderer);
    match command {
        Some(Task { command }) => cli.handle_task_command(command),
        Some(Subtask { command }) => cli.handle_subtask_command(command),
        Some(Theme(args)) => cli.handle_theme_command(args),
        Some(List) | None => cli.list(),
    }
}
