//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::DataPaths;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, returning its exit status.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    paths: DataPaths,
}

impl CommandDispatcher {
    /// Create a dispatcher working on the given data directory.
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Data directory the commands use.
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Route the CLI subcommand to its implementation and execute it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paths = self.paths.clone();
        match &cli.command {
            Some(Commands::New(args)) => super::new::NewCommand::new(paths, args.clone()).execute(ui),
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Select(args)) => {
                super::select::SelectCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Delete(args)) => {
                super::delete::DeleteCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Steps) => super::steps::StepsCommand::new(paths).execute(ui),
            Some(Commands::Phase(args)) => {
                super::phase::PhaseCommand::new(paths, args.command.clone()).execute(ui)
            }
            Some(Commands::Update(args)) => {
                super::update::UpdateCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Plan(args)) => {
                super::plan::PlanCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Script(args)) => {
                super::plan::ScriptCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Frame(args)) => {
                super::frame::FrameCommand::new(paths, args.command.clone()).execute(ui)
            }
            Some(Commands::Export(args)) => {
                super::export::ExportCommand::new(paths, args.clone()).execute(ui)
            }
            Some(Commands::Settings(args)) => {
                super::settings::SettingsCommand::new(paths, args.command.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            // Without a command, show the project dashboard.
            None => super::list::ListCommand::new(paths, ListArgs::default()).execute(ui),
        }
    }
}
